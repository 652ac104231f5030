//! Stored event score documents.

use super::{event_player_key, from_millis, to_millis};
use gridlock_core::{DriverId, EventScore, Roster, ScoreSheet};
use native_db::*;
use native_model::{native_model, Model};
use serde::{Deserialize, Serialize};

/// Stored point breakdown for one (event, player) pair.
///
/// The grand total rides flat so standings rebuilds can fold scores
/// without touching the serialized sheet; the full per-session,
/// per-driver breakdown lives in the `sheet` blob.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[native_model(id = 5, version = 1)]
#[native_db]
pub struct StoredEventScore {
    /// Primary key - `{event}/{player}`.
    #[primary_key]
    pub key: String,
    #[secondary_key]
    pub event_id: String,
    pub player_id: String,
    pub display_name: String,
    /// Roster snapshot at scoring time.
    pub roster: Vec<String>,
    pub total: u32,
    /// Serialized ScoreSheet.
    pub sheet: Vec<u8>,
    pub results_updated_at_ms: i64,
    pub computed_at_ms: i64,
    pub engine_version: String,
}

impl StoredEventScore {
    /// Create from a core EventScore.
    pub fn from_score(score: &EventScore) -> Self {
        let sheet = bincode::serialize(&score.sheet).unwrap_or_default();
        Self {
            key: event_player_key(score.event_id.as_str(), score.player_id.as_str()),
            event_id: score.event_id.as_str().to_string(),
            player_id: score.player_id.as_str().to_string(),
            display_name: score.display_name.clone(),
            roster: score.roster.drivers().iter().map(|d| d.as_str().to_string()).collect(),
            total: score.sheet.total,
            sheet,
            results_updated_at_ms: to_millis(score.results_updated_at),
            computed_at_ms: to_millis(score.computed_at),
            engine_version: score.engine_version.clone(),
        }
    }

    /// Convert to a core EventScore.
    pub fn to_score(&self) -> EventScore {
        let sheet: ScoreSheet = bincode::deserialize(&self.sheet).unwrap_or_default();
        let roster: Vec<DriverId> = self.roster.iter().map(DriverId::new).collect();
        EventScore {
            event_id: self.event_id.clone().into(),
            player_id: self.player_id.clone().into(),
            display_name: self.display_name.clone(),
            roster: Roster::validate(&roster),
            sheet,
            results_updated_at: from_millis(self.results_updated_at_ms),
            computed_at: from_millis(self.computed_at_ms),
            engine_version: self.engine_version.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use gridlock_core::{score, RaceResult};

    #[test]
    fn test_score_round_trip() {
        let roster = Roster::validate(&[
            DriverId::new("d1"),
            DriverId::new("d2"),
            DriverId::new("d3"),
        ]);
        let mut results = RaceResult::new(
            "evt-01",
            Utc.with_ymd_and_hms(2026, 4, 5, 18, 0, 0).unwrap(),
        );
        results.race1 = vec![DriverId::new("d1"), DriverId::new("d3"), DriverId::new("d2")];

        let event_score = EventScore {
            event_id: "evt-01".into(),
            player_id: "p1".into(),
            display_name: "Dave".to_string(),
            roster: roster.clone(),
            sheet: score(&roster, &results),
            results_updated_at: results.updated_at,
            computed_at: Utc.with_ymd_and_hms(2026, 4, 6, 9, 0, 0).unwrap(),
            engine_version: "test".to_string(),
        };

        let stored = StoredEventScore::from_score(&event_score);
        assert_eq!(stored.key, "evt-01/p1");
        assert_eq!(stored.total, event_score.sheet.total);
        assert_eq!(stored.to_score(), event_score);
    }
}
