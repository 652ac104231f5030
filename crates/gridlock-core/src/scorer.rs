//! Event scoring: a validated roster against one event's finishing orders
//!
//! For each of the four sessions, each roster driver's zero-based index in
//! the finishing order becomes a 1-based position fed through the point
//! table for that session; absence scores zero for that session only. The
//! per-driver maps keep roster order so serialized sheets are byte-stable
//! across reruns.

use crate::{points, DriverId, EventId, PlayerId, RaceResult, Roster, Session};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One session's points: the subtotal plus the per-driver split.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionScore {
    pub subtotal: u32,
    pub by_driver: IndexMap<DriverId, u32>,
}

/// A full point breakdown for one (event, player) pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSheet {
    pub qualifying: SessionScore,
    pub race1: SessionScore,
    pub race2: SessionScore,
    pub race3: SessionScore,
    pub total: u32,
}

impl ScoreSheet {
    /// The block for one session.
    pub fn session(&self, session: Session) -> &SessionScore {
        match session {
            Session::Qualifying => &self.qualifying,
            Session::Race1 => &self.race1,
            Session::Race2 => &self.race2,
            Session::Race3 => &self.race3,
        }
    }

    fn session_mut(&mut self, session: Session) -> &mut SessionScore {
        match session {
            Session::Qualifying => &mut self.qualifying,
            Session::Race1 => &mut self.race1,
            Session::Race2 => &mut self.race2,
            Session::Race3 => &mut self.race3,
        }
    }
}

/// Engine-produced point record for one (event, player) pair.
///
/// Owned exclusively by the engine and fully replaced, never merged, on
/// every scoring run. `results_updated_at` snapshots the source results'
/// last save so stale scores are detectable after a correction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventScore {
    pub event_id: EventId,
    pub player_id: PlayerId,
    pub display_name: String,
    pub roster: Roster,
    pub sheet: ScoreSheet,
    pub results_updated_at: DateTime<Utc>,
    pub computed_at: DateTime<Utc>,
    pub engine_version: String,
}

/// Score a roster against an event's results.
///
/// An empty (invalid) roster produces the all-zero sheet.
pub fn score(roster: &Roster, results: &RaceResult) -> ScoreSheet {
    let mut sheet = ScoreSheet::default();
    for session in Session::ALL {
        *sheet.session_mut(session) = score_session(roster, results, session);
    }
    sheet.total = Session::ALL
        .iter()
        .map(|s| sheet.session(*s).subtotal)
        .sum();
    sheet
}

fn score_session(roster: &Roster, results: &RaceResult, session: Session) -> SessionScore {
    let mut by_driver = IndexMap::with_capacity(roster.len());
    let mut subtotal = 0;
    for driver in roster.iter() {
        let pts = results
            .position_of(session, driver)
            .map(|pos| points::points_for(session, pos))
            .unwrap_or(0);
        by_driver.insert(driver.clone(), pts);
        subtotal += pts;
    }
    SessionScore { subtotal, by_driver }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn ids(raw: &[&str]) -> Vec<DriverId> {
        raw.iter().map(|s| DriverId::new(*s)).collect()
    }

    fn results() -> RaceResult {
        let mut r = RaceResult::new(
            "evt-01",
            Utc.with_ymd_and_hms(2026, 4, 5, 18, 0, 0).unwrap(),
        );
        r.qualifying = ids(&["d2", "d1", "d9"]);
        r.race1 = ids(&["d1", "d3", "d2"]);
        r
    }

    #[test]
    fn test_reference_scenario() {
        let roster = Roster::validate(&ids(&["d1", "d2", "d3"]));
        let sheet = score(&roster, &results());

        assert_eq!(sheet.qualifying.by_driver[&DriverId::new("d1")], 5);
        assert_eq!(sheet.qualifying.by_driver[&DriverId::new("d2")], 6);
        assert_eq!(sheet.qualifying.by_driver[&DriverId::new("d3")], 0);
        assert_eq!(sheet.qualifying.subtotal, 11);

        assert_eq!(sheet.race1.by_driver[&DriverId::new("d1")], 26);
        assert_eq!(sheet.race1.by_driver[&DriverId::new("d2")], 24);
        assert_eq!(sheet.race1.by_driver[&DriverId::new("d3")], 25);
        assert_eq!(sheet.race1.subtotal, 75);

        assert_eq!(sheet.race2.subtotal, 0);
        assert_eq!(sheet.race3.subtotal, 0);
        assert_eq!(sheet.total, 86);
    }

    #[test]
    fn test_empty_roster_scores_zero() {
        let sheet = score(&Roster::empty(), &results());
        assert_eq!(sheet.total, 0);
        for session in Session::ALL {
            assert_eq!(sheet.session(session).subtotal, 0);
            assert!(sheet.session(session).by_driver.is_empty());
        }
    }

    #[test]
    fn test_oversized_roster_scores_zero_regardless_of_results() {
        let roster = Roster::validate(&ids(&["d1", "d2", "d3", "d4", "d5", "d6", "d7"]));
        let sheet = score(&roster, &results());
        assert_eq!(sheet.total, 0);
        assert_eq!(sheet.race1.subtotal, 0);
    }

    #[test]
    fn test_withdrawn_driver_zero_in_that_session_only() {
        // d3 set no qualifying time but raced.
        let roster = Roster::validate(&ids(&["d1", "d2", "d3"]));
        let sheet = score(&roster, &results());
        assert_eq!(sheet.qualifying.by_driver[&DriverId::new("d3")], 0);
        assert_eq!(sheet.race1.by_driver[&DriverId::new("d3")], 25);
    }

    #[test]
    fn test_driver_outside_roster_earns_nothing() {
        // d9 qualified first of the non-roster drivers but is not picked.
        let roster = Roster::validate(&ids(&["d1", "d2", "d3"]));
        let sheet = score(&roster, &results());
        assert!(!sheet.qualifying.by_driver.contains_key(&DriverId::new("d9")));
    }

    #[test]
    fn test_by_driver_keeps_roster_order() {
        let roster = Roster::validate(&ids(&["d3", "d1", "d2"]));
        let sheet = score(&roster, &results());
        let keys: Vec<&DriverId> = sheet.race1.by_driver.keys().collect();
        assert_eq!(keys, ids(&["d3", "d1", "d2"]).iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_sheet_round_trips_through_ron() {
        let roster = Roster::validate(&ids(&["d1", "d2", "d3"]));
        let sheet = score(&roster, &results());
        let encoded = ron::to_string(&sheet).expect("serialize");
        let decoded: ScoreSheet = ron::from_str(&encoded).expect("deserialize");
        assert_eq!(decoded, sheet);
    }
}
