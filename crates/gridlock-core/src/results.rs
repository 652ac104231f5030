//! Race result records

use crate::{DriverId, EventId, Session};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Official finishing orders for one event.
///
/// Each session holds driver ids in finishing order (index 0 = 1st). A
/// driver absent from an order did not start or finish that session.
/// Sessions are saved incrementally by the results-entry workflow, so any
/// of the four may be empty; `updated_at` moves on every save and is
/// carried into event scores as their staleness marker.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RaceResult {
    pub event_id: EventId,
    pub qualifying: Vec<DriverId>,
    pub race1: Vec<DriverId>,
    pub race2: Vec<DriverId>,
    pub race3: Vec<DriverId>,
    pub updated_at: DateTime<Utc>,
}

impl RaceResult {
    /// Create an empty result record for an event.
    pub fn new(event_id: impl Into<EventId>, updated_at: DateTime<Utc>) -> Self {
        Self {
            event_id: event_id.into(),
            qualifying: Vec::new(),
            race1: Vec::new(),
            race2: Vec::new(),
            race3: Vec::new(),
            updated_at,
        }
    }

    /// The finishing order for a session.
    pub fn order(&self, session: Session) -> &[DriverId] {
        match session {
            Session::Qualifying => &self.qualifying,
            Session::Race1 => &self.race1,
            Session::Race2 => &self.race2,
            Session::Race3 => &self.race3,
        }
    }

    /// A driver's 1-based position in a session, or `None` for DNF/DNS.
    pub fn position_of(&self, session: Session, driver: &DriverId) -> Option<u32> {
        self.order(session)
            .iter()
            .position(|d| d == driver)
            .map(|idx| idx as u32 + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn result() -> RaceResult {
        let mut r = RaceResult::new(
            "evt-01",
            Utc.with_ymd_and_hms(2026, 4, 5, 18, 0, 0).unwrap(),
        );
        r.qualifying = vec![DriverId::new("d2"), DriverId::new("d1")];
        r.race1 = vec![DriverId::new("d1"), DriverId::new("d3"), DriverId::new("d2")];
        r
    }

    #[test]
    fn test_position_is_one_based() {
        let r = result();
        assert_eq!(r.position_of(Session::Qualifying, &DriverId::new("d2")), Some(1));
        assert_eq!(r.position_of(Session::Race1, &DriverId::new("d2")), Some(3));
    }

    #[test]
    fn test_absent_driver_has_no_position() {
        let r = result();
        assert_eq!(r.position_of(Session::Race1, &DriverId::new("d9")), None);
        // race2 was never entered
        assert_eq!(r.position_of(Session::Race2, &DriverId::new("d1")), None);
    }
}
