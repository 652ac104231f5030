//! Player entries (team selections)

use crate::{DriverId, EventId, PlayerId, Roster};
use serde::{Deserialize, Serialize};

/// One player's team selection for one event.
///
/// `driver_ids` is the canonical roster field. Historical entry documents
/// reached the store under several field names; the serde aliases accept
/// those shapes on ingest, and a missing field deserializes as an empty
/// roster rather than failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub event_id: EventId,
    pub player_id: PlayerId,
    #[serde(default)]
    pub display_name: String,
    #[serde(
        default,
        alias = "team",
        alias = "drivers",
        alias = "selectedDrivers"
    )]
    pub driver_ids: Vec<DriverId>,
}

impl Entry {
    /// Validate this entry's submitted drivers into a roster.
    pub fn roster(&self) -> Roster {
        Roster::validate(&self.driver_ids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_shape_deserializes() {
        let entry: Entry = ron::from_str(
            r#"(
                event_id: "evt-01",
                player_id: "p1",
                display_name: "Dave",
                driver_ids: ["d1", "d2", "d3"],
            )"#,
        )
        .expect("deserialize");
        assert_eq!(entry.roster().len(), 3);
    }

    #[test]
    fn test_legacy_team_field_accepted() {
        let entry: Entry = ron::from_str(
            r#"(
                event_id: "evt-01",
                player_id: "p2",
                team: ["d1", "d2", "d3", "d4"],
            )"#,
        )
        .expect("deserialize");
        assert_eq!(entry.driver_ids.len(), 4);
        assert_eq!(entry.display_name, "");
    }

    #[test]
    fn test_legacy_selected_drivers_field_accepted() {
        let entry: Entry = ron::from_str(
            r#"(
                event_id: "evt-01",
                player_id: "p3",
                selectedDrivers: ["d9", "d8", "d7"],
            )"#,
        )
        .expect("deserialize");
        assert_eq!(entry.driver_ids.len(), 3);
    }

    #[test]
    fn test_missing_roster_field_is_empty_roster() {
        let entry: Entry = ron::from_str(
            r#"(
                event_id: "evt-01",
                player_id: "p4",
                display_name: "No Picks",
            )"#,
        )
        .expect("deserialize");
        assert!(entry.driver_ids.is_empty());
        assert!(entry.roster().is_empty());
    }
}
