//! Stored entry and player profile documents.

use super::event_player_key;
use gridlock_core::{DriverId, Entry, PlayerProfile, TeamId};
use native_db::*;
use native_model::{native_model, Model};
use serde::{Deserialize, Serialize};

/// Stored team selection for one (event, player) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[native_model(id = 3, version = 1)]
#[native_db]
pub struct StoredEntry {
    /// Primary key - `{event}/{player}`.
    #[primary_key]
    pub key: String,
    #[secondary_key]
    pub event_id: String,
    pub player_id: String,
    pub display_name: String,
    pub driver_ids: Vec<String>,
}

impl StoredEntry {
    /// Create from a core Entry.
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            key: event_player_key(entry.event_id.as_str(), entry.player_id.as_str()),
            event_id: entry.event_id.as_str().to_string(),
            player_id: entry.player_id.as_str().to_string(),
            display_name: entry.display_name.clone(),
            driver_ids: entry.driver_ids.iter().map(|d| d.as_str().to_string()).collect(),
        }
    }

    /// Convert to a core Entry.
    pub fn to_entry(&self) -> Entry {
        Entry {
            event_id: self.event_id.clone().into(),
            player_id: self.player_id.clone().into(),
            display_name: self.display_name.clone(),
            driver_ids: self.driver_ids.iter().map(DriverId::new).collect(),
        }
    }
}

/// Stored league profile for one player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[native_model(id = 4, version = 1)]
#[native_db]
pub struct StoredPlayerProfile {
    /// Primary key - player document id.
    #[primary_key]
    pub player_id: String,
    pub display_name: String,
    pub team_id: Option<String>,
    pub team_name: Option<String>,
    pub budget: f64,
    pub penalties: u32,
    pub active: bool,
}

impl StoredPlayerProfile {
    /// Create from a core PlayerProfile.
    pub fn from_profile(profile: &PlayerProfile) -> Self {
        Self {
            player_id: profile.player_id.as_str().to_string(),
            display_name: profile.display_name.clone(),
            team_id: profile.team_id.as_ref().map(|t| t.as_str().to_string()),
            team_name: profile.team_name.clone(),
            budget: profile.budget,
            penalties: profile.penalties,
            active: profile.active,
        }
    }

    /// Convert to a core PlayerProfile.
    pub fn to_profile(&self) -> PlayerProfile {
        PlayerProfile {
            player_id: self.player_id.clone().into(),
            display_name: self.display_name.clone(),
            team_id: self.team_id.as_deref().map(TeamId::new),
            team_name: self.team_name.clone(),
            budget: self.budget,
            penalties: self.penalties,
            active: self.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_round_trip() {
        let entry = Entry {
            event_id: "evt-01".into(),
            player_id: "p1".into(),
            display_name: "Dave".to_string(),
            driver_ids: vec![DriverId::new("d1"), DriverId::new("d2"), DriverId::new("d3")],
        };
        let stored = StoredEntry::from_entry(&entry);
        assert_eq!(stored.key, "evt-01/p1");
        assert_eq!(stored.to_entry(), entry);
    }

    #[test]
    fn test_profile_round_trip() {
        let profile = PlayerProfile::new("p1", "Dave").with_team("apex", "Apex Racing");
        let stored = StoredPlayerProfile::from_profile(&profile);
        assert_eq!(stored.to_profile(), profile);
    }
}
