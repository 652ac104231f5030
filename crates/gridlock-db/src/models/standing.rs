//! Stored standings documents.

use super::{from_millis, season_key, to_millis};
use gridlock_core::{EventId, PlayerStanding, TeamMember, TeamStanding};
use native_db::*;
use native_model::{native_model, Model};
use serde::{Deserialize, Serialize};

/// Stored season-cumulative standing for one player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[native_model(id = 6, version = 1)]
#[native_db]
pub struct StoredPlayerStanding {
    /// Primary key - `{season}/{player}`.
    #[primary_key]
    pub key: String,
    #[secondary_key]
    pub season_id: String,
    pub player_id: String,
    pub display_name: String,
    pub total: u32,
    pub through_event_id: String,
    pub through_event_no: u32,
    pub event_ids: Vec<String>,
    pub computed_at_ms: i64,
    pub engine_version: String,
}

impl StoredPlayerStanding {
    /// Create from a core PlayerStanding.
    pub fn from_standing(standing: &PlayerStanding) -> Self {
        Self {
            key: season_key(standing.season_id.as_str(), standing.player_id.as_str()),
            season_id: standing.season_id.as_str().to_string(),
            player_id: standing.player_id.as_str().to_string(),
            display_name: standing.display_name.clone(),
            total: standing.total,
            through_event_id: standing.through_event_id.as_str().to_string(),
            through_event_no: standing.through_event_no,
            event_ids: standing.event_ids.iter().map(|e| e.as_str().to_string()).collect(),
            computed_at_ms: to_millis(standing.computed_at),
            engine_version: standing.engine_version.clone(),
        }
    }

    /// Convert to a core PlayerStanding.
    pub fn to_standing(&self) -> PlayerStanding {
        PlayerStanding {
            season_id: self.season_id.clone().into(),
            player_id: self.player_id.clone().into(),
            display_name: self.display_name.clone(),
            total: self.total,
            through_event_id: self.through_event_id.clone().into(),
            through_event_no: self.through_event_no,
            event_ids: self.event_ids.iter().map(EventId::new).collect(),
            computed_at: from_millis(self.computed_at_ms),
            engine_version: self.engine_version.clone(),
        }
    }
}

/// Stored season-cumulative standing for one fantasy team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[native_model(id = 7, version = 1)]
#[native_db]
pub struct StoredTeamStanding {
    /// Primary key - `{season}/{team}`.
    #[primary_key]
    pub key: String,
    #[secondary_key]
    pub season_id: String,
    pub team_id: String,
    pub team_name: String,
    pub total: u32,
    /// Serialized member list, sorted by individual total.
    pub members: Vec<u8>,
    pub through_event_no: u32,
    pub computed_at_ms: i64,
    pub engine_version: String,
}

impl StoredTeamStanding {
    /// Create from a core TeamStanding.
    pub fn from_standing(standing: &TeamStanding) -> Self {
        let members = bincode::serialize(&standing.members).unwrap_or_default();
        Self {
            key: season_key(standing.season_id.as_str(), standing.team_id.as_str()),
            season_id: standing.season_id.as_str().to_string(),
            team_id: standing.team_id.as_str().to_string(),
            team_name: standing.team_name.clone(),
            total: standing.total,
            members,
            through_event_no: standing.through_event_no,
            computed_at_ms: to_millis(standing.computed_at),
            engine_version: standing.engine_version.clone(),
        }
    }

    /// Convert to a core TeamStanding.
    pub fn to_standing(&self) -> TeamStanding {
        let members: Vec<TeamMember> = bincode::deserialize(&self.members).unwrap_or_default();
        TeamStanding {
            season_id: self.season_id.clone().into(),
            team_id: self.team_id.clone().into(),
            team_name: self.team_name.clone(),
            total: self.total,
            members,
            through_event_no: self.through_event_no,
            computed_at: from_millis(self.computed_at_ms),
            engine_version: self.engine_version.clone(),
        }
    }
}
