//! Player profile records (read-only collaborator data)

use crate::{PlayerId, TeamId};
use serde::{Deserialize, Serialize};

fn default_active() -> bool {
    true
}

/// League profile for one player, owned by the player-admin workflow.
///
/// The engine reads profiles only to resolve fantasy-team membership for
/// the team standings. Budget, penalties, and the active flag ride along
/// from the original player document but are not interpreted here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    pub player_id: PlayerId,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub team_id: Option<TeamId>,
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub budget: f64,
    #[serde(default)]
    pub penalties: u32,
    #[serde(default = "default_active")]
    pub active: bool,
}

impl PlayerProfile {
    /// A minimal profile with just an id and display name.
    pub fn new(player_id: impl Into<PlayerId>, display_name: impl Into<String>) -> Self {
        Self {
            player_id: player_id.into(),
            display_name: display_name.into(),
            team_id: None,
            team_name: None,
            budget: 0.0,
            penalties: 0,
            active: true,
        }
    }

    /// Assign the player to a fantasy team.
    pub fn with_team(mut self, team_id: impl Into<TeamId>, team_name: impl Into<String>) -> Self {
        self.team_id = Some(team_id.into());
        self.team_name = Some(team_name.into());
        self
    }
}
