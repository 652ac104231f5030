//! Season standings: per-player accumulation and fantasy-team grouping
//!
//! The ledger folds per-event score totals into one cumulative record per
//! player. Skipping an event is not the same as scoring zero: a skipped
//! event simply contributes no term, and no player is defaulted in for
//! events they missed. Team grouping then buckets player standings under
//! fantasy-team ids resolved from player profiles.

use crate::{EventId, PlayerId, PlayerProfile, SeasonId, TeamId};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Bucket for players with no resolvable fantasy team.
pub const UNASSIGNED_TEAM: &str = "unassigned";

/// Season-cumulative total for one player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerStanding {
    pub season_id: SeasonId,
    pub player_id: PlayerId,
    pub display_name: String,
    pub total: u32,
    pub through_event_id: EventId,
    pub through_event_no: u32,
    /// Events whose scores are folded into `total`.
    pub event_ids: Vec<EventId>,
    pub computed_at: DateTime<Utc>,
    pub engine_version: String,
}

/// One player's contribution inside a team standing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub player_id: PlayerId,
    pub display_name: String,
    pub total: u32,
}

/// Season-cumulative total for one fantasy team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamStanding {
    pub season_id: SeasonId,
    pub team_id: TeamId,
    pub team_name: String,
    pub total: u32,
    /// Members sorted by individual total, highest first.
    pub members: Vec<TeamMember>,
    pub through_event_no: u32,
    pub computed_at: DateTime<Utc>,
    pub engine_version: String,
}

#[derive(Debug, Clone, Default)]
struct PlayerAccumulator {
    total: u32,
    display_name: String,
    event_ids: Vec<EventId>,
}

/// Accumulates per-event totals into per-player season standings.
///
/// Fold order follows event sequence number, so "latest non-empty display
/// name wins" resolves to the most recent event that carried one.
#[derive(Debug, Clone, Default)]
pub struct StandingsLedger {
    players: IndexMap<PlayerId, PlayerAccumulator>,
}

impl StandingsLedger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one event score into the ledger.
    pub fn fold(&mut self, event_id: &EventId, player_id: &PlayerId, display_name: &str, total: u32) {
        let acc = self.players.entry(player_id.clone()).or_default();
        acc.total += total;
        if !display_name.trim().is_empty() {
            acc.display_name = display_name.trim().to_string();
        }
        acc.event_ids.push(event_id.clone());
    }

    /// Number of players seen so far.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// True when no score has been folded yet.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Emit one standing per player seen, in first-seen order.
    pub fn into_standings(
        self,
        season_id: &SeasonId,
        through_event_id: &EventId,
        through_event_no: u32,
        computed_at: DateTime<Utc>,
        engine_version: &str,
    ) -> Vec<PlayerStanding> {
        self.players
            .into_iter()
            .map(|(player_id, acc)| PlayerStanding {
                season_id: season_id.clone(),
                player_id,
                display_name: acc.display_name,
                total: acc.total,
                through_event_id: through_event_id.clone(),
                through_event_no,
                event_ids: acc.event_ids,
                computed_at,
                engine_version: engine_version.to_string(),
            })
            .collect()
    }
}

/// Group player standings into team standings.
///
/// Team resolution per player: profile team name, else the team id itself
/// as display name, else the [`UNASSIGNED_TEAM`] bucket when no team id is
/// resolvable. Members and teams are both sorted by total descending (ties
/// broken by id for stable output). The recorded through-event marker is
/// the highest marker among members, which makes a stale mixed rebuild
/// visible to an operator inspecting it.
pub fn group_teams(
    standings: &[PlayerStanding],
    profiles: &HashMap<PlayerId, PlayerProfile>,
    computed_at: DateTime<Utc>,
    engine_version: &str,
) -> Vec<TeamStanding> {
    let mut teams: IndexMap<TeamId, TeamStanding> = IndexMap::new();

    for standing in standings {
        let profile = profiles.get(&standing.player_id);
        let team_id = profile
            .and_then(|p| p.team_id.clone())
            .unwrap_or_else(|| TeamId::new(UNASSIGNED_TEAM));
        let team_name = profile
            .and_then(|p| p.team_name.clone())
            .unwrap_or_else(|| team_id.as_str().to_string());

        let team = teams.entry(team_id.clone()).or_insert_with(|| TeamStanding {
            season_id: standing.season_id.clone(),
            team_id,
            team_name,
            total: 0,
            members: Vec::new(),
            through_event_no: 0,
            computed_at,
            engine_version: engine_version.to_string(),
        });
        team.total += standing.total;
        team.through_event_no = team.through_event_no.max(standing.through_event_no);
        team.members.push(TeamMember {
            player_id: standing.player_id.clone(),
            display_name: standing.display_name.clone(),
            total: standing.total,
        });
    }

    let mut teams: Vec<TeamStanding> = teams.into_values().collect();
    for team in &mut teams {
        team.members
            .sort_by(|a, b| b.total.cmp(&a.total).then(a.player_id.0.cmp(&b.player_id.0)));
    }
    teams.sort_by(|a, b| b.total.cmp(&a.total).then(a.team_id.0.cmp(&b.team_id.0)));
    teams
}
