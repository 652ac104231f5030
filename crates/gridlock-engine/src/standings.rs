//! Season standings builders
//!
//! Both builders read their inputs fresh, rebuild from scratch, and fully
//! replace the prior standings set, so a correction to an early event is
//! completely reflected by re-scoring it and rerunning the chain. The
//! team builder must run after the player builder for the same threshold;
//! nothing enforces that ordering, and a stale mix is surfaced by the
//! recorded through-event markers rather than detected.

use crate::commit::commit_chunked;
use crate::engine::Engine;
use crate::error::{Error, Precondition, Result};
use chrono::Utc;
use gridlock_core::{
    group_teams, PlayerId, PlayerProfile, SeasonId, StandingsLedger, TeamId, ENGINE_VERSION,
    RULE_SET,
};
use gridlock_db::{AuditRecord, AuditScope, WriteBatch};
use std::collections::{HashMap, HashSet};
use std::fmt;
use tracing::info;

/// Summary of one player standings rebuild.
#[derive(Debug, Clone)]
pub struct PlayerStandingsReport {
    pub season_id: SeasonId,
    pub through_event_no: u32,
    pub events_included: usize,
    pub players_written: usize,
    pub writes_committed: usize,
    pub chunks_committed: usize,
}

impl fmt::Display for PlayerStandingsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "season {} player standings through event {}: {} players from {} events",
            self.season_id, self.through_event_no, self.players_written, self.events_included
        )
    }
}

/// Summary of one team standings rebuild.
#[derive(Debug, Clone)]
pub struct TeamStandingsReport {
    pub season_id: SeasonId,
    pub through_event_no: u32,
    pub players_grouped: usize,
    pub teams_written: usize,
    pub writes_committed: usize,
    pub chunks_committed: usize,
}

impl fmt::Display for TeamStandingsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "season {} team standings: {} teams from {} players",
            self.season_id, self.teams_written, self.players_grouped
        )
    }
}

impl Engine {
    /// Rebuild a season's player standings through an event threshold.
    ///
    /// Includes every season event whose sequence number is at or below
    /// the threshold, regardless of the order results were saved in.
    /// Players appear only for events they entered; skipped events
    /// contribute no term.
    pub fn rebuild_player_standings(
        &self,
        season_id: &SeasonId,
        through_event_no: u32,
    ) -> Result<PlayerStandingsReport> {
        let events = self.store.events_through(season_id, through_event_no)?;
        let Some(through) = events.last().cloned() else {
            return Err(Error::Precondition(Precondition::NoEventsInRange {
                season_id: season_id.clone(),
                through_event_no,
            }));
        };

        let computed_at = Utc::now();
        let mut ledger = StandingsLedger::new();
        for event in &events {
            for event_score in self.store.scores_for_event(&event.id)? {
                ledger.fold(
                    &event.id,
                    &event_score.player_id,
                    &event_score.display_name,
                    event_score.sheet.total,
                );
            }
        }

        let standings =
            ledger.into_standings(season_id, &through.id, through.event_no, computed_at, ENGINE_VERSION);
        let players_written = standings.len();
        let rebuilt: HashSet<PlayerId> = standings.iter().map(|s| s.player_id.clone()).collect();

        let mut batch = WriteBatch::new();
        for standing in standings {
            batch.put_player_standing(standing);
        }
        for prior in self.store.player_standings(season_id)? {
            if !rebuilt.contains(&prior.player_id) {
                batch.remove_player_standing(season_id.clone(), prior.player_id);
            }
        }

        let stats = commit_chunked(&self.store, batch, self.config.batch_size())?;
        self.write_audit(AuditRecord {
            scope: AuditScope::PlayerStandings {
                season_id: season_id.clone(),
            },
            records_written: players_written as u32,
            events_included: events.len() as u32,
            through_event_no: through.event_no,
            source_updated_at: None,
            rule_set: RULE_SET.to_string(),
            engine_version: ENGINE_VERSION.to_string(),
            run_at: computed_at,
        })?;

        info!(
            season = %season_id,
            through = through.event_no,
            players = players_written,
            "player standings rebuilt"
        );
        Ok(PlayerStandingsReport {
            season_id: season_id.clone(),
            through_event_no: through.event_no,
            events_included: events.len(),
            players_written,
            writes_committed: stats.writes_committed,
            chunks_committed: stats.chunks_committed,
        })
    }

    /// Rebuild a season's team standings from its current player
    /// standings.
    ///
    /// The requested threshold is recorded in the audit record; the team
    /// documents themselves carry markers derived from the player
    /// standings they grouped, so an out-of-date player rebuild shows up
    /// as a marker mismatch under inspection.
    pub fn rebuild_team_standings(
        &self,
        season_id: &SeasonId,
        through_event_no: u32,
    ) -> Result<TeamStandingsReport> {
        let standings = self.store.player_standings(season_id)?;
        if standings.is_empty() {
            return Err(Error::Precondition(Precondition::NoPlayerStandings(
                season_id.clone(),
            )));
        }
        let profiles: HashMap<PlayerId, PlayerProfile> = self
            .store
            .profiles()?
            .into_iter()
            .map(|p| (p.player_id.clone(), p))
            .collect();

        let computed_at = Utc::now();
        let teams = group_teams(&standings, &profiles, computed_at, ENGINE_VERSION);
        let teams_written = teams.len();
        let rebuilt: HashSet<TeamId> = teams.iter().map(|t| t.team_id.clone()).collect();

        let mut batch = WriteBatch::new();
        for team in teams {
            batch.put_team_standing(team);
        }
        for prior in self.store.team_standings(season_id)? {
            if !rebuilt.contains(&prior.team_id) {
                batch.remove_team_standing(season_id.clone(), prior.team_id);
            }
        }

        let stats = commit_chunked(&self.store, batch, self.config.batch_size())?;
        self.write_audit(AuditRecord {
            scope: AuditScope::TeamStandings {
                season_id: season_id.clone(),
            },
            records_written: teams_written as u32,
            events_included: 0,
            through_event_no,
            source_updated_at: None,
            rule_set: RULE_SET.to_string(),
            engine_version: ENGINE_VERSION.to_string(),
            run_at: computed_at,
        })?;

        info!(
            season = %season_id,
            teams = teams_written,
            players = standings.len(),
            "team standings rebuilt"
        );
        Ok(TeamStandingsReport {
            season_id: season_id.clone(),
            through_event_no,
            players_grouped: standings.len(),
            teams_written,
            writes_committed: stats.writes_committed,
            chunks_committed: stats.chunks_committed,
        })
    }
}
