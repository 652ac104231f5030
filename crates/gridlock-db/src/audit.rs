//! Audit records for engine runs
//!
//! One record per engine scope, fully replaced on every run — the audit
//! trail mirrors the engine's overwrite-safe output contract rather than
//! growing an unbounded run log.

use chrono::{DateTime, Utc};
use gridlock_core::{EventId, SeasonId};
use serde::{Deserialize, Serialize};

/// Which engine operation a record describes, and its target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuditScope {
    EventScoring { event_id: EventId },
    PlayerStandings { season_id: SeasonId },
    TeamStandings { season_id: SeasonId },
}

impl AuditScope {
    /// Document key for this scope.
    pub fn key(&self) -> String {
        match self {
            AuditScope::EventScoring { event_id } => format!("event-scoring/{}", event_id),
            AuditScope::PlayerStandings { season_id } => format!("player-standings/{}", season_id),
            AuditScope::TeamStandings { season_id } => format!("team-standings/{}", season_id),
        }
    }

    pub(crate) fn kind(&self) -> &'static str {
        match self {
            AuditScope::EventScoring { .. } => "event-scoring",
            AuditScope::PlayerStandings { .. } => "player-standings",
            AuditScope::TeamStandings { .. } => "team-standings",
        }
    }

    pub(crate) fn target(&self) -> &str {
        match self {
            AuditScope::EventScoring { event_id } => event_id.as_str(),
            AuditScope::PlayerStandings { season_id } => season_id.as_str(),
            AuditScope::TeamStandings { season_id } => season_id.as_str(),
        }
    }

    pub(crate) fn from_parts(kind: &str, target: &str) -> Option<Self> {
        match kind {
            "event-scoring" => Some(AuditScope::EventScoring {
                event_id: EventId::new(target),
            }),
            "player-standings" => Some(AuditScope::PlayerStandings {
                season_id: SeasonId::new(target),
            }),
            "team-standings" => Some(AuditScope::TeamStandings {
                season_id: SeasonId::new(target),
            }),
            _ => None,
        }
    }
}

/// What one engine run did: counts, staleness marker, versions, and when.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditRecord {
    pub scope: AuditScope,
    /// Documents written by the run (entries scored, standings emitted).
    pub records_written: u32,
    /// Events folded into a standings rebuild; 1 for event scoring.
    pub events_included: u32,
    pub through_event_no: u32,
    /// Source results' last save at scoring time, for staleness checks.
    pub source_updated_at: Option<DateTime<Utc>>,
    pub rule_set: String,
    pub engine_version: String,
    pub run_at: DateTime<Utc>,
}
