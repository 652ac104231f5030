//! Stored document models.
//!
//! One struct per collection, kept flat for the database layer: string
//! document ids as primary keys, scan fields as secondary keys, nested
//! structures carried as serialized blobs, timestamps as unix
//! milliseconds.

mod audit;
mod entry;
mod event;
mod score;
mod standing;

pub use audit::StoredAuditRecord;
pub use entry::{StoredEntry, StoredPlayerProfile};
pub use event::{StoredEvent, StoredRaceResult};
pub use score::StoredEventScore;
pub use standing::{StoredPlayerStanding, StoredTeamStanding};

pub(crate) use entry::StoredEntryKey;
pub(crate) use event::StoredEventKey;
pub(crate) use score::StoredEventScoreKey;
pub(crate) use standing::{StoredPlayerStandingKey, StoredTeamStandingKey};

use chrono::{DateTime, Utc};

pub(crate) fn to_millis(at: DateTime<Utc>) -> i64 {
    at.timestamp_millis()
}

pub(crate) fn from_millis(ms: i64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(ms).unwrap_or(DateTime::UNIX_EPOCH)
}

/// Document key for an (event, player) pair.
pub(crate) fn event_player_key(event_id: &str, player_id: &str) -> String {
    format!("{}/{}", event_id, player_id)
}

/// Document key for a (season, player-or-team) pair.
pub(crate) fn season_key(season_id: &str, member_id: &str) -> String {
    format!("{}/{}", season_id, member_id)
}
