//! Error types for gridlock-engine

use crate::commit::ChunkFailure;
use gridlock_core::{EventId, SeasonId};
use std::fmt;
use thiserror::Error;

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Why an engine run refused to start.
///
/// Precondition failures are recoverable: the run performed no writes, so
/// the caller can fix the condition and invoke the engine again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Precondition {
    /// No event document with this id.
    EventNotFound(EventId),
    /// The event's results are not locked, so the engine may not score it.
    ResultsNotLocked(EventId),
    /// The event has no race result document.
    ResultsMissing(EventId),
    /// No entries were submitted for the event.
    NoEntries(EventId),
    /// No season events fall at or below the requested threshold.
    NoEventsInRange {
        season_id: SeasonId,
        through_event_no: u32,
    },
    /// The season has no player standings to group into teams.
    NoPlayerStandings(SeasonId),
}

impl fmt::Display for Precondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Precondition::EventNotFound(id) => write!(f, "event {} not found", id),
            Precondition::ResultsNotLocked(id) => {
                write!(f, "results for event {} are not locked", id)
            }
            Precondition::ResultsMissing(id) => {
                write!(f, "event {} has no race result record", id)
            }
            Precondition::NoEntries(id) => write!(f, "no entries submitted for event {}", id),
            Precondition::NoEventsInRange {
                season_id,
                through_event_no,
            } => write!(
                f,
                "season {} has no events at or below event number {}",
                season_id, through_event_no
            ),
            Precondition::NoPlayerStandings(season) => {
                write!(f, "season {} has no player standings to group", season)
            }
        }
    }
}

/// Errors that can occur in gridlock-engine
#[derive(Debug, Error)]
pub enum Error {
    /// A run precondition failed; nothing was written.
    #[error("precondition failed: {0}")]
    Precondition(Precondition),

    /// Some write chunks failed to commit.
    ///
    /// Every chunk was attempted; `failures` lists the ones that did not
    /// land, with enough detail for the operator to rerun. A rerun is
    /// always safe because runs fully replace their output set.
    #[error("partial commit: {committed} of {attempted} chunks committed, {} failed", .failures.len())]
    PartialCommit {
        attempted: usize,
        committed: usize,
        failures: Vec<ChunkFailure>,
    },

    /// Store error
    #[error("store error: {0}")]
    Store(#[from] gridlock_db::Error),

    /// Core error
    #[error("core error: {0}")]
    Core(#[from] gridlock_core::Error),
}

impl Error {
    /// The precondition, if this is a precondition failure.
    pub fn precondition(&self) -> Option<&Precondition> {
        match self {
            Error::Precondition(p) => Some(p),
            _ => None,
        }
    }

    /// The failed chunks, if this is a partial commit.
    pub fn chunk_failures(&self) -> Option<&[ChunkFailure]> {
        match self {
            Error::PartialCommit { failures, .. } => Some(failures),
            _ => None,
        }
    }
}

// Compile-time check that Error is Send + Sync for thread-safe error propagation.
// This function is never called but will fail to compile if the bound is not satisfied.
fn _assert_error_send_sync<T: Send + Sync>() {}
fn _error_is_send_sync() {
    _assert_error_send_sync::<Error>();
}
