//! Error types for gridlock-core
//!
//! Only lock-state violations are errors here. Invalid rosters and drivers
//! missing from a session order are ordinary data (they score zero).

use crate::EventId;
use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("results for event {0} are already locked")]
    AlreadyLocked(EventId),

    #[error("results for event {0} are not locked")]
    NotLocked(EventId),

    #[error("unlocking event {0} requires a non-empty reason")]
    UnlockReasonRequired(EventId),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
