//! Gridlock DB - Document store layer using native_db
//!
//! Provides persistent storage for:
//! - League records written by external workflows (events, race results,
//!   entries, player profiles)
//! - Engine-owned output (event scores, standings, audit records)
//! - The bounded atomic write batch engine runs commit through

mod audit;
mod batch;
mod error;
mod models;
mod queries;
mod store;

pub use audit::{AuditRecord, AuditScope};
pub use batch::{StagedWrite, WriteBatch};
pub use error::{Error, Result};
pub use store::{Store, MAX_WRITES_PER_COMMIT};
