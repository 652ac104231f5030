//! Gridlock Engine - Scoring and standings orchestration
//!
//! The engine turns locked race results and player team selections into
//! per-event scores and season standings:
//!
//! - [`Engine::lock_event`] / [`Engine::unlock_event`]: the results lock
//!   transitions that gate everything else
//! - [`Engine::score_event`]: score every entry for a locked event and
//!   replace the event's score set
//! - [`Engine::rebuild_player_standings`]: fold event scores into season
//!   player totals, bounded by a through-event threshold
//! - [`Engine::rebuild_team_standings`]: group player standings into
//!   fantasy-team totals
//!
//! ## Output contract
//!
//! Every run reads its inputs fresh from the store, stages its complete
//! output set, and commits it as a full replacement in chunks bounded by
//! the store's per-commit write limit. Reruns are idempotent and always
//! safe, including after a reported partial commit.
//!
//! ## Design principles
//!
//! 1. **No cached session state** - lock flags and inputs are read at
//!    call time, never remembered between invocations
//! 2. **Full replace, never merge** - corrections propagate completely
//!    or not at all; no document mixes fields from different runs
//! 3. **Stages are independent** - callers check each stage's result
//!    before running the next; there is no cross-stage rollback

mod commit;
mod config;
mod engine;
mod error;
mod lock;
mod score_writer;
mod standings;

pub use commit::{commit_chunked, ChunkFailure, CommitStats};
pub use config::EngineConfig;
pub use engine::Engine;
pub use error::{Error, Precondition, Result};
pub use score_writer::ScoringReport;
pub use standings::{PlayerStandingsReport, TeamStandingsReport};
