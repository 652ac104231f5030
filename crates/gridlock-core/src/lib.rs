//! Gridlock Core - Pure scoring domain for a fantasy motorsport league
//!
//! This crate holds everything that computes without touching storage:
//! - Identifier newtypes for drivers, players, events, teams, and seasons
//! - The locked point tables (full-grid race scoring, top-six qualifying)
//! - Roster validation (invalid rosters score zero, they never error)
//! - The event scorer producing per-session, per-driver point sheets
//! - The results lock state machine gating when the engine may run
//! - Standings accumulation and fantasy-team grouping
//!
//! Orchestration and persistence live in `gridlock-engine` and
//! `gridlock-db`; this crate performs no I/O.

mod entry;
mod error;
mod event;
mod identity;
pub mod points;
mod profile;
mod results;
mod roster;
mod scorer;
mod standings;

pub use entry::Entry;
pub use error::{Error, Result};
pub use event::{Event, EventStatus};
pub use identity::{DriverId, EventId, PlayerId, SeasonId, TeamId};
pub use points::{points_for, qualifying_points, race_points, Session, RULE_SET};
pub use profile::PlayerProfile;
pub use results::RaceResult;
pub use roster::{Roster, MAX_DRIVERS, MIN_DRIVERS};
pub use scorer::{score, EventScore, ScoreSheet, SessionScore};
pub use standings::{
    group_teams, PlayerStanding, StandingsLedger, TeamMember, TeamStanding, UNASSIGNED_TEAM,
};

/// Version tag stamped onto every engine-produced document.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
