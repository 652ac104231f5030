//! Event records and the results lock state machine
//!
//! An event's results cycle `unlocked → locked → unlocked → …` with no
//! terminal state. Locking freezes results and marks the event complete;
//! unlocking reopens them and demands a reason, kept for audit. The engine
//! only ever scores a locked event, and it re-reads the flag from the
//! store immediately before computing rather than trusting cached state.

use crate::error::{Error, Result};
use crate::{EventId, SeasonId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle status of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Upcoming,
    Complete,
}

/// One race weekend.
///
/// Created by administrative entry, mutated only through the lock/unlock
/// transitions below, never deleted. `event_no` is the unique monotonic
/// ordering key used by the standings threshold queries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub season_id: SeasonId,
    pub event_no: u32,
    pub venue: String,
    pub round_from: u32,
    pub round_to: u32,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub status: EventStatus,
    pub results_locked: bool,
    pub locked_by: Option<String>,
    pub locked_at: Option<DateTime<Utc>>,
    pub unlocked_by: Option<String>,
    pub unlocked_at: Option<DateTime<Utc>>,
    pub unlock_reason: Option<String>,
}

impl Event {
    /// Create an upcoming, unlocked event.
    pub fn new(
        id: impl Into<EventId>,
        season_id: impl Into<SeasonId>,
        event_no: u32,
        venue: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            season_id: season_id.into(),
            event_no,
            venue: venue.into(),
            round_from: 0,
            round_to: 0,
            date_from: None,
            date_to: None,
            status: EventStatus::Upcoming,
            results_locked: false,
            locked_by: None,
            locked_at: None,
            unlocked_by: None,
            unlocked_at: None,
            unlock_reason: None,
        }
    }

    /// Set the round range covered by this weekend.
    pub fn with_rounds(mut self, from: u32, to: u32) -> Self {
        self.round_from = from;
        self.round_to = to;
        self
    }

    /// Set the weekend date range.
    pub fn with_dates(mut self, from: NaiveDate, to: NaiveDate) -> Self {
        self.date_from = Some(from);
        self.date_to = Some(to);
        self
    }

    /// Lock the results: `unlocked → locked`.
    ///
    /// Also flips the event status to complete. Locking an already-locked
    /// event is an error so a misfired admin action is surfaced rather
    /// than silently absorbed.
    pub fn lock(&mut self, actor: &str, at: DateTime<Utc>) -> Result<()> {
        if self.results_locked {
            return Err(Error::AlreadyLocked(self.id.clone()));
        }
        self.results_locked = true;
        self.status = EventStatus::Complete;
        self.locked_by = Some(actor.to_string());
        self.locked_at = Some(at);
        Ok(())
    }

    /// Unlock the results: `locked → unlocked`.
    ///
    /// The reason is mandatory, trimmed, and persisted for audit. The
    /// status stays complete; only the lock reopens.
    pub fn unlock(&mut self, actor: &str, at: DateTime<Utc>, reason: &str) -> Result<()> {
        if !self.results_locked {
            return Err(Error::NotLocked(self.id.clone()));
        }
        let reason = reason.trim();
        if reason.is_empty() {
            return Err(Error::UnlockReasonRequired(self.id.clone()));
        }
        self.results_locked = false;
        self.unlocked_by = Some(actor.to_string());
        self.unlocked_at = Some(at);
        self.unlock_reason = Some(reason.to_string());
        Ok(())
    }
}
