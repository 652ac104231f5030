//! Lock and unlock transitions for event results.

use crate::engine::Engine;
use crate::error::{Error, Precondition, Result};
use chrono::Utc;
use gridlock_core::{Event, EventId};
use tracing::info;

impl Engine {
    /// Lock an event's results: `unlocked → locked`.
    ///
    /// Freezes results entry and marks the event complete; scoring may
    /// run once this returns. Returns the updated event.
    pub fn lock_event(&self, event_id: &EventId, actor: &str) -> Result<Event> {
        let mut event = self.load_known_event(event_id)?;
        event.lock(actor, Utc::now())?;
        self.store.save_event(&event)?;
        info!(event = %event.id, actor, "results locked");
        Ok(event)
    }

    /// Unlock an event's results: `locked → unlocked`.
    ///
    /// Requires a non-empty reason, which is persisted on the event for
    /// audit. Scores computed before the unlock remain in place until the
    /// event is re-locked and re-scored.
    pub fn unlock_event(&self, event_id: &EventId, actor: &str, reason: &str) -> Result<Event> {
        let mut event = self.load_known_event(event_id)?;
        event.unlock(actor, Utc::now(), reason)?;
        self.store.save_event(&event)?;
        info!(event = %event.id, actor, reason, "results unlocked");
        Ok(event)
    }

    pub(crate) fn load_known_event(&self, event_id: &EventId) -> Result<Event> {
        self.store
            .load_event(event_id)?
            .ok_or_else(|| Error::Precondition(Precondition::EventNotFound(event_id.clone())))
    }
}
