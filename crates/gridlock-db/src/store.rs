//! Database store wrapper.

use crate::audit::{AuditRecord, AuditScope};
use crate::batch::{StagedWrite, WriteBatch};
use crate::error::{Error, Result};
use crate::models::*;
use gridlock_core::{Entry, Event, EventId, EventScore, PlayerId, PlayerProfile, RaceResult};
use native_db::*;
use std::path::Path;
use std::sync::LazyLock;

/// The per-commit write bound the backing store imposes.
pub const MAX_WRITES_PER_COMMIT: usize = 500;

// Static models for the database
static MODELS: LazyLock<Models> = LazyLock::new(|| {
    let mut models = Models::new();
    models.define::<StoredEvent>().unwrap();
    models.define::<StoredRaceResult>().unwrap();
    models.define::<StoredEntry>().unwrap();
    models.define::<StoredPlayerProfile>().unwrap();
    models.define::<StoredEventScore>().unwrap();
    models.define::<StoredPlayerStanding>().unwrap();
    models.define::<StoredTeamStanding>().unwrap();
    models.define::<StoredAuditRecord>().unwrap();
    models
});

/// Document store for league and engine state.
pub struct Store {
    pub(crate) db: Database<'static>,
    max_writes: usize,
}

impl Store {
    /// Open or create a database at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = Builder::new()
            .create(&MODELS, path.as_ref())
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(Self {
            db,
            max_writes: MAX_WRITES_PER_COMMIT,
        })
    }

    /// Create an in-memory database.
    pub fn in_memory() -> Result<Self> {
        let db = Builder::new()
            .create_in_memory(&MODELS)
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(Self {
            db,
            max_writes: MAX_WRITES_PER_COMMIT,
        })
    }

    /// Lower the per-commit write bound (clamped to the store maximum).
    pub fn with_max_writes_per_commit(mut self, limit: usize) -> Self {
        self.max_writes = limit.clamp(1, MAX_WRITES_PER_COMMIT);
        self
    }

    /// The per-commit write bound callers must chunk to.
    pub fn max_writes_per_commit(&self) -> usize {
        self.max_writes
    }

    /// Save an event.
    pub fn save_event(&self, event: &Event) -> Result<()> {
        let stored = StoredEvent::from_event(event);
        let rw = self.db.rw_transaction()?;
        rw.upsert(stored)?;
        rw.commit()?;
        Ok(())
    }

    /// Load an event by ID.
    pub fn load_event(&self, id: &EventId) -> Result<Option<Event>> {
        let r = self.db.r_transaction()?;
        let stored: Option<StoredEvent> = r.get().primary(id.as_str().to_string())?;
        Ok(stored.map(|s| s.to_event()))
    }

    /// Save a race result record.
    pub fn save_result(&self, result: &RaceResult) -> Result<()> {
        let stored = StoredRaceResult::from_result(result);
        let rw = self.db.rw_transaction()?;
        rw.upsert(stored)?;
        rw.commit()?;
        Ok(())
    }

    /// Load the race result record for an event.
    pub fn load_result(&self, event_id: &EventId) -> Result<Option<RaceResult>> {
        let r = self.db.r_transaction()?;
        let stored: Option<StoredRaceResult> = r.get().primary(event_id.as_str().to_string())?;
        Ok(stored.map(|s| s.to_result()))
    }

    /// Save a player entry.
    pub fn save_entry(&self, entry: &Entry) -> Result<()> {
        let stored = StoredEntry::from_entry(entry);
        let rw = self.db.rw_transaction()?;
        rw.upsert(stored)?;
        rw.commit()?;
        Ok(())
    }

    /// Delete a player entry.
    pub fn delete_entry(&self, event_id: &EventId, player_id: &PlayerId) -> Result<()> {
        let key = event_player_key(event_id.as_str(), player_id.as_str());
        let rw = self.db.rw_transaction()?;
        let stored: Option<StoredEntry> = rw.get().primary(key)?;
        if let Some(s) = stored {
            rw.remove(s)?;
        }
        rw.commit()?;
        Ok(())
    }

    /// Save a player profile.
    pub fn save_profile(&self, profile: &PlayerProfile) -> Result<()> {
        let stored = StoredPlayerProfile::from_profile(profile);
        let rw = self.db.rw_transaction()?;
        rw.upsert(stored)?;
        rw.commit()?;
        Ok(())
    }

    /// Load one engine-produced event score.
    pub fn load_event_score(
        &self,
        event_id: &EventId,
        player_id: &PlayerId,
    ) -> Result<Option<EventScore>> {
        let key = event_player_key(event_id.as_str(), player_id.as_str());
        let r = self.db.r_transaction()?;
        let stored: Option<StoredEventScore> = r.get().primary(key)?;
        Ok(stored.map(|s| s.to_score()))
    }

    /// Load the audit record for an engine scope.
    pub fn load_audit_record(&self, scope: &AuditScope) -> Result<Option<AuditRecord>> {
        let r = self.db.r_transaction()?;
        let stored: Option<StoredAuditRecord> = r.get().primary(scope.key())?;
        Ok(stored.and_then(|s| s.to_record()))
    }

    /// Apply one write batch as a single atomic commit.
    ///
    /// Rejects batches over the per-commit bound; callers split with
    /// [`WriteBatch::into_chunks`] first.
    pub fn apply_batch(&self, batch: &WriteBatch) -> Result<()> {
        if batch.len() > self.max_writes {
            return Err(Error::BatchTooLarge {
                writes: batch.len(),
                limit: self.max_writes,
            });
        }

        let rw = self.db.rw_transaction()?;
        for write in batch.writes() {
            match write {
                StagedWrite::PutEventScore(score) => {
                    rw.upsert(StoredEventScore::from_score(score))?;
                }
                StagedWrite::RemoveEventScore { event_id, player_id } => {
                    let key = event_player_key(event_id.as_str(), player_id.as_str());
                    let stored: Option<StoredEventScore> = rw.get().primary(key)?;
                    if let Some(s) = stored {
                        rw.remove(s)?;
                    }
                }
                StagedWrite::PutPlayerStanding(standing) => {
                    rw.upsert(StoredPlayerStanding::from_standing(standing))?;
                }
                StagedWrite::RemovePlayerStanding { season_id, player_id } => {
                    let key = season_key(season_id.as_str(), player_id.as_str());
                    let stored: Option<StoredPlayerStanding> = rw.get().primary(key)?;
                    if let Some(s) = stored {
                        rw.remove(s)?;
                    }
                }
                StagedWrite::PutTeamStanding(standing) => {
                    rw.upsert(StoredTeamStanding::from_standing(standing))?;
                }
                StagedWrite::RemoveTeamStanding { season_id, team_id } => {
                    let key = season_key(season_id.as_str(), team_id.as_str());
                    let stored: Option<StoredTeamStanding> = rw.get().primary(key)?;
                    if let Some(s) = stored {
                        rw.remove(s)?;
                    }
                }
                StagedWrite::PutAuditRecord(record) => {
                    rw.upsert(StoredAuditRecord::from_record(record))?;
                }
            }
        }
        rw.commit()?;
        Ok(())
    }
}

impl From<native_db::db_type::Error> for Error {
    fn from(err: native_db::db_type::Error) -> Self {
        Error::Database(err.to_string())
    }
}
