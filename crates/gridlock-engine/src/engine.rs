//! The engine: owns the store and runs scoring and standings builds.

use crate::config::EngineConfig;
use crate::error::Result;
use gridlock_db::{AuditRecord, Store, WriteBatch};

/// Scoring and standings engine over one league store.
///
/// Every operation reads the state it needs fresh from the store at call
/// time — there is no cached session state — and produces its output as a
/// full replacement of the prior output set. Operations are independent:
/// callers check each stage's result before running the next, and rerun a
/// failed stage rather than relying on any cross-stage rollback.
pub struct Engine {
    pub(crate) store: Store,
    pub(crate) config: EngineConfig,
}

impl Engine {
    /// Create an engine with the default configuration.
    pub fn new(store: Store) -> Self {
        Self {
            store,
            config: EngineConfig::default(),
        }
    }

    /// Create an engine with an explicit configuration.
    pub fn with_config(store: Store, config: EngineConfig) -> Self {
        Self { store, config }
    }

    /// The underlying store.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// The active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Write a run's audit record, replacing the prior record for the
    /// same scope. Called after the output commits so the record never
    /// describes writes that did not land.
    pub(crate) fn write_audit(&self, record: AuditRecord) -> Result<()> {
        let mut batch = WriteBatch::new();
        batch.put_audit_record(record);
        self.store.apply_batch(&batch)?;
        Ok(())
    }
}
