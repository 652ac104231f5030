//! Stored audit documents.

use super::{from_millis, to_millis};
use crate::audit::{AuditRecord, AuditScope};
use native_db::*;
use native_model::{native_model, Model};
use serde::{Deserialize, Serialize};

/// Stored audit record for one engine scope, replaced on every run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[native_model(id = 8, version = 1)]
#[native_db]
pub struct StoredAuditRecord {
    /// Primary key - scope key, e.g. `event-scoring/evt-01`.
    #[primary_key]
    pub key: String,
    pub kind: String,
    pub target: String,
    pub records_written: u32,
    pub events_included: u32,
    pub through_event_no: u32,
    pub source_updated_at_ms: Option<i64>,
    pub rule_set: String,
    pub engine_version: String,
    pub run_at_ms: i64,
}

impl StoredAuditRecord {
    /// Create from an AuditRecord.
    pub fn from_record(record: &AuditRecord) -> Self {
        Self {
            key: record.scope.key(),
            kind: record.scope.kind().to_string(),
            target: record.scope.target().to_string(),
            records_written: record.records_written,
            events_included: record.events_included,
            through_event_no: record.through_event_no,
            source_updated_at_ms: record.source_updated_at.map(to_millis),
            rule_set: record.rule_set.clone(),
            engine_version: record.engine_version.clone(),
            run_at_ms: to_millis(record.run_at),
        }
    }

    /// Convert to an AuditRecord. `None` for an unknown scope kind.
    pub fn to_record(&self) -> Option<AuditRecord> {
        let scope = AuditScope::from_parts(&self.kind, &self.target)?;
        Some(AuditRecord {
            scope,
            records_written: self.records_written,
            events_included: self.events_included,
            through_event_no: self.through_event_no,
            source_updated_at: self.source_updated_at_ms.map(from_millis),
            rule_set: self.rule_set.clone(),
            engine_version: self.engine_version.clone(),
            run_at: from_millis(self.run_at_ms),
        })
    }
}
