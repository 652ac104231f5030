//! The event score writer
//!
//! Reads every entry for a locked event, validates and scores it, and
//! replaces the event's whole score set in chunked atomic commits. A run
//! either refuses up front (precondition failure, zero writes) or stages
//! everything and commits — there is no partially-scored event state
//! other than a reported partial commit, and rerunning one of those is
//! always safe because the next run fully replaces the set again.

use crate::commit::commit_chunked;
use crate::engine::Engine;
use crate::error::{Error, Precondition, Result};
use chrono::{DateTime, Utc};
use gridlock_core::{score, EventId, EventScore, ENGINE_VERSION, RULE_SET};
use gridlock_db::{AuditRecord, AuditScope, WriteBatch};
use std::collections::HashSet;
use std::fmt;
use tracing::info;

/// Summary of one event scoring run.
#[derive(Debug, Clone)]
pub struct ScoringReport {
    pub event_id: EventId,
    pub event_no: u32,
    pub entries_scored: usize,
    /// Entries whose roster passed validation; the rest scored zero.
    pub valid_rosters: usize,
    pub writes_committed: usize,
    pub chunks_committed: usize,
    /// The source results' last save, stamped into every score document.
    pub results_updated_at: DateTime<Utc>,
}

impl fmt::Display for ScoringReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "event {} scored: {} entries ({} valid rosters), {} writes in {} chunks",
            self.event_id,
            self.entries_scored,
            self.valid_rosters,
            self.writes_committed,
            self.chunks_committed
        )
    }
}

impl Engine {
    /// Score every entry for a locked event, replacing the event's score
    /// set.
    ///
    /// Preconditions, checked against the store at call time: the event
    /// exists, its results are locked, a race result record is present,
    /// and at least one entry was submitted. Any failure reports the
    /// specific reason and performs no writes.
    pub fn score_event(&self, event_id: &EventId) -> Result<ScoringReport> {
        let event = self.load_known_event(event_id)?;
        if !event.results_locked {
            return Err(Error::Precondition(Precondition::ResultsNotLocked(
                event_id.clone(),
            )));
        }
        let results = self.store.load_result(event_id)?.ok_or_else(|| {
            Error::Precondition(Precondition::ResultsMissing(event_id.clone()))
        })?;
        let entries = self.store.entries_for_event(event_id)?;
        if entries.is_empty() {
            return Err(Error::Precondition(Precondition::NoEntries(event_id.clone())));
        }

        let computed_at = Utc::now();
        let mut batch = WriteBatch::new();
        let mut scored_players = HashSet::new();
        let mut valid_rosters = 0;
        for entry in &entries {
            let roster = entry.roster();
            if !roster.is_empty() {
                valid_rosters += 1;
            }
            let sheet = score(&roster, &results);
            scored_players.insert(entry.player_id.clone());
            batch.put_event_score(EventScore {
                event_id: event_id.clone(),
                player_id: entry.player_id.clone(),
                display_name: entry.display_name.clone(),
                roster,
                sheet,
                results_updated_at: results.updated_at,
                computed_at,
                engine_version: ENGINE_VERSION.to_string(),
            });
        }

        // Full replace: score documents for players no longer entered go too.
        for prior in self.store.scores_for_event(event_id)? {
            if !scored_players.contains(&prior.player_id) {
                batch.remove_event_score(event_id.clone(), prior.player_id);
            }
        }

        let stats = commit_chunked(&self.store, batch, self.config.batch_size())?;
        self.write_audit(AuditRecord {
            scope: AuditScope::EventScoring {
                event_id: event_id.clone(),
            },
            records_written: entries.len() as u32,
            events_included: 1,
            through_event_no: event.event_no,
            source_updated_at: Some(results.updated_at),
            rule_set: RULE_SET.to_string(),
            engine_version: ENGINE_VERSION.to_string(),
            run_at: computed_at,
        })?;

        info!(
            event = %event_id,
            entries = entries.len(),
            chunks = stats.chunks_committed,
            "event scored"
        );
        Ok(ScoringReport {
            event_id: event_id.clone(),
            event_no: event.event_no,
            entries_scored: entries.len(),
            valid_rosters,
            writes_committed: stats.writes_committed,
            chunks_committed: stats.chunks_committed,
            results_updated_at: results.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use gridlock_core::{DriverId, Entry, Event, PlayerId, RaceResult};
    use gridlock_db::Store;

    fn ids(raw: &[&str]) -> Vec<DriverId> {
        raw.iter().map(|s| DriverId::new(*s)).collect()
    }

    fn entry(event: &str, player: &str, name: &str, drivers: &[&str]) -> Entry {
        Entry {
            event_id: event.into(),
            player_id: player.into(),
            display_name: name.to_string(),
            driver_ids: ids(drivers),
        }
    }

    /// Event 1 at Donington with the reference results: qualifying
    /// [d2, d1, d9], race1 [d1, d3, d2], races 2 and 3 not yet entered.
    fn seed_event(engine: &Engine) {
        engine
            .store()
            .save_event(&Event::new("evt-01", "2026", 1, "Donington Park"))
            .unwrap();
        let mut results = RaceResult::new("evt-01", Utc::now());
        results.qualifying = ids(&["d2", "d1", "d9"]);
        results.race1 = ids(&["d1", "d3", "d2"]);
        engine.store().save_result(&results).unwrap();
    }

    fn engine() -> Engine {
        Engine::new(Store::in_memory().unwrap())
    }

    fn evt() -> EventId {
        EventId::new("evt-01")
    }

    #[test]
    fn test_unlocked_event_is_not_scored() {
        let engine = engine();
        seed_event(&engine);
        engine
            .store()
            .save_entry(&entry("evt-01", "p1", "Dave", &["d1", "d2", "d3"]))
            .unwrap();

        let err = engine.score_event(&evt()).unwrap_err();
        assert!(matches!(
            err.precondition(),
            Some(Precondition::ResultsNotLocked(_))
        ));
        assert!(engine.store().scores_for_event(&evt()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_results_reported() {
        let engine = engine();
        engine
            .store()
            .save_event(&Event::new("evt-01", "2026", 1, "Donington Park"))
            .unwrap();
        engine
            .store()
            .save_entry(&entry("evt-01", "p1", "Dave", &["d1", "d2", "d3"]))
            .unwrap();
        engine.lock_event(&evt(), "admin").unwrap();

        let err = engine.score_event(&evt()).unwrap_err();
        assert!(matches!(
            err.precondition(),
            Some(Precondition::ResultsMissing(_))
        ));
    }

    #[test]
    fn test_zero_entries_reported() {
        let engine = engine();
        seed_event(&engine);
        engine.lock_event(&evt(), "admin").unwrap();

        let err = engine.score_event(&evt()).unwrap_err();
        assert!(matches!(err.precondition(), Some(Precondition::NoEntries(_))));
    }

    #[test]
    fn test_reference_scenario_persisted() {
        let engine = engine();
        seed_event(&engine);
        engine
            .store()
            .save_entry(&entry("evt-01", "p1", "Dave", &["d1", "d2", "d3"]))
            .unwrap();
        engine.lock_event(&evt(), "admin").unwrap();

        let report = engine.score_event(&evt()).unwrap();
        assert_eq!(report.entries_scored, 1);
        assert_eq!(report.valid_rosters, 1);

        let stored = engine
            .store()
            .load_event_score(&evt(), &PlayerId::new("p1"))
            .unwrap()
            .unwrap();
        assert_eq!(stored.sheet.qualifying.subtotal, 11);
        assert_eq!(stored.sheet.race1.subtotal, 75);
        assert_eq!(stored.sheet.total, 86);
        assert_eq!(stored.results_updated_at, report.results_updated_at);
        assert_eq!(stored.engine_version, ENGINE_VERSION);
    }

    #[test]
    fn test_invalid_roster_scores_zero_without_failing() {
        let engine = engine();
        seed_event(&engine);
        engine
            .store()
            .save_entry(&entry(
                "evt-01",
                "p1",
                "Greedy",
                &["d1", "d2", "d3", "d4", "d5", "d6", "d7"],
            ))
            .unwrap();
        engine.lock_event(&evt(), "admin").unwrap();

        let report = engine.score_event(&evt()).unwrap();
        assert_eq!(report.entries_scored, 1);
        assert_eq!(report.valid_rosters, 0);

        let stored = engine
            .store()
            .load_event_score(&evt(), &PlayerId::new("p1"))
            .unwrap()
            .unwrap();
        assert_eq!(stored.sheet.total, 0);
        assert!(stored.roster.is_empty());
    }

    #[test]
    fn test_rerun_is_idempotent() {
        let engine = engine();
        seed_event(&engine);
        engine
            .store()
            .save_entry(&entry("evt-01", "p1", "Dave", &["d1", "d2", "d3"]))
            .unwrap();
        engine
            .store()
            .save_entry(&entry("evt-01", "p2", "Sam", &["d2", "d3", "d9"]))
            .unwrap();
        engine.lock_event(&evt(), "admin").unwrap();

        engine.score_event(&evt()).unwrap();
        let mut first = engine.store().scores_for_event(&evt()).unwrap();
        engine.score_event(&evt()).unwrap();
        let mut second = engine.store().scores_for_event(&evt()).unwrap();

        first.sort_by(|a, b| a.player_id.as_str().cmp(b.player_id.as_str()));
        second.sort_by(|a, b| a.player_id.as_str().cmp(b.player_id.as_str()));
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.player_id, b.player_id);
            assert_eq!(a.roster, b.roster);
            assert_eq!(a.sheet, b.sheet);
            assert_eq!(a.results_updated_at, b.results_updated_at);
        }
    }

    #[test]
    fn test_roster_correction_fully_replaces_breakdown() {
        let engine = engine();
        seed_event(&engine);
        engine
            .store()
            .save_entry(&entry("evt-01", "p1", "Dave", &["d1", "d2", "d3"]))
            .unwrap();
        engine.lock_event(&evt(), "admin").unwrap();
        engine.score_event(&evt()).unwrap();

        // d3 swapped out between runs
        engine
            .store()
            .save_entry(&entry("evt-01", "p1", "Dave", &["d1", "d2", "d9"]))
            .unwrap();
        engine.score_event(&evt()).unwrap();

        let stored = engine
            .store()
            .load_event_score(&evt(), &PlayerId::new("p1"))
            .unwrap()
            .unwrap();
        let d3 = DriverId::new("d3");
        assert!(!stored.sheet.race1.by_driver.contains_key(&d3));
        assert!(!stored.sheet.qualifying.by_driver.contains_key(&d3));
        // d3's race1 points (25) gone, d9 contributes 0 there
        assert_eq!(stored.sheet.race1.subtotal, 50);
    }

    #[test]
    fn test_departed_player_document_removed() {
        let engine = engine();
        seed_event(&engine);
        engine
            .store()
            .save_entry(&entry("evt-01", "p1", "Dave", &["d1", "d2", "d3"]))
            .unwrap();
        engine
            .store()
            .save_entry(&entry("evt-01", "p2", "Sam", &["d2", "d3", "d9"]))
            .unwrap();
        engine.lock_event(&evt(), "admin").unwrap();
        engine.score_event(&evt()).unwrap();
        assert_eq!(engine.store().scores_for_event(&evt()).unwrap().len(), 2);

        engine
            .store()
            .delete_entry(&evt(), &PlayerId::new("p2"))
            .unwrap();
        engine.score_event(&evt()).unwrap();

        let scores = engine.store().scores_for_event(&evt()).unwrap();
        assert_eq!(scores.len(), 1);
        assert_eq!(scores[0].player_id.as_str(), "p1");
    }

    #[test]
    fn test_audit_record_written() {
        let engine = engine();
        seed_event(&engine);
        engine
            .store()
            .save_entry(&entry("evt-01", "p1", "Dave", &["d1", "d2", "d3"]))
            .unwrap();
        engine.lock_event(&evt(), "admin").unwrap();
        let report = engine.score_event(&evt()).unwrap();

        let audit = engine
            .store()
            .load_audit_record(&AuditScope::EventScoring { event_id: evt() })
            .unwrap()
            .unwrap();
        assert_eq!(audit.records_written, 1);
        assert_eq!(audit.through_event_no, 1);
        assert_eq!(audit.source_updated_at, Some(report.results_updated_at));
        assert_eq!(audit.rule_set, RULE_SET);
        assert_eq!(audit.engine_version, ENGINE_VERSION);
    }

    #[test]
    fn test_small_chunks_still_commit_everything() {
        let store = Store::in_memory().unwrap();
        let engine = Engine::with_config(store, EngineConfig::with_batch_size(2));
        seed_event(&engine);
        for n in 0..5 {
            engine
                .store()
                .save_entry(&entry(
                    "evt-01",
                    &format!("p{}", n),
                    &format!("Player {}", n),
                    &["d1", "d2", "d3"],
                ))
                .unwrap();
        }
        engine.lock_event(&evt(), "admin").unwrap();

        let report = engine.score_event(&evt()).unwrap();
        assert_eq!(report.writes_committed, 5);
        assert_eq!(report.chunks_committed, 3);
        assert_eq!(engine.store().scores_for_event(&evt()).unwrap().len(), 5);
    }

    #[test]
    fn test_partial_commit_reported_when_store_rejects_chunk() {
        // Store bound lowered below the engine's chunk size: the single
        // staged chunk is refused and the run reports it in full.
        let store = Store::in_memory().unwrap().with_max_writes_per_commit(2);
        let engine = Engine::new(store);
        seed_event(&engine);
        for n in 0..5 {
            engine
                .store()
                .save_entry(&entry(
                    "evt-01",
                    &format!("p{}", n),
                    &format!("Player {}", n),
                    &["d1", "d2", "d3"],
                ))
                .unwrap();
        }
        engine.lock_event(&evt(), "admin").unwrap();

        let err = engine.score_event(&evt()).unwrap_err();
        assert!(matches!(
            err,
            Error::PartialCommit {
                attempted: 1,
                committed: 0,
                ..
            }
        ));
        let failures = err.chunk_failures().unwrap();
        assert_eq!(failures.len(), 1);
        assert_eq!(failures[0].index, 0);
        assert_eq!(failures[0].writes, 5);

        // The refused chunk left nothing behind, audit record included
        assert!(engine.store().scores_for_event(&evt()).unwrap().is_empty());
        assert!(engine
            .store()
            .load_audit_record(&AuditScope::EventScoring { event_id: evt() })
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_scores_survive_unlock_until_rescored() {
        let engine = engine();
        seed_event(&engine);
        engine
            .store()
            .save_entry(&entry("evt-01", "p1", "Dave", &["d1", "d2", "d3"]))
            .unwrap();
        engine.lock_event(&evt(), "admin").unwrap();
        engine.score_event(&evt()).unwrap();

        engine.unlock_event(&evt(), "admin", "stewards decision").unwrap();
        let err = engine.score_event(&evt()).unwrap_err();
        assert!(matches!(
            err.precondition(),
            Some(Precondition::ResultsNotLocked(_))
        ));
        // Prior scores untouched by the refused run
        assert_eq!(engine.store().scores_for_event(&evt()).unwrap().len(), 1);
    }
}
