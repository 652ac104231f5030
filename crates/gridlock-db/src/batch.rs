//! Staged writes and the bounded write batch
//!
//! Engine runs stage their whole output set into a [`WriteBatch`], then
//! commit it through [`crate::Store::apply_batch`]. One applied batch is
//! one atomic transaction; the store bounds how many writes a single
//! commit may carry, so callers split oversized batches with
//! [`WriteBatch::into_chunks`] and commit each chunk independently.

use crate::audit::AuditRecord;
use gridlock_core::{EventId, EventScore, PlayerId, PlayerStanding, SeasonId, TeamId, TeamStanding};

/// A single staged write against an engine-owned collection.
///
/// Removals carry the document key parts; they are how a full-replace run
/// clears documents the new output set no longer contains.
#[derive(Debug, Clone)]
pub enum StagedWrite {
    PutEventScore(EventScore),
    RemoveEventScore {
        event_id: EventId,
        player_id: PlayerId,
    },
    PutPlayerStanding(PlayerStanding),
    RemovePlayerStanding {
        season_id: SeasonId,
        player_id: PlayerId,
    },
    PutTeamStanding(TeamStanding),
    RemoveTeamStanding {
        season_id: SeasonId,
        team_id: TeamId,
    },
    PutAuditRecord(AuditRecord),
}

/// An ordered collection of staged writes.
#[derive(Debug, Clone, Default)]
pub struct WriteBatch {
    writes: Vec<StagedWrite>,
}

impl WriteBatch {
    /// Create an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a staged write.
    pub fn push(&mut self, write: StagedWrite) {
        self.writes.push(write);
    }

    /// Stage an event score upsert.
    pub fn put_event_score(&mut self, score: EventScore) {
        self.push(StagedWrite::PutEventScore(score));
    }

    /// Stage removal of an event score document.
    pub fn remove_event_score(&mut self, event_id: EventId, player_id: PlayerId) {
        self.push(StagedWrite::RemoveEventScore { event_id, player_id });
    }

    /// Stage a player standing upsert.
    pub fn put_player_standing(&mut self, standing: PlayerStanding) {
        self.push(StagedWrite::PutPlayerStanding(standing));
    }

    /// Stage removal of a player standing document.
    pub fn remove_player_standing(&mut self, season_id: SeasonId, player_id: PlayerId) {
        self.push(StagedWrite::RemovePlayerStanding { season_id, player_id });
    }

    /// Stage a team standing upsert.
    pub fn put_team_standing(&mut self, standing: TeamStanding) {
        self.push(StagedWrite::PutTeamStanding(standing));
    }

    /// Stage removal of a team standing document.
    pub fn remove_team_standing(&mut self, season_id: SeasonId, team_id: TeamId) {
        self.push(StagedWrite::RemoveTeamStanding { season_id, team_id });
    }

    /// Stage an audit record upsert.
    pub fn put_audit_record(&mut self, record: AuditRecord) {
        self.push(StagedWrite::PutAuditRecord(record));
    }

    /// Number of staged writes.
    pub fn len(&self) -> usize {
        self.writes.len()
    }

    /// Check if the batch is empty.
    pub fn is_empty(&self) -> bool {
        self.writes.is_empty()
    }

    /// Get the staged writes in order.
    pub fn writes(&self) -> &[StagedWrite] {
        &self.writes
    }

    /// Split into batches of at most `limit` writes, preserving order.
    pub fn into_chunks(self, limit: usize) -> Vec<WriteBatch> {
        let limit = limit.max(1);
        let mut chunks = Vec::new();
        let mut writes = self.writes;
        while !writes.is_empty() {
            let rest = writes.split_off(writes.len().min(limit));
            chunks.push(WriteBatch { writes });
            writes = rest;
        }
        chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn removal(n: usize) -> StagedWrite {
        StagedWrite::RemoveEventScore {
            event_id: EventId::new("evt-01"),
            player_id: PlayerId::new(format!("p{}", n)),
        }
    }

    #[test]
    fn test_empty_batch() {
        let batch = WriteBatch::new();
        assert!(batch.is_empty());
        assert_eq!(batch.len(), 0);
        assert!(batch.into_chunks(10).is_empty());
    }

    #[test]
    fn test_chunking_preserves_order_and_sizes() {
        let mut batch = WriteBatch::new();
        for n in 0..7 {
            batch.push(removal(n));
        }
        let chunks = batch.into_chunks(3);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].len(), 3);
        assert_eq!(chunks[1].len(), 3);
        assert_eq!(chunks[2].len(), 1);

        let mut seen = Vec::new();
        for chunk in &chunks {
            for write in chunk.writes() {
                if let StagedWrite::RemoveEventScore { player_id, .. } = write {
                    seen.push(player_id.as_str().to_string());
                }
            }
        }
        assert_eq!(seen, vec!["p0", "p1", "p2", "p3", "p4", "p5", "p6"]);
    }

    #[test]
    fn test_exact_fit_yields_single_chunk() {
        let mut batch = WriteBatch::new();
        for n in 0..5 {
            batch.push(removal(n));
        }
        let chunks = batch.into_chunks(5);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].len(), 5);
    }

    #[test]
    fn test_zero_limit_treated_as_one() {
        let mut batch = WriteBatch::new();
        batch.push(removal(0));
        batch.push(removal(1));
        let chunks = batch.into_chunks(0);
        assert_eq!(chunks.len(), 2);
    }
}
