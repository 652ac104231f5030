//! Chunked commits of staged write batches
//!
//! A run stages its whole output set into one `WriteBatch`, which is then
//! committed in chunks no larger than the configured batch size. Chunks
//! commit independently; a failed chunk does not roll back the ones that
//! already landed, so failures are collected and reported in full rather
//! than swallowed or short-circuited.

use crate::error::{Error, Result};
use gridlock_db::{Store, WriteBatch};
use tracing::warn;

/// One chunk that failed to commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkFailure {
    /// Zero-based position of the chunk in commit order.
    pub index: usize,
    /// Number of writes the chunk carried.
    pub writes: usize,
    pub reason: String,
}

/// What a chunked commit actually landed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitStats {
    pub chunks_committed: usize,
    pub writes_committed: usize,
}

/// Commit a staged batch in chunks of at most `batch_size` writes.
///
/// Every chunk is attempted even after a failure so the operator sees the
/// full damage picture; any failure converts the run's outcome to
/// [`Error::PartialCommit`]. Rerunning after a partial commit is always
/// safe because engine runs fully replace their output set.
pub fn commit_chunked(store: &Store, batch: WriteBatch, batch_size: usize) -> Result<CommitStats> {
    let chunks = batch.into_chunks(batch_size);
    let attempted = chunks.len();
    let mut stats = CommitStats::default();
    let mut failures = Vec::new();

    for (index, chunk) in chunks.into_iter().enumerate() {
        let writes = chunk.len();
        match store.apply_batch(&chunk) {
            Ok(()) => {
                stats.chunks_committed += 1;
                stats.writes_committed += writes;
            }
            Err(err) => {
                warn!(chunk = index, writes, error = %err, "chunk commit failed");
                failures.push(ChunkFailure {
                    index,
                    writes,
                    reason: err.to_string(),
                });
            }
        }
    }

    if failures.is_empty() {
        Ok(stats)
    } else {
        Err(Error::PartialCommit {
            attempted,
            committed: stats.chunks_committed,
            failures,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridlock_core::{EventId, PlayerId};

    #[test]
    fn test_empty_batch_commits_nothing() {
        let store = Store::in_memory().unwrap();
        let stats = commit_chunked(&store, WriteBatch::new(), 10).unwrap();
        assert_eq!(stats, CommitStats::default());
    }

    #[test]
    fn test_chunks_count_writes() {
        let store = Store::in_memory().unwrap();
        let mut batch = WriteBatch::new();
        for n in 0..7 {
            batch.remove_event_score(EventId::new("evt-1"), PlayerId::new(format!("p{}", n)));
        }
        let stats = commit_chunked(&store, batch, 3).unwrap();
        assert_eq!(stats.chunks_committed, 3);
        assert_eq!(stats.writes_committed, 7);
    }
}
