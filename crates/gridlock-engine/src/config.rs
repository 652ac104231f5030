//! Engine configuration
//!
//! The only tunable is the chunk size for batched commits. The store
//! itself enforces a hard per-commit bound; the configured size is
//! clamped so a chunk can never exceed it.

use gridlock_db::MAX_WRITES_PER_COMMIT;
use serde::{Deserialize, Serialize};

/// Configuration for engine runs.
///
/// # Example
///
/// ```
/// use gridlock_engine::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.batch_size(), gridlock_db::MAX_WRITES_PER_COMMIT);
///
/// let config = EngineConfig::with_batch_size(50);
/// assert_eq!(config.batch_size(), 50);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Writes committed per chunk, clamped to `[1, MAX_WRITES_PER_COMMIT]`.
    batch_size: usize,
}

impl EngineConfig {
    /// Create a configuration with the given chunk size.
    ///
    /// The size is clamped to `[1, MAX_WRITES_PER_COMMIT]`.
    pub fn with_batch_size(batch_size: usize) -> Self {
        Self {
            batch_size: batch_size.clamp(1, MAX_WRITES_PER_COMMIT),
        }
    }

    /// The configured chunk size.
    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// Set the chunk size, clamped to `[1, MAX_WRITES_PER_COMMIT]`.
    pub fn set_batch_size(&mut self, n: usize) {
        self.batch_size = n.clamp(1, MAX_WRITES_PER_COMMIT);
    }
}

impl Default for EngineConfig {
    /// Full-size chunks: one commit per `MAX_WRITES_PER_COMMIT` writes.
    fn default() -> Self {
        Self {
            batch_size: MAX_WRITES_PER_COMMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_store_bound() {
        let config = EngineConfig::default();
        assert_eq!(config.batch_size(), MAX_WRITES_PER_COMMIT);
    }

    #[test]
    fn test_batch_size_clamped_minimum() {
        let config = EngineConfig::with_batch_size(0);
        assert_eq!(config.batch_size(), 1);
    }

    #[test]
    fn test_batch_size_clamped_maximum() {
        let config = EngineConfig::with_batch_size(10_000);
        assert_eq!(config.batch_size(), MAX_WRITES_PER_COMMIT);
    }

    #[test]
    fn test_set_batch_size() {
        let mut config = EngineConfig::default();
        config.set_batch_size(25);
        assert_eq!(config.batch_size(), 25);
        config.set_batch_size(0);
        assert_eq!(config.batch_size(), 1);
    }
}
