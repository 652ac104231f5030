//! Roster validation
//!
//! A submitted roster is valid when, after removing duplicate driver ids,
//! it holds between [`MIN_DRIVERS`] and [`MAX_DRIVERS`] drivers. An invalid
//! roster is not an error: it becomes the empty roster, which scores zero
//! in every session.

use crate::DriverId;
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

/// Smallest roster that scores.
pub const MIN_DRIVERS: usize = 3;

/// Largest roster that scores.
pub const MAX_DRIVERS: usize = 6;

/// A validated set of drivers for one entry.
///
/// Construction goes through [`Roster::validate`]; the contained drivers
/// are unique and in first-submitted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    drivers: Vec<DriverId>,
}

impl Roster {
    /// The empty roster. Scores zero everywhere.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Validate a candidate driver list.
    ///
    /// Duplicates are dropped (first occurrence wins). If the deduplicated
    /// list falls outside the size window the whole roster is rejected and
    /// the empty roster is returned.
    pub fn validate(candidates: &[DriverId]) -> Self {
        let unique: IndexSet<&DriverId> = candidates.iter().collect();
        if (MIN_DRIVERS..=MAX_DRIVERS).contains(&unique.len()) {
            Self {
                drivers: unique.into_iter().cloned().collect(),
            }
        } else {
            Self::empty()
        }
    }

    /// The validated drivers, in submission order.
    pub fn drivers(&self) -> &[DriverId] {
        &self.drivers
    }

    /// Number of drivers in the roster.
    pub fn len(&self) -> usize {
        self.drivers.len()
    }

    /// True for the zero-scoring empty roster.
    pub fn is_empty(&self) -> bool {
        self.drivers.is_empty()
    }

    /// Iterate over the drivers.
    pub fn iter(&self) -> impl Iterator<Item = &DriverId> {
        self.drivers.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[&str]) -> Vec<DriverId> {
        raw.iter().map(|s| DriverId::new(*s)).collect()
    }

    #[test]
    fn test_valid_roster_kept_as_is() {
        let roster = Roster::validate(&ids(&["d1", "d2", "d3", "d4"]));
        assert_eq!(roster.len(), 4);
        assert_eq!(roster.drivers(), ids(&["d1", "d2", "d3", "d4"]).as_slice());
    }

    #[test]
    fn test_duplicates_removed_first_occurrence_wins() {
        let roster = Roster::validate(&ids(&["d1", "d2", "d1", "d3", "d2"]));
        assert_eq!(roster.drivers(), ids(&["d1", "d2", "d3"]).as_slice());
    }

    #[test]
    fn test_too_small_validates_to_empty() {
        assert!(Roster::validate(&ids(&["d1", "d2"])).is_empty());
        assert!(Roster::validate(&[]).is_empty());
    }

    #[test]
    fn test_too_large_validates_to_empty() {
        let seven = ids(&["d1", "d2", "d3", "d4", "d5", "d6", "d7"]);
        assert!(Roster::validate(&seven).is_empty());
    }

    #[test]
    fn test_duplicates_can_rescue_an_oversized_submission() {
        // Seven raw entries, six unique: valid after dedup.
        let raw = ids(&["d1", "d2", "d3", "d4", "d5", "d6", "d1"]);
        let roster = Roster::validate(&raw);
        assert_eq!(roster.len(), 6);
    }

    #[test]
    fn test_duplicates_can_sink_a_minimal_submission() {
        // Three raw entries, two unique: invalid after dedup.
        let raw = ids(&["d1", "d2", "d1"]);
        assert!(Roster::validate(&raw).is_empty());
    }

    #[test]
    fn test_boundary_sizes() {
        assert_eq!(Roster::validate(&ids(&["a", "b", "c"])).len(), 3);
        assert_eq!(Roster::validate(&ids(&["a", "b", "c", "d", "e", "f"])).len(), 6);
    }
}
