//! Guard predicates for round operations.
//!
//! Each guard is a pure function of the birds recorded so far. The
//! round consults them at the point of mutation, and a hosting surface
//! can call the same functions to enable or disable its controls.

use super::options::BirdResult;
use super::BIRDS_PER_ROUND;

/// A shot may be appended while the round holds fewer than 25 birds.
///
/// ```rust
/// use clayscore::core::guard;
/// use clayscore::BirdResult;
///
/// let birds = vec![BirdResult::Hit; 24];
/// assert!(guard::can_record(&birds));
/// assert!(!guard::can_record(&vec![BirdResult::Hit; 25]));
/// ```
pub fn can_record(birds: &[BirdResult]) -> bool {
    birds.len() < BIRDS_PER_ROUND
}

/// Undo is available once at least one bird is recorded.
pub fn can_undo(birds: &[BirdResult]) -> bool {
    !birds.is_empty()
}

/// Submission requires exactly 25 birds.
pub fn can_submit(birds: &[BirdResult]) -> bool {
    birds.len() == BIRDS_PER_ROUND
}
