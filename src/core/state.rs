//! Phase of a round and the trait phases implement.
//!
//! A round's phase is never stored; it is read off the number of birds
//! recorded so far.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// All methods are pure. States are plain values describing where the
/// machine currently sits, so they can be recorded in a history and
/// serialized into checkpoints.
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// The state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

/// Where a round sits in its lifecycle.
///
/// # Example
///
/// ```rust
/// use clayscore::core::{RoundPhase, State};
///
/// assert_eq!(RoundPhase::for_len(24), RoundPhase::Recording);
/// assert_eq!(RoundPhase::for_len(25), RoundPhase::Complete);
/// assert!(RoundPhase::Complete.is_final());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum RoundPhase {
    /// Fewer than 25 birds recorded; shots and configuration changes accepted.
    Recording,
    /// All 25 birds recorded; further shots are ignored and the round can be submitted.
    Complete,
}

impl RoundPhase {
    /// Phase of a round holding `len` birds.
    pub fn for_len(len: usize) -> Self {
        if len >= crate::core::BIRDS_PER_ROUND {
            Self::Complete
        } else {
            Self::Recording
        }
    }
}

impl State for RoundPhase {
    fn name(&self) -> &str {
        match self {
            Self::Recording => "Recording",
            Self::Complete => "Complete",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Complete)
    }
}
