//! Pure round logic.
//!
//! Nothing in this module performs I/O or talks to a sink. Options,
//! guards, the round aggregate and score derivation are all plain values
//! and functions, which keeps them trivial to test.

pub mod guard;
mod history;
mod options;
mod round;
mod score;
mod state;

pub use history::{StateHistory, StateTransition};
pub use options::{BirdResult, GameType, GaugeType, OptionError};
pub use round::{OverfullRound, Progress, Round};
pub use score::{total_score, validate_record, RecordViolation, ScoreError, ScoreRecord};
pub use state::{RoundPhase, State};

/// Birds in one round.
pub const BIRDS_PER_ROUND: usize = 25;
