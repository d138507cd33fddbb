//! The imperative shell around the pure round logic.
//!
//! [`RoundEntry`] owns the round in progress and a sink. Two ways of
//! finishing a round are offered:
//!
//! - [`RoundEntry::submit`] hands the record to a [`ScoreSink`] and clears
//!   the round straight away, without waiting on the sink.
//! - [`RoundEntry::prepare_submission`] returns a Stillwater effect that
//!   saves to a [`ScoreStore`]; the round is only cleared once
//!   [`RoundEntry::apply_submission`] sees the store confirm.

mod machine;
mod sink;

pub use machine::{RoundEntry, Submission};
pub use sink::{ScoreSink, ScoreStore, StoreError, SubmitError};
