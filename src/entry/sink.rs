//! Where finished rounds go.

use crate::core::ScoreRecord;
use thiserror::Error;

/// Fire-and-forget receiver of finished rounds.
///
/// `accept` is called exactly once per submitted round, from inside
/// [`RoundEntry::submit`](crate::RoundEntry::submit). The entry does not
/// observe what the sink does with the record.
pub trait ScoreSink {
    fn accept(&mut self, record: ScoreRecord);
}

impl ScoreSink for Vec<ScoreRecord> {
    fn accept(&mut self, record: ScoreRecord) {
        self.push(record);
    }
}

impl<F> ScoreSink for F
where
    F: FnMut(ScoreRecord),
{
    fn accept(&mut self, record: ScoreRecord) {
        self(record)
    }
}

/// Failure reported by an acknowledging store.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Score store rejected record: {reason}")]
pub struct StoreError {
    pub reason: String,
}

impl StoreError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

/// Receiver that confirms or rejects each record.
///
/// Used as the environment of
/// [`RoundEntry::prepare_submission`](crate::RoundEntry::prepare_submission).
pub trait ScoreStore {
    fn save(&self, record: &ScoreRecord) -> Result<(), StoreError>;
}

/// Errors from the acknowledging submission path.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SubmitError {
    #[error("Round is incomplete: {recorded} of {expected} birds recorded")]
    Incomplete { recorded: usize, expected: usize },

    #[error(transparent)]
    Rejected(#[from] StoreError),

    #[error("Round changed while its submission was pending")]
    Stale,
}
