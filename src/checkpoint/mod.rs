//! Save and resume a round in progress.
//!
//! A checkpoint captures everything a [`RoundEntry`] holds except its
//! sink, so an interrupted session can pick up at the same bird. JSON is
//! offered for readability and bincode for compactness.

use crate::core::{Round, RoundPhase, State, StateHistory};
use crate::entry::{RoundEntry, ScoreSink};
use crate::policy::ConfigPolicy;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a [`RoundEntry`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: String,

    /// When the checkpoint was taken
    pub timestamp: DateTime<Utc>,

    /// Round in progress
    pub round: Round,

    pub policy: ConfigPolicy,

    /// Rounds handed to the sink before the checkpoint
    pub rounds_submitted: u32,

    /// Phase history up to the checkpoint
    pub history: StateHistory<RoundPhase>,
}

impl Checkpoint {
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string_pretty(self)
            .map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    /// Check the version and that the history agrees with the round: it may
    /// not run past the next round, and its last phase must be the phase
    /// the round's bird count implies.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        let last = self.history.transitions().last();
        if let Some(last) = last {
            if last.round > self.rounds_submitted + 1 {
                return Err(CheckpointError::ValidationFailed(format!(
                    "history reaches round {} but only {} rounds were submitted",
                    last.round, self.rounds_submitted
                )));
            }
        }

        let recorded = last.map_or(RoundPhase::Recording, |t| t.to);
        let expected = RoundPhase::for_len(self.round.len());
        if recorded != expected {
            return Err(CheckpointError::ValidationFailed(format!(
                "history ends in {} but a round of {} birds is {}",
                recorded.name(),
                self.round.len(),
                expected.name()
            )));
        }

        Ok(())
    }
}

impl<K: ScoreSink> RoundEntry<K> {
    /// Snapshot the entry.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            round: self.round().clone(),
            policy: self.policy(),
            rounds_submitted: self.rounds_submitted(),
            history: self.history().clone(),
        }
    }

    /// Rebuild an entry from a checkpoint, attaching a fresh sink.
    pub fn restore(checkpoint: Checkpoint, sink: K) -> Result<Self, CheckpointError> {
        checkpoint.validate()?;
        tracing::info!(
            id = %checkpoint.id,
            birds = checkpoint.round.len(),
            rounds_submitted = checkpoint.rounds_submitted,
            "checkpoint.restored"
        );
        Ok(
            RoundEntry::from_parts(checkpoint.round, sink, checkpoint.policy)
                .with_progress(checkpoint.history, checkpoint.rounds_submitted),
        )
    }
}
