//! Build errors for the entry builder.

use crate::checkpoint::CheckpointError;
use thiserror::Error;

/// Errors that can occur when building a round entry.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Score sink not specified. Call .sink(sink) before .build()")]
    MissingSink,

    #[error("Cannot resume from checkpoint: {0}")]
    Resume(#[from] CheckpointError),
}
