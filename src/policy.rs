//! What happens when game or gauge changes mid-round.

use serde::{Deserialize, Serialize};

/// Rule applied to game/gauge changes while birds are recorded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigPolicy {
    /// Always apply the change.
    #[default]
    Free,

    /// Refuse changes once the first bird is recorded.
    LockAfterFirstShot,

    /// Apply the change and throw away the birds recorded under the old one.
    DiscardOnChange,
}

/// Result of a game or gauge change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigChange {
    /// New value selected.
    Applied,

    /// Value was already selected; nothing happened.
    Unchanged,

    /// Refused because birds are recorded under the current value.
    Locked { birds: usize },

    /// New value selected and the recorded birds dropped.
    Discarded { birds: usize },
}

impl ConfigChange {
    /// Whether the requested value is now selected.
    pub fn is_selected(&self) -> bool {
        !matches!(self, Self::Locked { .. })
    }
}

impl ConfigPolicy {
    /// Decide a change from `current` to `requested` with `recorded` birds
    /// already in the round. Pure: the caller carries out the decision.
    pub fn decide<T: PartialEq>(&self, current: &T, requested: &T, recorded: usize) -> ConfigChange {
        if current == requested {
            return ConfigChange::Unchanged;
        }
        if recorded == 0 {
            return ConfigChange::Applied;
        }
        match self {
            Self::Free => ConfigChange::Applied,
            Self::LockAfterFirstShot => ConfigChange::Locked { birds: recorded },
            Self::DiscardOnChange => ConfigChange::Discarded { birds: recorded },
        }
    }
}
