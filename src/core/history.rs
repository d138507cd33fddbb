//! Phase history of a scoring session.
//!
//! Every time a round crosses between recording and complete, the change
//! is appended here with a timestamp and the round number it belongs to.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One change of phase.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// Phase being left
    pub from: S,
    /// Phase being entered
    pub to: S,
    /// When the change happened
    pub timestamp: DateTime<Utc>,
    /// 1-based number of the round within the session
    pub round: u32,
}

/// Ordered, append-only history of phase changes.
///
/// `record` returns a new history and leaves the receiver unchanged.
///
/// # Example
///
/// ```rust
/// use clayscore::core::{RoundPhase, StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let history = StateHistory::new().record(StateTransition {
///     from: RoundPhase::Recording,
///     to: RoundPhase::Complete,
///     timestamp: Utc::now(),
///     round: 1,
/// });
///
/// assert_eq!(history.get_path(), vec![&RoundPhase::Recording, &RoundPhase::Complete]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Append a transition, returning the extended history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// States visited: the first `from`, then each `to`.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time between the first and last recorded transition.
    pub fn duration(&self) -> Option<Duration> {
        let first = self.transitions.first()?;
        let last = self.transitions.last()?;
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Number of times a final state was entered.
    pub fn completed_rounds(&self) -> usize {
        self.transitions.iter().filter(|t| t.to.is_final()).count()
    }

    /// Transitions belonging to one round.
    pub fn for_round(&self, round: u32) -> impl Iterator<Item = &StateTransition<S>> + '_ {
        self.transitions.iter().filter(move |t| t.round == round)
    }

    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }
}
