//! Fluent construction of a [`RoundEntry`].

pub mod error;

pub use error::BuildError;

use crate::checkpoint::Checkpoint;
use crate::config::EntryConfig;
use crate::core::{GameType, GaugeType, Round};
use crate::entry::{RoundEntry, ScoreSink};
use crate::policy::ConfigPolicy;

/// Builder for a [`RoundEntry`].
///
/// # Example
///
/// ```rust
/// use clayscore::{ConfigPolicy, GameType, RoundEntryBuilder, ScoreRecord};
///
/// let entry = RoundEntryBuilder::new()
///     .game(GameType::Trap)
///     .policy(ConfigPolicy::LockAfterFirstShot)
///     .sink(Vec::<ScoreRecord>::new())
///     .build()
///     .unwrap();
///
/// assert_eq!(entry.game(), GameType::Trap);
/// ```
pub struct RoundEntryBuilder<K: ScoreSink> {
    game: GameType,
    gauge: GaugeType,
    policy: ConfigPolicy,
    sink: Option<K>,
    resume: Option<Checkpoint>,
}

impl<K: ScoreSink> RoundEntryBuilder<K> {
    pub fn new() -> Self {
        Self {
            game: GameType::default(),
            gauge: GaugeType::default(),
            policy: ConfigPolicy::default(),
            sink: None,
            resume: None,
        }
    }

    /// Start from a loaded configuration.
    pub fn config(mut self, config: EntryConfig) -> Self {
        self.game = config.default_game;
        self.gauge = config.default_gauge;
        self.policy = config.policy;
        self
    }

    pub fn game(mut self, game: GameType) -> Self {
        self.game = game;
        self
    }

    pub fn gauge(mut self, gauge: GaugeType) -> Self {
        self.gauge = gauge;
        self
    }

    pub fn policy(mut self, policy: ConfigPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the sink (required).
    pub fn sink(mut self, sink: K) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Resume from a checkpoint instead of starting an empty round.
    ///
    /// The checkpoint's round, policy and history win over game, gauge
    /// and policy set on the builder.
    pub fn resume(mut self, checkpoint: Checkpoint) -> Self {
        self.resume = Some(checkpoint);
        self
    }

    pub fn build(self) -> Result<RoundEntry<K>, BuildError> {
        let sink = self.sink.ok_or(BuildError::MissingSink)?;

        if let Some(checkpoint) = self.resume {
            return Ok(RoundEntry::restore(checkpoint, sink)?);
        }

        Ok(RoundEntry::from_parts(
            Round::new(self.game, self.gauge),
            sink,
            self.policy,
        ))
    }
}

impl<K: ScoreSink> Default for RoundEntryBuilder<K> {
    fn default() -> Self {
        Self::new()
    }
}
