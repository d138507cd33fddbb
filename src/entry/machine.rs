//! Round entry machine: the state behind a score-entry form.

use crate::core::{
    guard, BirdResult, GameType, GaugeType, Progress, Round, RoundPhase, ScoreRecord, State,
    StateHistory, StateTransition, BIRDS_PER_ROUND,
};
use crate::entry::sink::{ScoreSink, ScoreStore, SubmitError};
use crate::policy::{ConfigChange, ConfigPolicy};
use chrono::Utc;
use stillwater::effect::BoxedEffect;
use stillwater::prelude::*;

/// A record confirmed by a store, tagged with the round it was taken from.
#[derive(Clone, Debug, PartialEq)]
pub struct Submission {
    pub record: ScoreRecord,
    /// 1-based round number within the session at preparation time
    pub round: u32,
}

impl Submission {
    fn matches(&self, round_number: u32, round: &Round) -> bool {
        self.round == round_number
            && self.record.game() == round.game()
            && self.record.gauge() == round.gauge()
            && self.record.birds() == round.birds()
    }
}

/// Drives one [`Round`] at a time and hands finished rounds to a sink.
///
/// Every operation runs to completion and none of them fail: recording
/// past 25 birds, undoing an empty round and submitting a partial round
/// are all no-ops.
///
/// # Example
///
/// ```rust
/// use clayscore::{BirdResult, GameType, GaugeType, RoundEntry, ScoreRecord};
///
/// let mut entry = RoundEntry::new(Vec::<ScoreRecord>::new());
/// entry.set_game(GameType::Trap);
/// entry.set_gauge(GaugeType::Twenty);
///
/// for i in 0..25 {
///     entry.record_shot(if i % 2 == 0 { BirdResult::Hit } else { BirdResult::Miss });
/// }
///
/// assert_eq!(entry.submit(), Some(13));
/// assert!(entry.birds().is_empty());
/// assert_eq!(entry.sink()[0].total_score(), 13);
/// ```
pub struct RoundEntry<K: ScoreSink> {
    round: Round,
    sink: K,
    policy: ConfigPolicy,
    history: StateHistory<RoundPhase>,
    rounds_submitted: u32,
}

impl<K: ScoreSink> RoundEntry<K> {
    /// Empty round under the default game and gauge.
    pub fn new(sink: K) -> Self {
        Self::from_parts(Round::default(), sink, ConfigPolicy::default())
    }

    pub(crate) fn from_parts(round: Round, sink: K, policy: ConfigPolicy) -> Self {
        Self {
            round,
            sink,
            policy,
            history: StateHistory::new(),
            rounds_submitted: 0,
        }
    }

    pub(crate) fn with_progress(
        mut self,
        history: StateHistory<RoundPhase>,
        rounds_submitted: u32,
    ) -> Self {
        self.history = history;
        self.rounds_submitted = rounds_submitted;
        self
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn game(&self) -> GameType {
        self.round.game()
    }

    pub fn gauge(&self) -> GaugeType {
        self.round.gauge()
    }

    pub fn birds(&self) -> &[BirdResult] {
        self.round.birds()
    }

    pub fn len(&self) -> usize {
        self.round.len()
    }

    pub fn is_empty(&self) -> bool {
        self.round.is_empty()
    }

    pub fn phase(&self) -> RoundPhase {
        self.round.phase()
    }

    /// Running hit count for the round in progress.
    pub fn hits(&self) -> u8 {
        self.round.hits()
    }

    pub fn progress(&self) -> Progress {
        self.round.progress()
    }

    pub fn can_record(&self) -> bool {
        guard::can_record(self.round.birds())
    }

    pub fn can_undo(&self) -> bool {
        guard::can_undo(self.round.birds())
    }

    pub fn can_submit(&self) -> bool {
        guard::can_submit(self.round.birds())
    }

    pub fn policy(&self) -> ConfigPolicy {
        self.policy
    }

    pub fn set_policy(&mut self, policy: ConfigPolicy) {
        self.policy = policy;
    }

    pub fn history(&self) -> &StateHistory<RoundPhase> {
        &self.history
    }

    pub fn rounds_submitted(&self) -> u32 {
        self.rounds_submitted
    }

    pub fn sink(&self) -> &K {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut K {
        &mut self.sink
    }

    pub fn into_sink(self) -> K {
        self.sink
    }

    /// Select a game type, subject to the configuration policy.
    pub fn set_game(&mut self, game: GameType) -> ConfigChange {
        let change = self
            .policy
            .decide(&self.round.game(), &game, self.round.len());
        if change.is_selected() {
            self.discard_if_needed(change);
            self.round.set_game(game);
        } else {
            tracing::warn!(game = %game, birds = self.round.len(), "round.game_locked");
        }
        change
    }

    /// Select a gauge, subject to the configuration policy.
    pub fn set_gauge(&mut self, gauge: GaugeType) -> ConfigChange {
        let change = self
            .policy
            .decide(&self.round.gauge(), &gauge, self.round.len());
        if change.is_selected() {
            self.discard_if_needed(change);
            self.round.set_gauge(gauge);
        } else {
            tracing::warn!(gauge = %gauge, birds = self.round.len(), "round.gauge_locked");
        }
        change
    }

    fn discard_if_needed(&mut self, change: ConfigChange) {
        if let ConfigChange::Discarded { .. } = change {
            let before = self.round.phase();
            let dropped = self.round.clear();
            tracing::warn!(dropped, "round.discarded_on_config_change");
            self.note_phase(before);
        }
    }

    /// Append one shot. Returns `false` when the round is already full.
    pub fn record_shot(&mut self, result: BirdResult) -> bool {
        let before = self.round.phase();
        let recorded = self.round.record_shot(result);
        if recorded {
            tracing::debug!(shot = self.round.len(), result = %result, "round.shot");
            self.note_phase(before);
        } else {
            tracing::debug!(result = %result, "round.shot_ignored_full");
        }
        recorded
    }

    /// Remove the most recent shot. Returns it, or `None` on an empty round.
    pub fn undo(&mut self) -> Option<BirdResult> {
        let before = self.round.phase();
        let removed = self.round.undo();
        if let Some(result) = removed {
            tracing::debug!(remaining = self.round.len(), result = %result, "round.undo");
            self.note_phase(before);
        }
        removed
    }

    /// Hand the complete round to the sink and start the next one.
    ///
    /// Returns the submitted total score, or `None` without touching the
    /// sink or the round when fewer than 25 birds are recorded. The round
    /// is cleared as soon as the sink returns; game and gauge carry over.
    pub fn submit(&mut self) -> Option<u8> {
        let record = self.round.finalize().ok()?;
        let total = record.total_score();
        tracing::info!(
            game = %record.game(),
            gauge = %record.gauge(),
            total_score = total,
            round = self.current_round(),
            "round.submitted"
        );
        self.sink.accept(record);
        self.finish_round();
        Some(total)
    }

    /// Build an effect that saves the complete round to a [`ScoreStore`].
    ///
    /// Nothing changes until the effect's outcome is passed to
    /// [`apply_submission`](Self::apply_submission), so a rejected save
    /// leaves the round intact for a retry.
    pub fn prepare_submission<Env>(&self) -> BoxedEffect<Submission, SubmitError, Env>
    where
        Env: ScoreStore + Clone + Send + Sync + 'static,
    {
        let record = match self.round.finalize() {
            Ok(record) => record,
            Err(_) => {
                return fail(SubmitError::Incomplete {
                    recorded: self.round.len(),
                    expected: BIRDS_PER_ROUND,
                })
                .boxed()
            }
        };
        let round = self.current_round();

        from_fn(move |env: &Env| -> Result<Submission, SubmitError> {
            env.save(&record)?;
            Ok(Submission {
                record: record.clone(),
                round,
            })
        })
        .boxed()
    }

    /// Apply the outcome of a prepared submission.
    ///
    /// On success the round is cleared, provided it is still the round that
    /// was saved: same round number, game, gauge and birds. Anything else is
    /// [`SubmitError::Stale`]. On failure the round is kept as it is.
    pub fn apply_submission(
        &mut self,
        outcome: Result<Submission, SubmitError>,
    ) -> Result<u8, SubmitError> {
        let submission = match outcome {
            Ok(submission) => submission,
            Err(err) => {
                tracing::warn!(error = %err, birds = self.round.len(), "round.submit_failed");
                return Err(err);
            }
        };

        if !submission.matches(self.current_round(), &self.round) {
            tracing::warn!(
                saved_round = submission.round,
                round = self.current_round(),
                "round.submit_stale"
            );
            return Err(SubmitError::Stale);
        }

        let record = submission.record;
        let total = record.total_score();
        tracing::info!(
            game = %record.game(),
            gauge = %record.gauge(),
            total_score = total,
            round = self.current_round(),
            "round.submitted_confirmed"
        );
        self.finish_round();
        Ok(total)
    }

    fn finish_round(&mut self) {
        let before = self.round.phase();
        self.round.clear();
        self.note_phase(before);
        self.rounds_submitted += 1;
    }

    fn current_round(&self) -> u32 {
        self.rounds_submitted + 1
    }

    fn note_phase(&mut self, before: RoundPhase) {
        let after = self.round.phase();
        if before == after {
            return;
        }
        tracing::debug!(from = before.name(), to = after.name(), "round.phase");
        self.history = self.history.record(StateTransition {
            from: before,
            to: after,
            timestamp: Utc::now(),
            round: self.current_round(),
        });
    }
}
