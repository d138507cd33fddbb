//! The in-progress round aggregate.

use super::guard;
use super::options::{BirdResult, GameType, GaugeType};
use super::score::{total_score, ScoreError, ScoreRecord};
use super::state::RoundPhase;
use super::BIRDS_PER_ROUND;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A round being recorded.
///
/// Birds are kept in shot order and never exceed 25. The cap is enforced
/// here, so no caller can grow a round past it.
///
/// # Example
///
/// ```rust
/// use clayscore::core::Round;
/// use clayscore::{BirdResult, GameType, GaugeType};
///
/// let mut round = Round::new(GameType::Trap, GaugeType::Twenty);
/// for _ in 0..30 {
///     round.record_shot(BirdResult::Hit);
/// }
/// assert_eq!(round.len(), 25);
/// assert!(round.is_complete());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedRound")]
pub struct Round {
    game: GameType,
    gauge: GaugeType,
    birds: Vec<BirdResult>,
}

#[derive(Deserialize)]
struct UncheckedRound {
    game: GameType,
    gauge: GaugeType,
    birds: Vec<BirdResult>,
}

/// A decoded round held more birds than a round allows.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("Round holds {found} birds, at most {max} allowed")]
pub struct OverfullRound {
    pub found: usize,
    pub max: usize,
}

impl TryFrom<UncheckedRound> for Round {
    type Error = OverfullRound;

    fn try_from(raw: UncheckedRound) -> Result<Self, Self::Error> {
        if raw.birds.len() > BIRDS_PER_ROUND {
            return Err(OverfullRound {
                found: raw.birds.len(),
                max: BIRDS_PER_ROUND,
            });
        }
        Ok(Self {
            game: raw.game,
            gauge: raw.gauge,
            birds: raw.birds,
        })
    }
}

impl Round {
    /// An empty round under the given configuration.
    pub fn new(game: GameType, gauge: GaugeType) -> Self {
        Self {
            game,
            gauge,
            birds: Vec::with_capacity(BIRDS_PER_ROUND),
        }
    }

    pub fn game(&self) -> GameType {
        self.game
    }

    pub fn gauge(&self) -> GaugeType {
        self.gauge
    }

    pub fn set_game(&mut self, game: GameType) {
        self.game = game;
    }

    pub fn set_gauge(&mut self, gauge: GaugeType) {
        self.gauge = gauge;
    }

    /// Birds recorded so far, in shot order.
    pub fn birds(&self) -> &[BirdResult] {
        &self.birds
    }

    pub fn len(&self) -> usize {
        self.birds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.birds.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        guard::can_submit(&self.birds)
    }

    pub fn phase(&self) -> RoundPhase {
        RoundPhase::for_len(self.birds.len())
    }

    /// Hits so far, derived from the birds on every call.
    pub fn hits(&self) -> u8 {
        total_score(&self.birds)
    }

    /// Append one shot. Returns `false`, leaving the round untouched, once
    /// 25 birds are recorded.
    pub fn record_shot(&mut self, result: BirdResult) -> bool {
        if !guard::can_record(&self.birds) {
            return false;
        }
        self.birds.push(result);
        true
    }

    /// Remove the most recent shot, if any.
    pub fn undo(&mut self) -> Option<BirdResult> {
        self.birds.pop()
    }

    /// Drop every recorded bird, keeping game and gauge.
    pub fn clear(&mut self) -> usize {
        let dropped = self.birds.len();
        self.birds.clear();
        dropped
    }

    /// Build the finalized record for a complete round.
    ///
    /// The round itself is left as is; the record owns a copy of the birds.
    pub fn finalize(&self) -> Result<ScoreRecord, ScoreError> {
        ScoreRecord::new(self.game, self.gauge, self.birds.clone())
    }

    /// Progress line, e.g. `Birds: 12 / 25`.
    pub fn progress(&self) -> Progress {
        Progress {
            recorded: self.birds.len(),
        }
    }

    /// Shot strip entries as `(1-based shot number, result)`.
    pub fn tally(&self) -> impl Iterator<Item = (usize, BirdResult)> + '_ {
        self.birds
            .iter()
            .enumerate()
            .map(|(index, bird)| (index + 1, *bird))
    }
}

/// Birds recorded against the round size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    pub recorded: usize,
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Birds: {} / {}", self.recorded, BIRDS_PER_ROUND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use BirdResult::{Hit, Miss};

    #[test]
    fn new_round_is_empty() {
        let round = Round::new(GameType::Skeet, GaugeType::Twelve);
        assert!(round.is_empty());
        assert_eq!(round.phase(), RoundPhase::Recording);
        assert_eq!(round.hits(), 0);
    }

    #[test]
    fn record_shot_stops_at_cap() {
        let mut round = Round::default();
        for _ in 0..25 {
            assert!(round.record_shot(Hit));
        }
        assert!(!round.record_shot(Miss));
        assert_eq!(round.len(), 25);
        assert_eq!(round.birds().last(), Some(&Hit));
        assert_eq!(round.phase(), RoundPhase::Complete);
    }

    #[test]
    fn undo_removes_most_recent_shot() {
        let mut round = Round::default();
        round.record_shot(Hit);
        round.record_shot(Miss);

        assert_eq!(round.undo(), Some(Miss));
        assert_eq!(round.birds(), &[Hit]);
    }

    #[test]
    fn undo_on_empty_round_is_noop() {
        let mut round = Round::default();
        assert_eq!(round.undo(), None);
        assert!(round.is_empty());
    }

    #[test]
    fn finalize_copies_birds() {
        let mut round = Round::new(GameType::Trap, GaugeType::Twenty);
        for i in 0..25 {
            round.record_shot(if i % 2 == 0 { Hit } else { Miss });
        }

        let record = round.finalize().unwrap();
        assert_eq!(record.total_score(), 13);
        assert_eq!(record.birds(), round.birds());
        assert_eq!(round.len(), 25);
    }

    #[test]
    fn finalize_rejects_partial_round() {
        let mut round = Round::default();
        round.record_shot(Hit);
        assert!(matches!(
            round.finalize(),
            Err(ScoreError::Incomplete { recorded: 1, .. })
        ));
    }

    #[test]
    fn clear_keeps_configuration() {
        let mut round = Round::new(GameType::FiveStand, GaugeType::TwentyEight);
        round.record_shot(Miss);
        round.record_shot(Hit);

        assert_eq!(round.clear(), 2);
        assert!(round.is_empty());
        assert_eq!(round.game(), GameType::FiveStand);
        assert_eq!(round.gauge(), GaugeType::TwentyEight);
    }

    #[test]
    fn progress_and_tally() {
        let mut round = Round::default();
        round.record_shot(Hit);
        round.record_shot(Miss);

        assert_eq!(round.progress().to_string(), "Birds: 2 / 25");
        let strip: Vec<_> = round
            .tally()
            .map(|(n, bird)| format!("{n}: {}", bird.label()))
            .collect();
        assert_eq!(strip, vec!["1: Hit", "2: Miss"]);
    }

    #[test]
    fn overfull_round_fails_to_decode() {
        let json = serde_json::json!({
            "game": "Skeet",
            "gauge": "12",
            "birds": vec!["hit"; 26],
        });
        let result: Result<Round, _> = serde_json::from_value(json);
        assert!(result.is_err());
    }

    #[test]
    fn round_serializes_correctly() {
        let mut round = Round::new(GameType::DoublesSkeet, GaugeType::FourTen);
        round.record_shot(Hit);

        let json = serde_json::to_string(&round).unwrap();
        let deserialized: Round = serde_json::from_str(&json).unwrap();
        assert_eq!(round, deserialized);
    }
}
