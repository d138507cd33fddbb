//! Finalized score records.
//!
//! A record can only be built from a full round, and its total is always
//! derived from its birds. Records coming back over the wire are checked
//! against both rules, with every violation reported at once.

use super::options::{BirdResult, GameType, GaugeType};
use super::BIRDS_PER_ROUND;
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// Count of hits in a sequence of birds.
///
/// This is the only place a score is computed. Slices longer than a round
/// saturate at `u8::MAX` rather than wrapping.
///
/// ```rust
/// use clayscore::core::total_score;
/// use clayscore::BirdResult::{Hit, Miss};
///
/// assert_eq!(total_score(&[Hit, Miss, Hit]), 2);
/// ```
pub fn total_score(birds: &[BirdResult]) -> u8 {
    let hits = birds.iter().filter(|bird| bird.is_hit()).count();
    u8::try_from(hits).unwrap_or(u8::MAX)
}

/// A single reason a record is not a valid finalized round.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RecordViolation {
    #[error("Round holds {found} birds, expected {expected}")]
    WrongLength { found: usize, expected: usize },

    #[error("Total score {claimed} does not match {actual} recorded hits")]
    ScoreMismatch { claimed: u8, actual: u8 },
}

/// Errors building or decoding a [`ScoreRecord`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ScoreError {
    #[error("Round is incomplete: {recorded} of {expected} birds recorded")]
    Incomplete { recorded: usize, expected: usize },

    #[error("Invalid score record: {}", describe(.0))]
    Invalid(Vec<RecordViolation>),
}

fn describe(violations: &[RecordViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// A completed round, ready for a sink.
///
/// # Example
///
/// ```rust
/// use clayscore::{BirdResult, GameType, GaugeType, ScoreRecord};
///
/// let mut birds = vec![BirdResult::Hit; 17];
/// birds.extend(vec![BirdResult::Miss; 8]);
///
/// let record = ScoreRecord::new(GameType::Skeet, GaugeType::Twelve, birds).unwrap();
/// assert_eq!(record.total_score(), 17);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedRecord")]
pub struct ScoreRecord {
    game: GameType,
    gauge: GaugeType,
    birds: Vec<BirdResult>,
    total_score: u8,
}

/// Wire shape of a record before its invariants are checked.
#[derive(Deserialize)]
struct UncheckedRecord {
    game: GameType,
    gauge: GaugeType,
    birds: Vec<BirdResult>,
    total_score: u8,
}

impl ScoreRecord {
    /// Finalize a round. Fails unless exactly 25 birds are given.
    pub fn new(
        game: GameType,
        gauge: GaugeType,
        birds: Vec<BirdResult>,
    ) -> Result<Self, ScoreError> {
        if birds.len() != BIRDS_PER_ROUND {
            return Err(ScoreError::Incomplete {
                recorded: birds.len(),
                expected: BIRDS_PER_ROUND,
            });
        }

        let total_score = total_score(&birds);
        Ok(Self {
            game,
            gauge,
            birds,
            total_score,
        })
    }

    pub fn game(&self) -> GameType {
        self.game
    }

    pub fn gauge(&self) -> GaugeType {
        self.gauge
    }

    /// The 25 birds in shot order.
    pub fn birds(&self) -> &[BirdResult] {
        &self.birds
    }

    pub fn total_score(&self) -> u8 {
        self.total_score
    }

    pub fn misses(&self) -> u8 {
        BIRDS_PER_ROUND as u8 - self.total_score
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Check a claimed record, accumulating every violation.
pub fn validate_record(
    birds: &[BirdResult],
    claimed_total: u8,
) -> Validation<(), NonEmptyVec<RecordViolation>> {
    let mut checks: Vec<Validation<(), NonEmptyVec<RecordViolation>>> = Vec::new();

    let length = if birds.len() == BIRDS_PER_ROUND {
        Validation::success(())
    } else {
        Validation::fail(RecordViolation::WrongLength {
            found: birds.len(),
            expected: BIRDS_PER_ROUND,
        })
    };
    checks.push(length);

    let actual = total_score(birds);
    let score = if actual == claimed_total {
        Validation::success(())
    } else {
        Validation::fail(RecordViolation::ScoreMismatch {
            claimed: claimed_total,
            actual,
        })
    };
    checks.push(score);

    Validation::all_vec(checks).map(|_| ())
}

impl TryFrom<UncheckedRecord> for ScoreRecord {
    type Error = ScoreError;

    fn try_from(raw: UncheckedRecord) -> Result<Self, Self::Error> {
        match validate_record(&raw.birds, raw.total_score) {
            Validation::Success(_) => Ok(Self {
                game: raw.game,
                gauge: raw.gauge,
                birds: raw.birds,
                total_score: raw.total_score,
            }),
            Validation::Failure(violations) => {
                Err(ScoreError::Invalid(violations.iter().cloned().collect()))
            }
        }
    }
}
