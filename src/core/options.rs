//! Closed option sets selectable for a round.
//!
//! The wire strings are fixed: downstream consumers match on them exactly,
//! so serde renames and `FromStr` both use the same literals.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when a string falls outside one of the closed option sets.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OptionError {
    #[error("Unknown game type '{0}'")]
    UnknownGame(String),

    #[error("Unknown gauge '{0}'")]
    UnknownGauge(String),

    #[error("Unknown bird result '{0}'")]
    UnknownBird(String),
}

/// Discipline being shot.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum GameType {
    #[default]
    Skeet,
    #[serde(rename = "Doubles Skeet")]
    DoublesSkeet,
    Trap,
    #[serde(rename = "5-Stand")]
    FiveStand,
}

impl GameType {
    /// Every game type, in selection-list order.
    pub const ALL: [GameType; 4] = [
        GameType::Skeet,
        GameType::DoublesSkeet,
        GameType::Trap,
        GameType::FiveStand,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Skeet => "Skeet",
            Self::DoublesSkeet => "Doubles Skeet",
            Self::Trap => "Trap",
            Self::FiveStand => "5-Stand",
        }
    }
}

impl fmt::Display for GameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GameType {
    type Err = OptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|game| game.as_str() == s)
            .ok_or_else(|| OptionError::UnknownGame(s.to_string()))
    }
}

/// Shotgun bore, by its shorthand code.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum GaugeType {
    #[default]
    #[serde(rename = "12")]
    Twelve,
    #[serde(rename = "20")]
    Twenty,
    #[serde(rename = "28")]
    TwentyEight,
    #[serde(rename = ".410")]
    FourTen,
}

impl GaugeType {
    /// Every gauge, in selection-list order.
    pub const ALL: [GaugeType; 4] = [
        GaugeType::Twelve,
        GaugeType::Twenty,
        GaugeType::TwentyEight,
        GaugeType::FourTen,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Twelve => "12",
            Self::Twenty => "20",
            Self::TwentyEight => "28",
            Self::FourTen => ".410",
        }
    }
}

impl fmt::Display for GaugeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GaugeType {
    type Err = OptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|gauge| gauge.as_str() == s)
            .ok_or_else(|| OptionError::UnknownGauge(s.to_string()))
    }
}

/// Outcome of one shot at one bird.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BirdResult {
    Hit,
    Miss,
}

impl BirdResult {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hit => "hit",
            Self::Miss => "miss",
        }
    }

    /// Capitalized label for the shot strip.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hit => "Hit",
            Self::Miss => "Miss",
        }
    }

    pub fn is_hit(&self) -> bool {
        matches!(self, Self::Hit)
    }
}

impl fmt::Display for BirdResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BirdResult {
    type Err = OptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hit" => Ok(Self::Hit),
            "miss" => Ok(Self::Miss),
            other => Err(OptionError::UnknownBird(other.to_string())),
        }
    }
}
