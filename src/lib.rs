//! Clayscore: round entry for clay-target shooting scores
//!
//! A shooter picks a game and gauge, logs each of the 25 birds in a round
//! as a hit or a miss, and submits the finished round. The crate keeps
//! the pure rules (the 25-bird cap, undo, score derivation) apart from the
//! shell that hands finished rounds to whatever stores them.
//!
//! # Core Concepts
//!
//! - **Round**: game, gauge and up to 25 birds in shot order
//! - **ScoreRecord**: a finished round; its total is always derived from its birds
//! - **RoundEntry**: the machine a score-entry surface drives, one call per user action
//! - **Sinks**: where finished rounds go, fire-and-forget or acknowledged
//!
//! # Example
//!
//! ```rust
//! use clayscore::{BirdResult, GameType, GaugeType, RoundEntry, ScoreRecord};
//!
//! let mut entry = RoundEntry::new(Vec::<ScoreRecord>::new());
//! entry.set_game(GameType::Skeet);
//! entry.set_gauge(GaugeType::TwentyEight);
//!
//! for _ in 0..25 {
//!     entry.record_shot(BirdResult::Hit);
//! }
//! entry.undo();
//! entry.record_shot(BirdResult::Miss);
//!
//! assert_eq!(entry.submit(), Some(24));
//! assert_eq!(entry.progress().to_string(), "Birds: 0 / 25");
//! ```

pub mod builder;
pub mod checkpoint;
pub mod config;
pub mod core;
pub mod entry;
pub mod policy;

// Re-export commonly used types
pub use builder::{BuildError, RoundEntryBuilder};
pub use checkpoint::{Checkpoint, CheckpointError};
pub use config::{ConfigError, EntryConfig};
pub use core::{
    total_score, BirdResult, GameType, GaugeType, Round, RoundPhase, ScoreError, ScoreRecord,
    BIRDS_PER_ROUND,
};
pub use entry::{RoundEntry, ScoreSink, ScoreStore, StoreError, SubmitError, Submission};
pub use policy::{ConfigChange, ConfigPolicy};
