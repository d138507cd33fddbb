//! Resume Round
//!
//! This example checkpoints a round halfway through, restores it, and
//! finishes it against a store that fails once before accepting.
//!
//! Key concepts:
//! - JSON and binary checkpoints of a round in progress
//! - Acknowledged submission: the round is only cleared after the store confirms
//! - A rejected save keeps the round for retry
//!
//! Run with: cargo run --example resume_round

use clayscore::{
    BirdResult, Checkpoint, ConfigPolicy, GameType, GaugeType, RoundEntryBuilder, ScoreRecord,
    ScoreStore, StoreError,
};
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use stillwater::prelude::*;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Default)]
struct FlakyStore {
    calls: Arc<AtomicU32>,
}

impl ScoreStore for FlakyStore {
    fn save(&self, record: &ScoreRecord) -> Result<(), StoreError> {
        if self.calls.fetch_add(1, Ordering::SeqCst) == 0 {
            return Err(StoreError::new("network unavailable"));
        }
        println!("  Store saved round scoring {}", record.total_score());
        Ok(())
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Resume Round Example ===\n");

    let mut entry = RoundEntryBuilder::new()
        .game(GameType::Skeet)
        .gauge(GaugeType::TwentyEight)
        .policy(ConfigPolicy::LockAfterFirstShot)
        .sink(Vec::<ScoreRecord>::new())
        .build()?;

    for i in 0..12 {
        entry.record_shot(if i == 4 { BirdResult::Miss } else { BirdResult::Hit });
    }

    let checkpoint = entry.checkpoint();
    let json = checkpoint.to_json()?;
    let bytes = checkpoint.to_bytes()?;
    println!("Checkpoint {} taken at {}", checkpoint.id, entry.progress());
    println!("  JSON: {} bytes, binary: {} bytes\n", json.len(), bytes.len());

    let mut resumed = RoundEntryBuilder::new()
        .resume(Checkpoint::from_bytes(&bytes)?)
        .sink(Vec::<ScoreRecord>::new())
        .build()?;
    println!("Resumed at {}", resumed.progress());
    println!("Gauge change mid-round: {:?}", resumed.set_gauge(GaugeType::Twelve));

    for _ in 0..13 {
        resumed.record_shot(BirdResult::Hit);
    }

    let store = FlakyStore::default();
    loop {
        let outcome = resumed.prepare_submission().run(&store).await;
        match resumed.apply_submission(outcome) {
            Ok(total) => {
                println!("Confirmed round scoring {total}");
                break;
            }
            Err(err) => println!("  Save failed ({err}); round kept at {}", resumed.progress()),
        }
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
