//! Trap Round
//!
//! This example scores a full round of trap and submits it to a sink.
//!
//! Key concepts:
//! - One entry call per user action (shot, undo, submit)
//! - Shots past 25 birds are ignored
//! - The sink receives the finished record; the round resets for the next one
//!
//! Run with: RUST_LOG=debug cargo run --example trap_round

use clayscore::{BirdResult, GameType, GaugeType, RoundEntry, ScoreRecord};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    println!("=== Trap Round Example ===\n");

    let mut entry = RoundEntry::new(|record: ScoreRecord| {
        println!(
            "Sink received: {} / {} gauge, {} of 25",
            record.game(),
            record.gauge(),
            record.total_score()
        );
        match record.to_json() {
            Ok(json) => println!("  {json}"),
            Err(err) => println!("  could not encode record: {err}"),
        }
    });
    entry.set_game(GameType::Trap);
    entry.set_gauge(GaugeType::Twenty);

    // Misread the third bird, then correct it
    entry.record_shot(BirdResult::Hit);
    entry.record_shot(BirdResult::Hit);
    entry.record_shot(BirdResult::Miss);
    entry.undo();

    for i in 2..25 {
        entry.record_shot(if i % 7 == 0 { BirdResult::Miss } else { BirdResult::Hit });
    }
    println!("{} (hits so far: {})", entry.progress(), entry.hits());

    let strip: Vec<String> = entry
        .round()
        .tally()
        .map(|(n, bird)| format!("{n}: {}", bird.label()))
        .collect();
    println!("Shots: {}\n", strip.join(", "));

    // Ignored: the round is full
    entry.record_shot(BirdResult::Miss);

    match entry.submit() {
        Some(total) => println!("\nSubmitted round scoring {total}"),
        None => println!("\nRound incomplete, nothing submitted"),
    }
    println!("{} under {} / {}", entry.progress(), entry.game(), entry.gauge());

    println!("\n=== Example Complete ===");
}
