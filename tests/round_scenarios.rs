//! End-to-end scenarios for a score-entry session.

use clayscore::{
    BirdResult, Checkpoint, EntryConfig, GameType, GaugeType, RoundEntry, RoundEntryBuilder,
    RoundPhase, ScoreRecord, ScoreStore, StoreError, SubmitError, BIRDS_PER_ROUND,
};
use std::sync::{Arc, Mutex};
use stillwater::prelude::*;
use BirdResult::{Hit, Miss};

fn init_logging() {
    let filter = std::env::var("TEST_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map(tracing_subscriber::EnvFilter::new)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .without_time()
        .try_init()
        .ok();
}

#[test]
fn trap_twenty_alternating_round() {
    init_logging();
    let mut entry = RoundEntry::new(Vec::<ScoreRecord>::new());
    entry.set_game(GameType::Trap);
    entry.set_gauge(GaugeType::Twenty);

    for i in 0..BIRDS_PER_ROUND {
        entry.record_shot(if i % 2 == 0 { Hit } else { Miss });
    }
    assert_eq!(entry.submit(), Some(13));

    assert_eq!(entry.game(), GameType::Trap);
    assert_eq!(entry.gauge(), GaugeType::Twenty);
    assert!(entry.birds().is_empty());

    let records = entry.into_sink();
    assert_eq!(records.len(), 1);
    let value: serde_json::Value = serde_json::from_str(&records[0].to_json().unwrap()).unwrap();
    assert_eq!(value["game"], "Trap");
    assert_eq!(value["gauge"], "20");
    assert_eq!(value["total_score"], 13);
    assert_eq!(value["birds"].as_array().unwrap().len(), 25);
}

#[test]
fn seventeen_hits_eight_misses() {
    init_logging();
    let mut entry = RoundEntry::new(Vec::<ScoreRecord>::new());
    for _ in 0..17 {
        entry.record_shot(Hit);
    }
    for _ in 0..8 {
        entry.record_shot(Miss);
    }

    assert_eq!(entry.submit(), Some(17));
    assert_eq!(entry.sink()[0].total_score(), 17);
}

#[test]
fn twenty_four_shots_do_not_submit() {
    init_logging();
    let mut invoked = 0;
    {
        let mut entry = RoundEntry::new(|_: ScoreRecord| invoked += 1);
        for _ in 0..24 {
            entry.record_shot(Hit);
        }
        assert_eq!(entry.submit(), None);
        assert_eq!(entry.len(), 24);
    }
    assert_eq!(invoked, 0);
}

#[test]
fn undo_on_empty_round() {
    init_logging();
    let mut entry = RoundEntry::new(Vec::<ScoreRecord>::new());
    assert_eq!(entry.undo(), None);
    assert_eq!(entry.len(), 0);
}

#[test]
fn shots_past_cap_are_ignored() {
    init_logging();
    let mut entry = RoundEntry::new(Vec::<ScoreRecord>::new());
    for _ in 0..40 {
        entry.record_shot(Miss);
    }
    assert_eq!(entry.len(), 25);
    assert_eq!(entry.phase(), RoundPhase::Complete);
    assert_eq!(entry.progress().to_string(), "Birds: 25 / 25");
}

#[test]
fn consecutive_rounds_reach_sink_in_order() {
    init_logging();
    let mut entry = RoundEntry::new(Vec::<ScoreRecord>::new());

    for hits in [25usize, 0, 19] {
        for i in 0..BIRDS_PER_ROUND {
            entry.record_shot(if i < hits { Hit } else { Miss });
        }
        entry.submit();
    }

    let totals: Vec<u8> = entry.sink().iter().map(ScoreRecord::total_score).collect();
    assert_eq!(totals, vec![25, 0, 19]);
    assert_eq!(entry.rounds_submitted(), 3);
    assert_eq!(entry.history().completed_rounds(), 3);
}

#[test]
fn configured_session_resumes_mid_round() {
    init_logging();
    let config = EntryConfig::from_toml_str(
        r#"
        default_game = "5-Stand"
        default_gauge = "28"
        policy = "lock_after_first_shot"
        "#,
    )
    .unwrap();

    let mut entry = RoundEntryBuilder::new()
        .config(config)
        .sink(Vec::<ScoreRecord>::new())
        .build()
        .unwrap();
    for _ in 0..10 {
        entry.record_shot(Hit);
    }

    let json = entry.checkpoint().to_json().unwrap();
    let mut resumed = RoundEntryBuilder::new()
        .resume(Checkpoint::from_json(&json).unwrap())
        .sink(Vec::<ScoreRecord>::new())
        .build()
        .unwrap();

    assert_eq!(resumed.len(), 10);
    assert!(!resumed.set_gauge(GaugeType::Twelve).is_selected());
    for _ in 0..15 {
        resumed.record_shot(Miss);
    }
    assert_eq!(resumed.submit(), Some(10));
    assert_eq!(resumed.sink()[0].game(), GameType::FiveStand);
    assert_eq!(resumed.sink()[0].gauge(), GaugeType::TwentyEight);
}

#[derive(Clone)]
struct FlakyStore {
    failures_left: Arc<Mutex<u32>>,
    saved: Arc<Mutex<Vec<ScoreRecord>>>,
}

impl ScoreStore for FlakyStore {
    fn save(&self, record: &ScoreRecord) -> Result<(), StoreError> {
        let mut failures = self.failures_left.lock().unwrap();
        if *failures > 0 {
            *failures -= 1;
            return Err(StoreError::new("connection reset"));
        }
        self.saved.lock().unwrap().push(record.clone());
        Ok(())
    }
}

#[tokio::test]
async fn failed_save_is_retried_with_same_round() {
    init_logging();
    let store = FlakyStore {
        failures_left: Arc::new(Mutex::new(2)),
        saved: Arc::new(Mutex::new(Vec::new())),
    };
    let mut entry = RoundEntry::new(Vec::<ScoreRecord>::new());
    for i in 0..BIRDS_PER_ROUND {
        entry.record_shot(if i % 5 == 0 { Miss } else { Hit });
    }

    let mut attempts = 0;
    let total = loop {
        attempts += 1;
        let outcome = entry.prepare_submission().run(&store).await;
        match entry.apply_submission(outcome) {
            Ok(total) => break total,
            Err(SubmitError::Rejected(_)) => assert_eq!(entry.len(), 25),
            Err(other) => panic!("Unexpected error: {other}"),
        }
    };

    assert_eq!(attempts, 3);
    assert_eq!(total, 20);
    assert!(entry.is_empty());
    assert_eq!(store.saved.lock().unwrap().len(), 1);
}
