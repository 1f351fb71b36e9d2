use std::path::PathBuf;

use omniscroll_core::{ClassifierConfig, ScrollClassifier};
use omniscroll_model::stream::parse_stream;

fn load_fixture_records() -> Vec<omniscroll_model::stream::StreamRecord> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
        .join("gestures")
        .join("vertical_then_horizontal.jsonl");

    let content = std::fs::read_to_string(path).expect("fixture stream should be readable");
    parse_stream(&content).expect("fixture stream should parse")
}

#[test]
fn fixture_replay_event_sequence_is_stable() {
    let records = load_fixture_records();
    let mut classifier =
        ScrollClassifier::new(ClassifierConfig::default()).expect("default config is valid");

    let mut emitted = vec![];
    for record in &records {
        match record.sample() {
            Some(sample) => {
                if let Some(event) = classifier.on_sample(sample) {
                    emitted.push((event.v, event.h, event.timestamp_ms));
                }
            }
            None => classifier.on_release(),
        }
    }

    // Two vertical down events, a hysteresis-gated flip to horizontal,
    // then a fresh vertical up after the release
    assert_eq!(
        emitted,
        vec![(-1, 0, 0), (-1, 0, 16), (0, 1, 64), (0, 1, 80), (1, 0, 112)]
    );
}

#[test]
fn fixture_replay_never_emits_diagonal_events() {
    let records = load_fixture_records();
    let mut classifier =
        ScrollClassifier::new(ClassifierConfig::default()).expect("default config is valid");

    for record in &records {
        match record.sample() {
            Some(sample) => {
                if let Some(event) = classifier.on_sample(sample) {
                    assert!(event.is_well_formed());
                }
            }
            None => classifier.on_release(),
        }
    }
}
