//! Replay a recorded sample stream through a classifier profile.

use std::path::PathBuf;

use omniscroll_common::clock::UptimeClock;
use omniscroll_common::config::AppConfig;
use omniscroll_common::error::OmniScrollError;
use omniscroll_core::{ClassifierConfig, ScrollClassifier};
use omniscroll_model::stream::parse_stream;

#[allow(clippy::too_many_arguments)]
pub fn run(
    stream: PathBuf,
    profile: String,
    threshold: Option<i32>,
    vertical_bias: Option<i32>,
    horizontal_bias: Option<i32>,
    smoothing: Option<usize>,
    json: bool,
) -> anyhow::Result<()> {
    println!("Replaying stream: {}", stream.display());
    let clock = UptimeClock::start();

    let content = std::fs::read_to_string(&stream).map_err(|_| OmniScrollError::FileNotFound {
        path: stream.clone(),
    })?;
    let records = parse_stream(&content)
        .map_err(|e| OmniScrollError::stream(format!("failed to parse stream: {e}")))?;
    println!("  Loaded {} records", records.len());

    let app_config = AppConfig::load();
    let defaults = app_config
        .profile(&profile)
        .copied()
        .ok_or_else(|| OmniScrollError::replay(format!("unknown profile: {profile}")))?;

    let mut config = ClassifierConfig::from(defaults);
    if let Some(threshold) = threshold {
        config.threshold = threshold;
    }
    if let Some(vertical_bias) = vertical_bias {
        config.vertical_bias = vertical_bias;
    }
    if let Some(horizontal_bias) = horizontal_bias {
        config.horizontal_bias = horizontal_bias;
    }
    if let Some(smoothing) = smoothing {
        config.smoothing = smoothing;
    }

    let mut classifier = ScrollClassifier::new(config)?;

    let mut emitted = 0u64;
    let mut suppressed = 0u64;
    for record in &records {
        match record.sample() {
            Some(sample) => match classifier.on_sample(sample) {
                Some(event) => {
                    emitted += 1;
                    if json {
                        println!("{}", serde_json::to_string(&event)?);
                    } else {
                        let arrow = match (event.v, event.h) {
                            (1, _) => "up",
                            (-1, _) => "down",
                            (_, 1) => "right",
                            _ => "left",
                        };
                        println!("  [{:>6} ms] scroll {}", event.timestamp_ms, arrow);
                    }
                }
                None => suppressed += 1,
            },
            None => {
                classifier.on_release();
                if !json {
                    println!("  [{:>6} ms] release", record.timestamp_ms);
                }
            }
        }
    }

    println!(
        "\nReplay complete: {} events emitted, {} samples gated or held ({} ms)",
        emitted,
        suppressed,
        clock.uptime_ms()
    );

    Ok(())
}
