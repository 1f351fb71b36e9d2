//! Generate synthetic gesture streams for fixtures and manual testing.

use std::path::PathBuf;

use omniscroll_common::clock::UptimeClock;
use omniscroll_model::stream::{serialize_stream, StreamHeader, StreamRecord};

pub fn run(
    output: PathBuf,
    pattern: String,
    steps: u32,
    delta: i16,
    interval_ms: u64,
) -> anyhow::Result<()> {
    let mut records = Vec::with_capacity(steps as usize + 1);

    for step in 0..steps {
        let t = step as u64 * interval_ms;
        let (dx, dy) = match pattern.as_str() {
            "vertical" => (0, delta),
            "horizontal" => (delta, 0),
            "diagonal" => (delta, delta),
            // Deterministic jitter: alternating small deltas around zero
            "noise" => {
                let sign = if step % 2 == 0 { 1 } else { -1 };
                (sign * (delta / 4).max(1), -sign * (delta / 4).max(1))
            }
            other => anyhow::bail!("unknown pattern: {other}"),
        };
        records.push(StreamRecord::rotate(t, dx, dy));
    }
    records.push(StreamRecord::release(steps as u64 * interval_ms));

    // Anchor the recording to the tool's uptime clock
    let clock = UptimeClock::start();
    let header = StreamHeader::new("default", clock.epoch_wall());
    let mut content = format!("# {}\n", serde_json::to_string(&header)?);
    content.push_str(&serialize_stream(&records)?);

    std::fs::write(&output, content)?;
    println!(
        "Wrote {} records ({} pattern) to {}",
        records.len(),
        pattern,
        output.display()
    );

    Ok(())
}
