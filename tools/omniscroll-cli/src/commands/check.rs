//! Validate a classifier profile file.

use std::path::PathBuf;

use omniscroll_common::config::ProfileDefaults;
use omniscroll_common::error::OmniScrollError;
use omniscroll_core::ClassifierConfig;

pub fn run(path: PathBuf) -> anyhow::Result<()> {
    println!("Checking profile: {}", path.display());

    let content = std::fs::read_to_string(&path)
        .map_err(|_| OmniScrollError::FileNotFound { path: path.clone() })?;
    let profile: ProfileDefaults = serde_json::from_str(&content)
        .map_err(|e| OmniScrollError::config(format!("failed to parse profile: {e}")))?;

    let config = ClassifierConfig::from(profile);
    match config.validate() {
        Ok(()) => {
            println!("[OK] threshold: {}", config.threshold);
            println!(
                "[OK] biases: vertical x{:.1}, horizontal x{:.1}",
                config.vertical_bias as f64 / 10.0,
                config.horizontal_bias as f64 / 10.0
            );
            println!("[OK] smoothing window: {}", config.smoothing);
            if config.diagonal_threshold != 0 {
                println!(
                    "[WARN] diagonal_threshold is set ({}) but currently unused",
                    config.diagonal_threshold
                );
            }
            println!("\nProfile is valid.");
            Ok(())
        }
        Err(e) => {
            println!("[FAIL] {e}");
            Err(e.into())
        }
    }
}
