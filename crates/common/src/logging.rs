//! Logging and tracing initialization for OmniScroll tooling.
//!
//! The classifier core only emits `tracing` events; this module owns
//! turning them into output. Replay runs care about classifier
//! decisions, not dependency noise, so the fallback filter scopes
//! `omniscroll` crates to the configured level and holds everything
//! else at `warn`.

use std::path::Path;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;

/// Build the filter directive for a configured level.
///
/// A bare level like `debug` is scoped to the `omniscroll` crates;
/// anything containing `=` or `,` is taken as a full directive and
/// passed through untouched.
pub fn filter_directive(level: &str) -> String {
    if level.contains('=') || level.contains(',') {
        level.to_string()
    } else {
        format!("warn,omniscroll={level},omniscroll_core={level},omniscroll_model={level}")
    }
}

/// Initialize the tracing subscriber with the given configuration.
///
/// `RUST_LOG` wins over the configured level. When `config.file` is
/// set, output goes there (append, ANSI stripped) instead of stderr.
pub fn init_logging(config: &LoggingConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(&config.level)));

    match &config.file {
        Some(path) => match open_log_file(path) {
            Ok(file) => {
                let writer = std::sync::Arc::new(file);
                if config.json {
                    let subscriber = fmt::Subscriber::builder()
                        .with_env_filter(env_filter)
                        .with_writer(writer)
                        .json()
                        .finish();
                    tracing::subscriber::set_global_default(subscriber).ok();
                } else {
                    let subscriber = fmt::Subscriber::builder()
                        .with_env_filter(env_filter)
                        .with_writer(writer)
                        .with_ansi(false)
                        .finish();
                    tracing::subscriber::set_global_default(subscriber).ok();
                }
            }
            Err(e) => {
                eprintln!("Failed to open log file {}: {e}", path.display());
                init_stderr(config, env_filter);
            }
        },
        None => init_stderr(config, env_filter),
    }
}

fn init_stderr(config: &LoggingConfig, env_filter: EnvFilter) {
    if config.json {
        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(env_filter)
            .json()
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    } else {
        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(env_filter)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    }
}

fn open_log_file(path: &Path) -> std::io::Result<std::fs::File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::OpenOptions::new().create(true).append(true).open(path)
}

/// Initialize logging with defaults (useful for tests and quick scripts).
pub fn init_default_logging() {
    init_logging(&LoggingConfig::default());
}
