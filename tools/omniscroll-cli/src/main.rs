//! OmniScroll CLI — Replay, validate, and synthesize sensor streams.
//!
//! Usage:
//!   omniscroll replay <STREAM>    Run a recorded stream through a classifier
//!   omniscroll check <PROFILE>    Validate a classifier profile file
//!   omniscroll synth [OPTIONS]    Generate a synthetic gesture stream

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "omniscroll",
    about = "Rotational-input scroll classification tooling",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a recorded sample stream through a classifier profile
    Replay {
        /// Path to the JSONL sample stream
        stream: PathBuf,

        /// Named profile from the app config
        #[arg(short, long, default_value = "default")]
        profile: String,

        /// Override the magnitude threshold
        #[arg(long)]
        threshold: Option<i32>,

        /// Override the vertical bias (fixed-point x10)
        #[arg(long)]
        vertical_bias: Option<i32>,

        /// Override the horizontal bias (fixed-point x10)
        #[arg(long)]
        horizontal_bias: Option<i32>,

        /// Override the smoothing window [1, 5]
        #[arg(long)]
        smoothing: Option<usize>,

        /// Print emitted events as JSONL instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Validate a classifier profile file
    Check {
        /// Path to the profile JSON file
        path: PathBuf,
    },

    /// Generate a synthetic gesture stream
    Synth {
        /// Output JSONL path
        #[arg(short, long, default_value = "stream.jsonl")]
        output: PathBuf,

        /// Gesture pattern: vertical|horizontal|diagonal|noise
        #[arg(long, default_value = "vertical")]
        pattern: String,

        /// Number of rotation steps
        #[arg(long, default_value = "32")]
        steps: u32,

        /// Delta magnitude per step
        #[arg(long, default_value = "5")]
        delta: i16,

        /// Milliseconds between steps
        #[arg(long, default_value = "16")]
        interval_ms: u64,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    omniscroll_common::logging::init_logging(&omniscroll_common::config::LoggingConfig {
        level: log_level.to_string(),
        json: false,
        file: None,
    });

    match cli.command {
        Commands::Replay {
            stream,
            profile,
            threshold,
            vertical_bias,
            horizontal_bias,
            smoothing,
            json,
        } => commands::replay::run(
            stream,
            profile,
            threshold,
            vertical_bias,
            horizontal_bias,
            smoothing,
            json,
        ),
        Commands::Check { path } => commands::check::run(path),
        Commands::Synth {
            output,
            pattern,
            steps,
            delta,
            interval_ms,
        } => commands::synth::run(output, pattern, steps, delta, interval_ms),
    }
}
