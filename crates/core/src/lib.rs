//! OmniScroll Classification Core
//!
//! Converts a stream of raw 2-D motion deltas into discrete scroll
//! events:
//! - **Smoothing:** fixed-window moving average over recent deltas
//! - **Gating:** magnitude threshold below which nothing happens
//! - **Arbitration:** bias-weighted axis decision with a 2x hysteresis
//!   margin that prevents flicker on noisy or diagonal input
//! - **Reset:** release clears all state atomically
//!
//! This crate is pure computation — no I/O, no platform dependencies.
//! All inputs are data; all outputs are data.

pub mod classifier;
pub mod history;

pub use classifier::{Axis, ClassifierConfig, ScrollClassifier};
pub use history::DeltaHistory;
