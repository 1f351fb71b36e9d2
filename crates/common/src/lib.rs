//! OmniScroll Common Utilities
//!
//! Shared infrastructure for all OmniScroll crates:
//! - Error types and result aliases
//! - Monotonic uptime clock for event timestamping
//! - Tracing/logging initialization
//! - Configuration and classifier profile loading

pub mod clock;
pub mod config;
pub mod error;
pub mod logging;

pub use clock::*;
pub use config::*;
pub use error::*;
