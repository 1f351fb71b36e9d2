//! Uptime clock for sample and event timestamping.
//!
//! Scroll events carry a monotonic timestamp in milliseconds since the
//! clock was started, matching the uptime convention of the host firmware.
//! The wall-clock anchor is recorded so replayed streams can be dated.

use std::time::Instant;

/// A monotonic clock anchored to a fixed epoch (the moment the device
/// binding came up).
#[derive(Debug, Clone)]
pub struct UptimeClock {
    /// The instant the clock was started.
    epoch: Instant,

    /// Wall-clock time at epoch (ISO 8601 string).
    epoch_wall: String,
}

impl UptimeClock {
    /// Create a new clock anchored to now.
    pub fn start() -> Self {
        Self {
            epoch: Instant::now(),
            epoch_wall: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Milliseconds elapsed since the clock was started.
    pub fn uptime_ms(&self) -> u64 {
        self.epoch.elapsed().as_millis() as u64
    }

    /// Seconds elapsed since the clock was started.
    pub fn elapsed_secs(&self) -> f64 {
        self.epoch.elapsed().as_secs_f64()
    }

    /// Wall-clock time at clock start.
    pub fn epoch_wall(&self) -> &str {
        &self.epoch_wall
    }

    /// The underlying epoch instant.
    pub fn epoch(&self) -> Instant {
        self.epoch
    }

    /// Convert an uptime millisecond value to seconds.
    pub fn ms_to_secs(ms: u64) -> f64 {
        ms as f64 / 1_000.0
    }

    /// Convert seconds to uptime milliseconds.
    pub fn secs_to_ms(secs: f64) -> u64 {
        (secs * 1_000.0) as u64
    }
}
