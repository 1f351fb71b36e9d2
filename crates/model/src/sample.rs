//! Sensor samples, scroll events, and the packed delta wire format.
//!
//! The host binding layer delivers one packed 32-bit value per rotation
//! step: low 16 bits are the X delta, high 16 bits the Y delta, both
//! two's-complement signed. That bit layout is an external protocol
//! detail and is preserved exactly here.

use serde::{Deserialize, Serialize};

/// Monotonic uptime timestamp in milliseconds.
pub type TimestampMs = u64;

/// Decode a packed 32-bit dual-delta value into `(delta_x, delta_y)`.
///
/// Low 16 bits = X, high 16 bits = Y. The `as i16` casts reinterpret the
/// raw bits, so negative deltas sign-extend correctly.
pub fn decode_deltas(raw: u32) -> (i16, i16) {
    let delta_x = (raw & 0xFFFF) as i16;
    let delta_y = ((raw >> 16) & 0xFFFF) as i16;
    (delta_x, delta_y)
}

/// Pack `(delta_x, delta_y)` into the 32-bit wire value.
///
/// Inverse of [`decode_deltas`]; used by stream recording and tests.
pub fn encode_deltas(delta_x: i16, delta_y: i16) -> u32 {
    (delta_x as u16 as u32) | ((delta_y as u16 as u32) << 16)
}

/// One decoded rotation reading, stamped at arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensorSample {
    /// X motion delta for this step.
    pub delta_x: i16,

    /// Y motion delta for this step.
    pub delta_y: i16,

    /// Monotonic uptime milliseconds at arrival.
    pub timestamp_ms: TimestampMs,
}

impl SensorSample {
    /// Create a sample from explicit deltas.
    pub fn new(delta_x: i16, delta_y: i16, timestamp_ms: TimestampMs) -> Self {
        Self {
            delta_x,
            delta_y,
            timestamp_ms,
        }
    }

    /// Decode a sample from the packed wire value.
    pub fn from_packed(raw: u32, timestamp_ms: TimestampMs) -> Self {
        let (delta_x, delta_y) = decode_deltas(raw);
        Self::new(delta_x, delta_y, timestamp_ms)
    }

    /// Re-encode this sample's deltas into the packed wire value.
    pub fn to_packed(&self) -> u32 {
        encode_deltas(self.delta_x, self.delta_y)
    }
}

/// A discrete scroll command produced by the classifier.
///
/// Exactly one of `v`/`h` is nonzero. Sign convention follows the HID
/// report: `v = -1` scrolls down, `v = 1` scrolls up, `h = 1` scrolls
/// right, `h = -1` scrolls left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollEvent {
    /// Vertical component, in `{-1, 0, 1}`.
    pub v: i8,

    /// Horizontal component, in `{-1, 0, 1}`.
    pub h: i8,

    /// Monotonic uptime milliseconds of the sample that produced this event.
    pub timestamp_ms: TimestampMs,
}

impl ScrollEvent {
    /// Vertical scroll event.
    pub fn vertical(v: i8, timestamp_ms: TimestampMs) -> Self {
        Self {
            v,
            h: 0,
            timestamp_ms,
        }
    }

    /// Horizontal scroll event.
    pub fn horizontal(h: i8, timestamp_ms: TimestampMs) -> Self {
        Self {
            v: 0,
            h,
            timestamp_ms,
        }
    }

    /// Whether exactly one component is nonzero and both are in range.
    pub fn is_well_formed(&self) -> bool {
        let v_ok = matches!(self.v, -1 | 0 | 1);
        let h_ok = matches!(self.h, -1 | 0 | 1);
        v_ok && h_ok && ((self.v == 0) != (self.h == 0))
    }
}
