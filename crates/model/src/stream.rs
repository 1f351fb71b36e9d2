//! Sample-stream JSONL format for recording and replay.
//!
//! Gestures are recorded in append-only JSONL: a `#`-prefixed header
//! line followed by one record per line. Two record kinds exist:
//! `rotate` (one sensor step) and `release` (encoder/key released).

use serde::{Deserialize, Serialize};

use crate::sample::{SensorSample, TimestampMs};

/// One line of a recorded sample stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreamRecord {
    /// Monotonic uptime milliseconds.
    #[serde(rename = "t")]
    pub timestamp_ms: TimestampMs,

    /// The record payload.
    #[serde(flatten)]
    pub kind: RecordKind,
}

/// Discriminated union of stream record types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RecordKind {
    /// One rotation step with decoded deltas.
    Rotate {
        /// X motion delta.
        dx: i16,
        /// Y motion delta.
        dy: i16,
    },

    /// Encoder/key released; classifier state resets.
    Release,
}

/// Header describing a recorded stream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamHeader {
    /// Schema version for forward compatibility.
    pub schema_version: String,

    /// Wall-clock time at recording start (ISO 8601).
    pub epoch_wall: String,

    /// Name of the classifier profile the stream was recorded against.
    pub profile: String,
}

impl StreamHeader {
    /// Create a header for a new recording.
    ///
    /// `epoch_wall` is the wall-clock anchor of the recording clock
    /// (ISO 8601), typically `UptimeClock::epoch_wall()`.
    pub fn new(profile: impl Into<String>, epoch_wall: impl Into<String>) -> Self {
        Self {
            schema_version: "1.0".to_string(),
            epoch_wall: epoch_wall.into(),
            profile: profile.into(),
        }
    }
}

impl StreamRecord {
    /// Create a rotation record.
    pub fn rotate(timestamp_ms: TimestampMs, dx: i16, dy: i16) -> Self {
        Self {
            timestamp_ms,
            kind: RecordKind::Rotate { dx, dy },
        }
    }

    /// Create a release record.
    pub fn release(timestamp_ms: TimestampMs) -> Self {
        Self {
            timestamp_ms,
            kind: RecordKind::Release,
        }
    }

    /// Extract a sensor sample if this record carries one.
    pub fn sample(&self) -> Option<SensorSample> {
        match self.kind {
            RecordKind::Rotate { dx, dy } => {
                Some(SensorSample::new(dx, dy, self.timestamp_ms))
            }
            RecordKind::Release => None,
        }
    }
}

/// Parse records from JSONL content (one JSON object per line).
///
/// Empty lines and `#`-prefixed header/comment lines are skipped.
pub fn parse_stream(jsonl: &str) -> Result<Vec<StreamRecord>, serde_json::Error> {
    jsonl
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(serde_json::from_str)
        .collect()
}

/// Serialize records to JSONL format.
pub fn serialize_stream(records: &[StreamRecord]) -> Result<String, serde_json::Error> {
    let mut output = String::new();
    for record in records {
        output.push_str(&serde_json::to_string(record)?);
        output.push('\n');
    }
    Ok(output)
}
