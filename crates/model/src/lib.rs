//! OmniScroll Data Model
//!
//! Wire and stream types shared by the classifier core and tooling:
//! - Packed 32-bit delta decoding from the host binding layer
//! - [`SensorSample`] and [`ScrollEvent`] types
//! - Sample-stream JSONL parse/serialize for recording and replay
//!
//! This crate is pure data — no I/O beyond (de)serialization helpers.

pub mod sample;
pub mod stream;

pub use sample::{decode_deltas, encode_deltas, ScrollEvent, SensorSample};
pub use stream::{parse_stream, serialize_stream, RecordKind, StreamHeader, StreamRecord};
