//! The scroll classifier state machine.
//!
//! # Algorithm
//!
//! 1. **Accumulate** raw deltas (kept for parity with the device state
//!    layout; the decision never reads them).
//! 2. **Smooth** over a ring buffer of the last N deltas.
//! 3. **Gate** on smoothed magnitude `|x| + |y|` against the threshold.
//! 4. **Arbitrate** the axis using fixed-point bias weights.
//! 5. **Hysteresis:** flipping away from the locked axis requires the
//!    challenger to dominate by 2x, so near-diagonal input cannot make
//!    the scroll direction flicker.

use serde::{Deserialize, Serialize};

use omniscroll_common::config::ProfileDefaults;
use omniscroll_common::error::{OmniScrollError, OmniScrollResult};
use omniscroll_model::sample::{ScrollEvent, SensorSample, TimestampMs};

use crate::history::{DeltaHistory, MAX_SMOOTHING};

/// Immutable classifier configuration, supplied at construction.
///
/// Bias values are fixed-point scaled by 10 (`10` = 1.0x) so the whole
/// decision path stays in integer arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Minimum smoothed magnitude (|x|+|y|) required to act.
    pub threshold: i32,

    /// Vertical axis weight, fixed-point x10.
    pub vertical_bias: i32,

    /// Horizontal axis weight, fixed-point x10.
    pub horizontal_bias: i32,

    /// Number of most recent samples averaged, in `[1, 5]`.
    pub smoothing: usize,

    /// Reserved for diagonal detection; not read by the decision logic.
    pub diagonal_threshold: i32,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            threshold: 4,
            vertical_bias: 10,
            horizontal_bias: 10,
            smoothing: 1,
            diagonal_threshold: 0,
        }
    }
}

impl ClassifierConfig {
    /// Check the construction preconditions.
    ///
    /// `smoothing` outside `[1, 5]` would divide by zero or run off the
    /// history buffer, so it is rejected here rather than handled at
    /// sample time.
    pub fn validate(&self) -> OmniScrollResult<()> {
        if self.smoothing < 1 || self.smoothing > MAX_SMOOTHING {
            return Err(OmniScrollError::config(format!(
                "smoothing must be in [1, {}], got {}",
                MAX_SMOOTHING, self.smoothing
            )));
        }
        if self.threshold < 0 {
            return Err(OmniScrollError::config(format!(
                "threshold must be non-negative, got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}

impl From<ProfileDefaults> for ClassifierConfig {
    fn from(profile: ProfileDefaults) -> Self {
        Self {
            threshold: profile.threshold,
            vertical_bias: profile.vertical_bias,
            horizontal_bias: profile.horizontal_bias,
            smoothing: profile.smoothing,
            diagonal_threshold: profile.diagonal_threshold,
        }
    }
}

/// The scroll axis a classifier instance is locked onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

/// Stateful sample-by-sample scroll classifier.
///
/// One instance per configured device binding; callers must serialize
/// access, the classifier performs no internal locking.
#[derive(Debug)]
pub struct ScrollClassifier {
    config: ClassifierConfig,
    accumulated_x: i32,
    accumulated_y: i32,
    last_direction: Option<Axis>,
    history: DeltaHistory,
    sample_count: u64,
}

impl ScrollClassifier {
    /// Create a classifier, validating the configuration.
    pub fn new(config: ClassifierConfig) -> OmniScrollResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            accumulated_x: 0,
            accumulated_y: 0,
            last_direction: None,
            history: DeltaHistory::new(config.smoothing),
            sample_count: 0,
        })
    }

    /// Create a classifier from a named profile's knobs.
    pub fn from_profile(profile: ProfileDefaults) -> OmniScrollResult<Self> {
        Self::new(profile.into())
    }

    /// The configuration this instance was built with.
    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// The axis currently locked, if any.
    pub fn last_direction(&self) -> Option<Axis> {
        self.last_direction
    }

    /// Samples seen since construction or the last release.
    pub fn samples_seen(&self) -> u64 {
        self.sample_count
    }

    /// Process one decoded sample; returns the scroll event to emit, if
    /// any. The event is stamped with the sample's timestamp.
    pub fn on_sample(&mut self, sample: SensorSample) -> Option<ScrollEvent> {
        self.sample_count += 1;

        // Raw accumulation, zeroed on emit; the decision never reads it.
        self.accumulated_x = self.accumulated_x.saturating_add(sample.delta_x as i32);
        self.accumulated_y = self.accumulated_y.saturating_add(sample.delta_y as i32);

        self.history.push(sample.delta_x, sample.delta_y);
        let (smooth_x, smooth_y) = self.history.smoothed();

        let magnitude = smooth_x.abs() + smooth_y.abs();
        if magnitude < self.config.threshold {
            return None;
        }

        // Widen before the bias multiply: |smooth| * i32 bias can exceed
        // i32 even for configs validate() accepts
        let weighted_y = (smooth_y.abs() as i64 * self.config.vertical_bias as i64) / 10;
        let weighted_x = (smooth_x.abs() as i64 * self.config.horizontal_bias as i64) / 10;

        let event = if weighted_y > weighted_x {
            // Flipping a horizontal lock needs a 2x vertical dominance
            if self.last_direction == Some(Axis::Horizontal) && weighted_y < weighted_x * 2 {
                tracing::trace!(weighted_x, weighted_y, "vertical switch held by hysteresis");
                return None;
            }
            self.last_direction = Some(Axis::Vertical);

            // Positive Y rotation scrolls down
            let v = if smooth_y > 0 { -1 } else { 1 };
            ScrollEvent::vertical(v, sample.timestamp_ms)
        } else {
            // Ties land here: horizontal wins an exact tie by construction
            if self.last_direction == Some(Axis::Vertical) && weighted_x < weighted_y * 2 {
                tracing::trace!(weighted_x, weighted_y, "horizontal switch held by hysteresis");
                return None;
            }
            self.last_direction = Some(Axis::Horizontal);

            let h = if smooth_x > 0 { 1 } else { -1 };
            ScrollEvent::horizontal(h, sample.timestamp_ms)
        };

        // Reset raw accumulation after sending; smoothing history stays
        self.accumulated_x = 0;
        self.accumulated_y = 0;

        tracing::debug!(v = event.v, h = event.h, t = event.timestamp_ms, "scroll event");
        Some(event)
    }

    /// Decode a packed 32-bit dual-delta value and process it.
    pub fn on_packed(&mut self, raw: u32, timestamp_ms: TimestampMs) -> Option<ScrollEvent> {
        self.on_sample(SensorSample::from_packed(raw, timestamp_ms))
    }

    /// Release: reset all state atomically. No event is emitted, and a
    /// released classifier behaves exactly like a fresh one.
    pub fn on_release(&mut self) {
        self.last_direction = None;
        self.accumulated_x = 0;
        self.accumulated_y = 0;
        self.sample_count = 0;
        self.history.clear();
        tracing::trace!("classifier state reset on release");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use omniscroll_model::sample::encode_deltas;

    fn classifier(config: ClassifierConfig) -> ScrollClassifier {
        ScrollClassifier::new(config).expect("config should be valid")
    }

    fn passthrough() -> ClassifierConfig {
        // smoothing=1 and unit biases: decisions see raw deltas directly
        ClassifierConfig {
            threshold: 1,
            vertical_bias: 10,
            horizontal_bias: 10,
            smoothing: 1,
            diagonal_threshold: 0,
        }
    }

    fn sample(dx: i16, dy: i16) -> SensorSample {
        SensorSample::new(dx, dy, 0)
    }

    #[test]
    fn test_rejects_zero_smoothing() {
        let config = ClassifierConfig {
            smoothing: 0,
            ..ClassifierConfig::default()
        };
        assert!(matches!(
            ScrollClassifier::new(config),
            Err(OmniScrollError::Config { .. })
        ));
    }

    #[test]
    fn test_rejects_oversized_smoothing() {
        let config = ClassifierConfig {
            smoothing: 6,
            ..ClassifierConfig::default()
        };
        assert!(ScrollClassifier::new(config).is_err());
    }

    #[test]
    fn test_rejects_negative_threshold() {
        let config = ClassifierConfig {
            threshold: -1,
            ..ClassifierConfig::default()
        };
        assert!(ScrollClassifier::new(config).is_err());
    }

    #[test]
    fn test_below_threshold_is_silent() {
        let mut c = classifier(ClassifierConfig {
            threshold: 4,
            ..passthrough()
        });
        for _ in 0..100 {
            assert_eq!(c.on_sample(sample(1, 1)), None);
        }
        assert_eq!(c.last_direction(), None);
    }

    #[test]
    fn test_vertical_impulse_signs() {
        let mut c = classifier(passthrough());
        // Positive Y scrolls down (v = -1)
        let down = c.on_sample(sample(0, 5)).unwrap();
        assert_eq!((down.v, down.h), (-1, 0));
        // Negative Y scrolls up (v = 1)
        let up = c.on_sample(sample(0, -5)).unwrap();
        assert_eq!((up.v, up.h), (1, 0));
    }

    #[test]
    fn test_horizontal_impulse_signs() {
        let mut c = classifier(passthrough());
        let right = c.on_sample(sample(5, 0)).unwrap();
        assert_eq!((right.v, right.h), (0, 1));
        let left = c.on_sample(sample(-5, 0)).unwrap();
        assert_eq!((left.v, left.h), (0, -1));
    }

    #[test]
    fn test_exact_tie_resolves_horizontal() {
        let mut c = classifier(passthrough());
        let event = c.on_sample(sample(5, 5)).unwrap();
        assert_eq!((event.v, event.h), (0, 1));
        assert_eq!(c.last_direction(), Some(Axis::Horizontal));
    }

    #[test]
    fn test_hysteresis_holds_vertical_lock() {
        let mut c = classifier(passthrough());
        c.on_sample(sample(0, 5)).unwrap();
        assert_eq!(c.last_direction(), Some(Axis::Vertical));

        // Horizontal ahead but below 2x dominance: suppressed, lock kept
        assert_eq!(c.on_sample(sample(5, 4)), None);
        assert_eq!(c.last_direction(), Some(Axis::Vertical));

        // Exactly 2x dominance flips the lock
        let event = c.on_sample(sample(8, 4)).unwrap();
        assert_eq!((event.v, event.h), (0, 1));
        assert_eq!(c.last_direction(), Some(Axis::Horizontal));
    }

    #[test]
    fn test_hysteresis_holds_horizontal_lock() {
        let mut c = classifier(passthrough());
        c.on_sample(sample(5, 0)).unwrap();
        assert_eq!(c.last_direction(), Some(Axis::Horizontal));

        assert_eq!(c.on_sample(sample(4, 5)), None);
        assert_eq!(c.last_direction(), Some(Axis::Horizontal));

        let event = c.on_sample(sample(4, 8)).unwrap();
        assert_eq!((event.v, event.h), (-1, 0));
        assert_eq!(c.last_direction(), Some(Axis::Vertical));
    }

    #[test]
    fn test_suppressed_switch_leaves_lock_unchanged() {
        let mut c = classifier(passthrough());
        c.on_sample(sample(0, 5)).unwrap();
        for _ in 0..10 {
            // Repeatedly challenged within the hysteresis band
            assert_eq!(c.on_sample(sample(5, 4)), None);
            assert_eq!(c.last_direction(), Some(Axis::Vertical));
        }
    }

    #[test]
    fn test_smoothing_warmup_gates_until_window_full() {
        // threshold equals the steady-state smoothed magnitude, so the
        // first event fires exactly when the 5-wide window is full
        let mut c = classifier(ClassifierConfig {
            threshold: 5,
            smoothing: 5,
            ..passthrough()
        });
        for _ in 0..4 {
            assert_eq!(c.on_sample(sample(0, 5)), None);
        }
        let event = c.on_sample(sample(0, 5)).unwrap();
        assert_eq!((event.v, event.h), (-1, 0));
    }

    #[test]
    fn test_smoothing_truncates_toward_zero() {
        // 3/2 truncates to 1, below threshold; second sample reaches 3
        let mut c = classifier(ClassifierConfig {
            threshold: 3,
            smoothing: 2,
            ..passthrough()
        });
        assert_eq!(c.on_sample(sample(0, 3)), None);
        assert!(c.on_sample(sample(0, 3)).is_some());
    }

    #[test]
    fn test_bias_tilts_arbitration() {
        // 1.5x vertical bias: (5, 4) weighs 6 vertical vs 5 horizontal
        let mut c = classifier(ClassifierConfig {
            vertical_bias: 15,
            ..passthrough()
        });
        let event = c.on_sample(sample(5, 4)).unwrap();
        assert_eq!((event.v, event.h), (-1, 0));
    }

    #[test]
    fn test_extreme_bias_does_not_overflow() {
        // validate() accepts any bias; the weighted multiply must not
        // panic even at i32::MAX
        let mut c = classifier(ClassifierConfig {
            vertical_bias: i32::MAX,
            ..passthrough()
        });
        let event = c.on_sample(sample(0, 1000)).unwrap();
        assert_eq!((event.v, event.h), (-1, 0));

        let mut c = classifier(ClassifierConfig {
            horizontal_bias: i32::MAX,
            ..passthrough()
        });
        let event = c.on_sample(sample(i16::MAX, i16::MIN)).unwrap();
        assert_eq!(event.h, 1);
    }

    #[test]
    fn test_release_resets_to_fresh_behavior() {
        let gesture: Vec<(i16, i16)> = vec![(0, 5), (5, 4), (8, 4), (1, 1), (0, -6)];

        let mut used = classifier(passthrough());
        used.on_sample(sample(0, 9));
        used.on_sample(sample(7, 2));
        used.on_release();
        assert_eq!(used.last_direction(), None);
        assert_eq!(used.samples_seen(), 0);

        let mut fresh = classifier(passthrough());
        for &(dx, dy) in &gesture {
            assert_eq!(used.on_sample(sample(dx, dy)), fresh.on_sample(sample(dx, dy)));
        }
    }

    #[test]
    fn test_release_is_idempotent() {
        let mut c = classifier(passthrough());
        c.on_sample(sample(0, 5));
        c.on_release();
        c.on_release();
        assert_eq!(c.last_direction(), None);
        assert_eq!(c.on_sample(sample(0, 5)).unwrap().v, -1);
    }

    #[test]
    fn test_history_survives_emission() {
        // Emitting does not clear the smoothing window: a following
        // small delta still sees the big one in its average
        let mut c = classifier(ClassifierConfig {
            threshold: 3,
            smoothing: 2,
            ..passthrough()
        });
        assert!(c.on_sample(sample(0, 8)).is_some());
        // (8 + 0) / 2 = 4, still above threshold
        assert!(c.on_sample(sample(0, 0)).is_some());
    }

    #[test]
    fn test_packed_decode_boundary() {
        let mut c = classifier(passthrough());
        let raw = encode_deltas(0, -5);
        let event = c.on_packed(raw, 77).unwrap();
        assert_eq!((event.v, event.h), (1, 0));
        assert_eq!(event.timestamp_ms, 77);
    }

    #[test]
    fn test_worked_example() {
        // threshold=4, biases=10, smoothing=1 from the profile defaults
        let mut c = classifier(ClassifierConfig::default());
        assert_eq!(c.on_sample(sample(0, 5)).map(|e| (e.v, e.h)), Some((-1, 0)));
        assert_eq!(c.on_sample(sample(0, -5)).map(|e| (e.v, e.h)), Some((1, 0)));
        assert_eq!(c.on_sample(sample(1, 1)), None);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn valid_config() -> impl Strategy<Value = ClassifierConfig> {
            (0i32..50, 1i32..=i32::MAX, 1i32..=i32::MAX, 1usize..=5).prop_map(
                |(threshold, vertical_bias, horizontal_bias, smoothing)| ClassifierConfig {
                    threshold,
                    vertical_bias,
                    horizontal_bias,
                    smoothing,
                    diagonal_threshold: 0,
                },
            )
        }

        proptest! {
            #[test]
            fn prop_events_have_exactly_one_nonzero_component(
                config in valid_config(),
                deltas in proptest::collection::vec((-200i16..200, -200i16..200), 1..64),
            ) {
                let mut c = ScrollClassifier::new(config).unwrap();
                for (dx, dy) in deltas {
                    if let Some(event) = c.on_sample(SensorSample::new(dx, dy, 0)) {
                        prop_assert!(event.is_well_formed());
                    }
                }
            }

            #[test]
            fn prop_tiny_deltas_never_emit(
                deltas in proptest::collection::vec((-1i16..=1, -1i16..=1), 1..64),
            ) {
                // |smooth_x| + |smooth_y| <= 2 < 3 for unit deltas
                let mut c = ScrollClassifier::new(ClassifierConfig {
                    threshold: 3,
                    smoothing: 1,
                    ..ClassifierConfig::default()
                })
                .unwrap();
                for (dx, dy) in deltas {
                    prop_assert_eq!(c.on_sample(SensorSample::new(dx, dy, 0)), None);
                }
            }

            #[test]
            fn prop_release_restores_fresh_behavior(
                config in valid_config(),
                prefix in proptest::collection::vec((-200i16..200, -200i16..200), 0..32),
                suffix in proptest::collection::vec((-200i16..200, -200i16..200), 0..32),
            ) {
                let mut used = ScrollClassifier::new(config).unwrap();
                for (dx, dy) in prefix {
                    used.on_sample(SensorSample::new(dx, dy, 0));
                }
                used.on_release();

                let mut fresh = ScrollClassifier::new(config).unwrap();
                for (dx, dy) in suffix {
                    prop_assert_eq!(
                        used.on_sample(SensorSample::new(dx, dy, 0)),
                        fresh.on_sample(SensorSample::new(dx, dy, 0))
                    );
                }
            }
        }
    }
}
