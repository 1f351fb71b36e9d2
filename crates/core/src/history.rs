//! Fixed-capacity delta history for smoothing.
//!
//! The buffer is always 5 slots wide but only the first `window` slots
//! are live; the ring index wraps at `window`, so slots past the window
//! are never written or read for a given configuration.

/// Hard capacity of the smoothing buffer.
pub const MAX_SMOOTHING: usize = 5;

/// Ring buffer of the most recent motion deltas, one lane per axis.
#[derive(Debug, Clone)]
pub struct DeltaHistory {
    xs: [i32; MAX_SMOOTHING],
    ys: [i32; MAX_SMOOTHING],
    idx: usize,
    window: usize,
}

impl DeltaHistory {
    /// Create a history with the given logical window.
    ///
    /// Callers validate `window` at configuration time; `1..=MAX_SMOOTHING`
    /// is the only legal range.
    pub fn new(window: usize) -> Self {
        debug_assert!((1..=MAX_SMOOTHING).contains(&window));
        Self {
            xs: [0; MAX_SMOOTHING],
            ys: [0; MAX_SMOOTHING],
            idx: 0,
            window,
        }
    }

    /// Record one delta pair, overwriting the oldest slot in the window.
    pub fn push(&mut self, delta_x: i16, delta_y: i16) {
        self.xs[self.idx] = delta_x as i32;
        self.ys[self.idx] = delta_y as i32;
        self.idx = (self.idx + 1) % self.window;
    }

    /// Average of the window on each axis, with truncating division.
    pub fn smoothed(&self) -> (i32, i32) {
        let sum_x: i32 = self.xs[..self.window].iter().sum();
        let sum_y: i32 = self.ys[..self.window].iter().sum();
        (sum_x / self.window as i32, sum_y / self.window as i32)
    }

    /// Zero every slot (full capacity, not just the window) and rewind
    /// the write index.
    pub fn clear(&mut self) {
        self.xs = [0; MAX_SMOOTHING];
        self.ys = [0; MAX_SMOOTHING];
        self.idx = 0;
    }

    /// The logical window length.
    pub fn window(&self) -> usize {
        self.window
    }

    /// The next write slot; always below the window length.
    pub fn write_index(&self) -> usize {
        self.idx
    }
}
