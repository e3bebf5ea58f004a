//! Frame clock measuring wall-clock time between loop iterations

use std::time::Instant;

/// Tracks the elapsed time between frames.
///
/// The delta is variable: it is whatever real time passed since the previous
/// tick, including pacing and processing time.
pub struct FrameClock {
    /// Total elapsed time in seconds since `start`
    pub total_time: f64,
    /// Time since the previous tick in seconds
    pub delta_time: f64,
    /// Number of ticks since `start`
    pub frame_count: u64,
    /// Optional upper bound on a single delta
    max_delta: Option<f64>,
    /// Instant of the previous tick (or of `start`)
    previous: Instant,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            total_time: 0.0,
            delta_time: 0.0,
            frame_count: 0,
            max_delta: None,
            previous: Instant::now(),
        }
    }
}

impl FrameClock {
    /// Create an unclamped clock
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock whose deltas never exceed `max_delta` seconds
    pub fn with_max_delta(max_delta: f64) -> Self {
        Self {
            max_delta: Some(max_delta),
            ..Self::default()
        }
    }

    /// Reset counters and take `now` as the previous timestamp
    pub fn start_at(&mut self, now: Instant) {
        self.previous = now;
        self.total_time = 0.0;
        self.delta_time = 0.0;
        self.frame_count = 0;
    }

    /// Advance the clock to `now`. Call once per frame; returns the new delta.
    pub fn tick_at(&mut self, now: Instant) -> f64 {
        let elapsed = now.saturating_duration_since(self.previous).as_secs_f64();
        self.previous = now;

        self.delta_time = match self.max_delta {
            Some(max) => elapsed.min(max),
            None => elapsed,
        };
        self.total_time += self.delta_time;
        self.frame_count += 1;
        self.delta_time
    }
}
