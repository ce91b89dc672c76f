use std::collections::VecDeque;

/// Requests-per-minute over a fixed trailing window, measured relative to
/// the newest event seen rather than the wall clock.
///
/// Expects non-decreasing timestamps. An older timestamp arriving after a
/// newer one shifts the eviction bound backwards and can briefly inflate the
/// in-window count; callers feeding an append-only log never hit this.
#[derive(Debug)]
pub struct SlidingAverage {
    window_secs: u64,
    samples: VecDeque<i64>,
    rate: f64,
}

impl SlidingAverage {
    /// `window_secs` must be greater than zero; config validation enforces
    /// this before any instance is built.
    pub fn new(window_secs: u64) -> Self {
        Self {
            window_secs,
            samples: VecDeque::new(),
            rate: 0.0,
        }
    }

    pub fn update(&mut self, ts: i64) {
        self.samples.push_back(ts);

        // The just-inserted sample can never be out of its own window, so
        // the queue is guaranteed non-empty throughout.
        while let Some(&oldest) = self.samples.front() {
            if ts - oldest > self.window_secs as i64 {
                self.samples.pop_front();
            } else {
                break;
            }
        }

        let oldest = *self.samples.front().unwrap_or(&ts);
        let span = ts - oldest;
        self.rate = if span > 0 {
            (self.samples.len() - 1) as f64 * 60.0 / span as f64
        } else {
            0.0
        };
    }

    pub fn rate_per_minute(&self) -> f64 {
        self.rate
    }

    #[cfg(test)]
    fn span_secs(&self) -> i64 {
        match (self.samples.front(), self.samples.back()) {
            (Some(&oldest), Some(&newest)) => newest - oldest,
            _ => 0,
        }
    }
}
