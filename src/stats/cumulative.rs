/// Requests-per-minute averaged over the whole span observed so far,
/// from the first event ever seen to the latest one.
#[derive(Debug, Default)]
pub struct CumulativeAverage {
    first_seen: Option<i64>,
    last_seen: i64,
    count: u64,
    rate: f64,
}

impl CumulativeAverage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one event timestamp (unix seconds) into the average.
    ///
    /// `last_seen` only ever advances, so an out-of-order timestamp widens
    /// nothing and simply counts as one more request. The rate stays at its
    /// previous value until two updates produce a non-zero span.
    pub fn update(&mut self, ts: i64) {
        match self.first_seen {
            None => {
                self.first_seen = Some(ts);
                self.last_seen = ts;
            }
            Some(first) => {
                if ts > self.last_seen {
                    self.last_seen = ts;
                }
                let span = self.last_seen - first;
                if span != 0 {
                    self.rate = (60 * self.count) as f64 / span as f64;
                }
            }
        }
        self.count += 1;
    }

    pub fn rate_per_minute(&self) -> f64 {
        self.rate
    }

    #[allow(dead_code)]
    pub fn count(&self) -> u64 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::CumulativeAverage;

    #[test]
    fn starts_at_zero() {
        let average = CumulativeAverage::new();
        assert_eq!(average.rate_per_minute(), 0.0);
        assert_eq!(average.count(), 0);
    }

    #[test]
    fn one_update_per_second_converges_to_sixty_per_minute() {
        let mut average = CumulativeAverage::new();
        for ts in 0..60 {
            average.update(ts);
        }
        assert_eq!(average.rate_per_minute(), 60.0);
        assert_eq!(average.count(), 60);
    }

    #[test]
    fn repeated_identical_timestamps_leave_rate_untouched() {
        let mut average = CumulativeAverage::new();
        average.update(100);
        average.update(100);
        average.update(100);
        assert_eq!(average.rate_per_minute(), 0.0);
        assert_eq!(average.count(), 3);
    }

    #[test]
    fn out_of_order_timestamp_never_regresses_last_seen() {
        let mut average = CumulativeAverage::new();
        average.update(100);
        average.update(160);
        let before = average.rate_per_minute();
        // Older timestamp: counted, but the span is unchanged.
        average.update(40);
        assert!(average.rate_per_minute() >= before);
        assert_eq!(average.count(), 3);
    }

    #[test]
    fn rate_is_never_negative() {
        let mut average = CumulativeAverage::new();
        for ts in [5, 5, 17, 90, 90, 200] {
            average.update(ts);
            assert!(average.rate_per_minute() >= 0.0);
        }
    }
}
