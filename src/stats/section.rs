use super::SlidingAverage;

/// Traffic bookkeeping for one URL section: lifetime totals plus a
/// trailing-window average owned by the aggregate.
#[derive(Debug)]
pub struct SectionAggregate {
    name: String,
    total_accesses: u64,
    first_access: Option<i64>,
    last_access: Option<i64>,
    cumulative_rate: Option<f64>,
    sliding: SlidingAverage,
}

impl SectionAggregate {
    pub fn new(name: impl Into<String>, sliding: SlidingAverage) -> Self {
        Self {
            name: name.into(),
            total_accesses: 0,
            first_access: None,
            last_access: None,
            cumulative_rate: None,
            sliding,
        }
    }

    /// Folds one access into the aggregate.
    ///
    /// The cumulative rate is computed from the access count *before* this
    /// one, so it lags `total_accesses` by one and stays `None` until the
    /// second access arrives.
    pub fn record(&mut self, ts: i64) {
        match self.first_access {
            None => self.first_access = Some(ts),
            Some(first) => {
                self.last_access = Some(ts);
                let span = ts - first;
                if span != 0 {
                    self.cumulative_rate = Some(self.total_accesses as f64 * 60.0 / span as f64);
                }
            }
        }
        self.total_accesses += 1;
        self.sliding.update(ts);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn total_accesses(&self) -> u64 {
        self.total_accesses
    }

    pub fn first_access(&self) -> Option<i64> {
        self.first_access
    }

    pub fn last_access(&self) -> Option<i64> {
        self.last_access
    }

    /// `None` until at least two accesses span a non-zero interval.
    pub fn cumulative_rate(&self) -> Option<f64> {
        self.cumulative_rate
    }

    pub fn sliding_rate(&self) -> f64 {
        self.sliding.rate_per_minute()
    }
}
