use std::collections::HashMap;

use crate::section::classify_section;
use crate::stats::{CumulativeAverage, SectionAggregate, SlidingAverage, StatsError};

mod alarm;

pub use alarm::AlarmTransition;

/// One parsed access-log entry, produced by the parser and consumed here.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub host: String,
    pub timestamp: i64,
    pub request_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    /// The record's host did not match the monitored site. Not an error.
    Filtered,
    Recorded { alarm: Option<AlarmTransition> },
}

/// All traffic state for one monitored site: a lifetime average, a site-wide
/// sliding window, and per-section aggregates keyed by section name.
///
/// Single-threaded by design. Every `ingest` fully updates all aggregates
/// before returning; callers mixing ingestion with reads from elsewhere must
/// serialize access themselves.
pub struct SiteMonitor {
    site_name: String,
    window_secs: u64,
    overall: CumulativeAverage,
    site_window: SlidingAverage,
    sections: HashMap<String, SectionAggregate>,
    // First-seen order of section names; the ranking tie-break.
    section_order: Vec<String>,
    total_requests: u64,
    threshold_per_minute: f64,
    alarm_active: bool,
}

impl SiteMonitor {
    pub fn new(site_name: impl Into<String>, window_secs: u64, threshold_per_minute: f64) -> Self {
        Self {
            site_name: site_name.into(),
            window_secs,
            overall: CumulativeAverage::new(),
            site_window: SlidingAverage::new(window_secs),
            sections: HashMap::new(),
            section_order: Vec::new(),
            total_requests: 0,
            threshold_per_minute,
            alarm_active: false,
        }
    }

    /// Feeds one record through the pipeline: host filter, section
    /// resolution, all averages, and the alarm edge check.
    ///
    /// A record for a foreign host is discarded without touching any state.
    /// A URL the classifier cannot section is the one per-record error;
    /// callers log it and move on to the next record.
    pub fn ingest(&mut self, record: &LogRecord) -> Result<IngestOutcome, StatsError> {
        if record.host != self.site_name {
            log::debug!(
                "host_filtered host={} site={}",
                record.host,
                self.site_name
            );
            return Ok(IngestOutcome::Filtered);
        }

        let section_name = classify_section(&record.request_url)?;
        if !self.sections.contains_key(&section_name) {
            log::info!("section_first_seen section={}", section_name);
            let aggregate =
                SectionAggregate::new(section_name.clone(), SlidingAverage::new(self.window_secs));
            self.sections.insert(section_name.clone(), aggregate);
            self.section_order.push(section_name.clone());
        }

        let ts = record.timestamp;
        self.site_window.update(ts);
        self.overall.update(ts);
        if let Some(section) = self.sections.get_mut(&section_name) {
            section.record(ts);
        }
        self.total_requests += 1;

        let alarm = alarm::transition(
            self.site_window.rate_per_minute(),
            self.threshold_per_minute,
            &mut self.alarm_active,
        );
        Ok(IngestOutcome::Recorded { alarm })
    }

    /// Sections ordered by descending total accesses; ties keep first-seen
    /// order. Computed on demand from the single ownership store.
    pub fn ranked_sections(&self) -> Vec<&SectionAggregate> {
        let mut ranked: Vec<&SectionAggregate> = self
            .section_order
            .iter()
            .filter_map(|name| self.sections.get(name))
            .collect();
        ranked.sort_by(|a, b| b.total_accesses().cmp(&a.total_accesses()));
        ranked
    }

    /// Cumulative requests-per-minute for one section by name.
    ///
    /// Distinguishes a section never seen from one seen only once.
    #[allow(dead_code)]
    pub fn access_rate(&self, section_name: &str) -> Result<f64, StatsError> {
        let section = self
            .sections
            .get(section_name)
            .ok_or_else(|| StatsError::SectionNotFound(section_name.to_string()))?;
        section
            .cumulative_rate()
            .ok_or_else(|| StatsError::InsufficientData(section_name.to_string()))
    }

    pub fn site_name(&self) -> &str {
        &self.site_name
    }

    pub fn total_requests(&self) -> u64 {
        self.total_requests
    }

    pub fn unique_sections(&self) -> usize {
        self.sections.len()
    }

    pub fn site_sliding_rate(&self) -> f64 {
        self.site_window.rate_per_minute()
    }

    pub fn site_cumulative_rate(&self) -> f64 {
        self.overall.rate_per_minute()
    }

    pub fn threshold_per_minute(&self) -> f64 {
        self.threshold_per_minute
    }

    pub fn alarm_active(&self) -> bool {
        self.alarm_active
    }
}
