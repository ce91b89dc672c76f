use chrono::DateTime;

use crate::monitor::SiteMonitor;
use crate::stats::SectionAggregate;

/// One structured line per section, ready for the job to log.
pub fn section_line(section: &SectionAggregate) -> String {
    let mut line = format!(
        "section={} total_accesses={}",
        section.name(),
        section.total_accesses()
    );
    match section.cumulative_rate() {
        Some(rate) => line.push_str(&format!(" rate_per_min={:.2}", rate)),
        None => line.push_str(" rate_per_min=insufficient_data"),
    }
    line.push_str(&format!(" window_rate_per_min={:.2}", section.sliding_rate()));
    if let Some(first) = section.first_access() {
        line.push_str(&format!(" first_access={}", format_ts(first)));
    }
    if let Some(last) = section.last_access() {
        line.push_str(&format!(" last_access={}", format_ts(last)));
    }
    line
}

pub fn site_summary(monitor: &SiteMonitor) -> String {
    format!(
        "site={} total_requests={} unique_sections={} rate_per_min={:.2} window_rate_per_min={:.2} alarm_active={}",
        monitor.site_name(),
        monitor.total_requests(),
        monitor.unique_sections(),
        monitor.site_cumulative_rate(),
        monitor.site_sliding_rate(),
        monitor.alarm_active()
    )
}

pub fn top_sections(monitor: &SiteMonitor, limit: usize) -> Vec<String> {
    monitor
        .ranked_sections()
        .into_iter()
        .take(limit)
        .map(section_line)
        .collect()
}

fn format_ts(ts: i64) -> String {
    match DateTime::from_timestamp(ts, 0) {
        Some(datetime) => datetime.to_rfc3339(),
        None => ts.to_string(),
    }
}
