pub(super) fn default_poll_interval_secs() -> u64 {
    2
}

pub(super) fn default_alert_threshold() -> f64 {
    10.0
}

pub(super) fn default_window_seconds() -> u64 {
    120
}

pub(super) fn default_report_top_sections() -> usize {
    5
}

pub(super) fn default_report_interval_secs() -> u64 {
    10
}
