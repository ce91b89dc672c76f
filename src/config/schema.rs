use serde::Deserialize;

use super::defaults::*;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Exact host name this monitor accepts records for.
    pub site: String,
    pub log_path: String,
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,
    #[serde(default)]
    pub alert: Alert,
    #[serde(default)]
    pub window: Window,
    #[serde(default)]
    pub report: Report,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Alert {
    #[serde(default = "default_alert_threshold")]
    pub threshold_per_minute: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Window {
    #[serde(default = "default_window_seconds")]
    pub seconds: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Report {
    #[serde(default = "default_report_top_sections")]
    pub top_sections: usize,
    #[serde(default = "default_report_interval_secs")]
    pub interval_secs: u64,
}

impl Default for Alert {
    fn default() -> Self {
        Self {
            threshold_per_minute: default_alert_threshold(),
        }
    }
}

impl Default for Window {
    fn default() -> Self {
        Self {
            seconds: default_window_seconds(),
        }
    }
}

impl Default for Report {
    fn default() -> Self {
        Self {
            top_sections: default_report_top_sections(),
            interval_secs: default_report_interval_secs(),
        }
    }
}
