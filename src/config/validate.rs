use thiserror::Error;

use super::schema::Config;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
    #[error("invalid config: {0}")]
    Validation(String),
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.site.trim().is_empty() {
            return Err(ConfigError::Validation(
                "site must not be empty".to_string(),
            ));
        }
        if self.log_path.trim().is_empty() {
            return Err(ConfigError::Validation(
                "log_path must not be empty".to_string(),
            ));
        }
        if self.poll_interval_secs == 0 {
            return Err(ConfigError::Validation(
                "poll_interval_secs must be greater than 0".to_string(),
            ));
        }
        if !self.alert.threshold_per_minute.is_finite() || self.alert.threshold_per_minute <= 0.0 {
            return Err(ConfigError::Validation(
                "alert.threshold_per_minute must be a positive number".to_string(),
            ));
        }
        if self.window.seconds == 0 {
            return Err(ConfigError::Validation(
                "window.seconds must be greater than 0".to_string(),
            ));
        }
        if self.report.top_sections == 0 {
            return Err(ConfigError::Validation(
                "report.top_sections must be greater than 0".to_string(),
            ));
        }
        if self.report.interval_secs == 0 {
            return Err(ConfigError::Validation(
                "report.interval_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
