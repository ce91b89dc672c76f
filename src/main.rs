mod config;
mod jobs;
mod monitor;
mod parser;
mod report;
mod section;
mod stats;
mod tail;

use tracing_subscriber::EnvFilter;

use crate::config::{load_config, Config};

fn init_json_logging() {
    if let Err(error) = tracing_log::LogTracer::init() {
        eprintln!(
            "logging bridge initialization failed (continuing with existing logger): {}",
            error
        );
    }

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .json()
        .with_current_span(false)
        .with_span_list(false)
        .finish();

    if let Err(error) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("global logger initialization failed: {}", error);
    }
}

const CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() {
    init_json_logging();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| CONFIG_PATH.to_string());
    let config: Config = match load_config(&config_path) {
        Ok(config) => config,
        Err(error) => {
            log::error!("Configuration error: {}", error);
            return;
        }
    };

    log::info!(
        "trafficwatch_starting site={} log_path={} window_secs={} threshold_per_min={}",
        config.site,
        config.log_path,
        config.window.seconds,
        config.alert.threshold_per_minute
    );

    jobs::run(config).await;
}
