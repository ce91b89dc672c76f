use std::time::Instant;

use tokio::time::{sleep, Duration};

use crate::config::Config;
use crate::monitor::{AlarmTransition, IngestOutcome, SiteMonitor};
use crate::parser::parse_line;
use crate::report;
use crate::tail::LogTailReader;

/// Single task driving the whole pipeline: drain the tail reader, parse,
/// ingest, log alarm edges, and emit the periodic section report. Funnelling
/// everything through one loop is what serializes access to the monitor.
pub(super) async fn run_poll_loop(config: Config) {
    let mut monitor = SiteMonitor::new(
        &config.site,
        config.window.seconds,
        config.alert.threshold_per_minute,
    );
    let mut reader = LogTailReader::new(&config.log_path);
    let mut last_report = Instant::now();

    loop {
        match reader.new_lines() {
            Ok(lines) => {
                for line in &lines {
                    ingest_line(&mut monitor, line);
                }
            }
            Err(error) => {
                log::error!("log_poll_failed error={}", error);
            }
        }

        if last_report.elapsed().as_secs() >= config.report.interval_secs {
            last_report = Instant::now();
            log::info!("{}", report::site_summary(&monitor));
            for line in report::top_sections(&monitor, config.report.top_sections) {
                log::info!("{}", line);
            }
        }

        sleep(Duration::from_secs(config.poll_interval_secs)).await;
    }
}

fn ingest_line(monitor: &mut SiteMonitor, line: &str) {
    let record = match parse_line(line) {
        Ok(record) => record,
        Err(error) => {
            log::warn!("line_skipped error={}", error);
            return;
        }
    };

    match monitor.ingest(&record) {
        Ok(IngestOutcome::Recorded {
            alarm: Some(AlarmTransition::Raised),
        }) => {
            log::warn!(
                "alarm_raised rate_per_min={:.2} threshold_per_min={:.2} total_requests={}",
                monitor.site_sliding_rate(),
                monitor.threshold_per_minute(),
                monitor.total_requests()
            );
        }
        Ok(IngestOutcome::Recorded {
            alarm: Some(AlarmTransition::Cleared),
        }) => {
            log::info!(
                "alarm_cleared rate_per_min={:.2} threshold_per_min={:.2} total_requests={}",
                monitor.site_sliding_rate(),
                monitor.threshold_per_minute(),
                monitor.total_requests()
            );
        }
        Ok(_) => {}
        Err(error) => {
            log::warn!("record_skipped error={}", error);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ingest_line;
    use crate::monitor::SiteMonitor;

    #[test]
    fn skips_bad_lines_without_stopping() {
        let mut monitor = SiteMonitor::new("my.site.com", 120, 10.0);

        ingest_line(&mut monitor, "not a log line at all");
        ingest_line(
            &mut monitor,
            r#"127.0.0.1 - frank [10/Oct/2000:13:55:36 -0700] "POST http://my.site.com/pages/create HTTP/1.0" 200 2326"#,
        );
        // Sectionless URL: parse succeeds, classification does not.
        ingest_line(
            &mut monitor,
            r#"127.0.0.1 - frank [10/Oct/2000:13:55:37 -0700] "GET http://my.site.com HTTP/1.0" 200 2326"#,
        );
        ingest_line(
            &mut monitor,
            r#"127.0.0.1 - frank [10/Oct/2000:13:55:38 -0700] "GET http://my.site.com/pages/view HTTP/1.0" 200 2326"#,
        );

        assert_eq!(monitor.total_requests(), 2);
        assert_eq!(monitor.unique_sections(), 1);
    }

    #[test]
    fn foreign_host_lines_are_filtered() {
        let mut monitor = SiteMonitor::new("my.site.com", 120, 10.0);
        ingest_line(
            &mut monitor,
            r#"127.0.0.1 - frank [10/Oct/2000:13:55:36 -0700] "GET http://other.site.com/pages/view HTTP/1.0" 200 2326"#,
        );
        assert_eq!(monitor.total_requests(), 0);
    }
}
