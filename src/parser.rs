use std::sync::LazyLock;

use chrono::DateTime;
use regex::Regex;
use thiserror::Error;

use crate::monitor::LogRecord;

// NCSA Common Log Format:
// remote ident user [dd/Mon/yyyy:HH:MM:SS zzzz] "METHOD url PROTO" status size
static LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^(\S+) (\S+) (\S+) \[([^\]]+)\] "(\S+) (\S+) ([^"]*)" (\d{3}) (\S+)"#)
        .expect("log line pattern compiles")
});

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("line does not match common log format: {0}")]
    Format(String),
    #[error("bad timestamp {value}: {source}")]
    Timestamp {
        value: String,
        source: chrono::ParseError,
    },
}

/// Parses one common-log-format line into the record the monitor consumes.
///
/// The record host is the request URL's own host when the URL is absolute;
/// for a relative URL it falls back to the remote-host field, which means
/// such records are normally filtered out by the host match.
pub fn parse_line(line: &str) -> Result<LogRecord, ParseError> {
    let captures = LINE_RE
        .captures(line)
        .ok_or_else(|| ParseError::Format(line.to_string()))?;

    let remote = &captures[1];
    let stamp = &captures[4];
    let url = &captures[6];

    let parsed = DateTime::parse_from_str(stamp, "%d/%b/%Y:%H:%M:%S %z").map_err(|source| {
        ParseError::Timestamp {
            value: stamp.to_string(),
            source,
        }
    })?;

    let host = url_host(url).unwrap_or(remote);
    Ok(LogRecord {
        host: host.to_string(),
        timestamp: parsed.timestamp(),
        request_url: url.to_string(),
    })
}

/// Host part of an absolute URL, without userinfo or port. `None` for
/// relative URLs.
fn url_host(url: &str) -> Option<&str> {
    let (_, rest) = url.split_once("://")?;
    let end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let authority = &rest[..end];
    let host = match authority.rsplit_once('@') {
        Some((_, host)) => host,
        None => authority,
    };
    let host = match host.split_once(':') {
        Some((name, _port)) => name,
        None => host,
    };
    if host.is_empty() {
        None
    } else {
        Some(host)
    }
}
