use std::fs::{self, File};
use std::io::{Read, Seek, SeekFrom};
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TailError {
    #[error("failed to stat log file {path}: {source}")]
    Stat {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to read log file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
}

/// Incremental reader over a growing log file.
///
/// Remembers how many bytes were consumed so far and returns only the
/// complete lines appended since; a trailing partial line is left for the
/// next poll. Truncation resets the offset to zero and rereads from the
/// start.
#[derive(Debug)]
pub struct LogTailReader {
    path: PathBuf,
    consumed: u64,
}

impl LogTailReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            consumed: 0,
        }
    }

    pub fn new_lines(&mut self) -> Result<Vec<String>, TailError> {
        let metadata = fs::metadata(&self.path).map_err(|source| TailError::Stat {
            path: self.path.display().to_string(),
            source,
        })?;

        let size = metadata.len();
        if size < self.consumed {
            log::warn!(
                "log_truncated path={} previous_size={} current_size={}",
                self.path.display(),
                self.consumed,
                size
            );
            self.consumed = 0;
        }
        if size == self.consumed {
            return Ok(Vec::new());
        }

        let mut file = File::open(&self.path).map_err(|source| TailError::Read {
            path: self.path.display().to_string(),
            source,
        })?;
        file.seek(SeekFrom::Start(self.consumed))
            .map_err(|source| TailError::Read {
                path: self.path.display().to_string(),
                source,
            })?;

        let mut appended = String::new();
        file.read_to_string(&mut appended)
            .map_err(|source| TailError::Read {
                path: self.path.display().to_string(),
                source,
            })?;

        // Only whole lines count as consumed.
        let complete = match appended.rfind('\n') {
            Some(newline) => newline + 1,
            None => 0,
        };
        self.consumed += complete as u64;

        Ok(appended[..complete]
            .lines()
            .map(str::to_string)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use std::fs::OpenOptions;
    use std::io::Write;
    use std::path::Path;

    use super::LogTailReader;

    fn append(path: &Path, content: &str) {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .expect("open log file");
        file.write_all(content.as_bytes()).expect("append to log");
    }

    #[test]
    fn returns_appended_lines_once() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("access.log");
        append(&path, "one\ntwo\n");

        let mut reader = LogTailReader::new(&path);
        assert_eq!(reader.new_lines().expect("first poll"), vec!["one", "two"]);
        assert!(reader.new_lines().expect("second poll").is_empty());

        append(&path, "three\n");
        assert_eq!(reader.new_lines().expect("third poll"), vec!["three"]);
    }

    #[test]
    fn partial_line_waits_for_its_newline() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("access.log");
        append(&path, "complete\nhalf");

        let mut reader = LogTailReader::new(&path);
        assert_eq!(reader.new_lines().expect("poll"), vec!["complete"]);

        append(&path, " now done\n");
        assert_eq!(reader.new_lines().expect("poll"), vec!["half now done"]);
    }

    #[test]
    fn truncation_resets_to_the_start() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("access.log");
        append(&path, "old line one\nold line two\n");

        let mut reader = LogTailReader::new(&path);
        reader.new_lines().expect("drain existing content");

        std::fs::write(&path, "fresh\n").expect("truncate and rewrite");
        assert_eq!(reader.new_lines().expect("poll"), vec!["fresh"]);
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let mut reader = LogTailReader::new(dir.path().join("missing.log"));
        assert!(reader.new_lines().is_err());
    }
}
