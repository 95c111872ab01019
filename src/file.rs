//! Append-only file sink.
//!
//! Writes are synchronous and flushed per line so the tail of the file is
//! current even if the process dies right after a log call:
//! - parent directories and the file are created on first enable
//! - the file is opened in append mode and never truncated
//! - every enable writes a session marker line

use crate::constants::{LINE_ENDING, SESSION_MARKER, TIMESTAMP_FORMAT, TIMESTAMP_SEPARATOR};
use crate::error::{LogError, Result};
use crate::filter::FileFilter;
use crate::severity::Severity;
use chrono::{DateTime, Utc};
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Format a timestamp as `yyyy/MM/dd HH:mm:ss`
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Current UTC timestamp in file format
#[inline]
fn now() -> String {
    format_timestamp(Utc::now())
}

/// Open log file plus the threshold it was enabled with
#[derive(Debug)]
pub struct FileSink {
    path: PathBuf,
    file: File,
    filter: FileFilter,
}

impl FileSink {
    /// Create (if needed) and open `path` for appending, then write the
    /// session marker.
    ///
    /// `level` must not be `Severity::None`, which is the disabled sentinel.
    pub fn open(path: impl AsRef<Path>, level: Severity) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if level == Severity::None {
            return Err(LogError::InvalidSeverity { severity: level });
        }

        if !path.exists() {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| LogError::CreateDir {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        let file = open_append(&path).map_err(|e| LogError::Open {
            path: path.clone(),
            source: e,
        })?;

        let mut sink = Self {
            path,
            file,
            filter: FileFilter::new(level),
        };
        sink.write_line(SESSION_MARKER)?;
        Ok(sink)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn level(&self) -> Severity {
        self.filter.threshold
    }

    /// Check if a message at `severity` should be written
    pub fn admits(&self, severity: Severity) -> bool {
        self.filter.admits(severity)
    }

    /// Write `<timestamp>: <line>` and flush
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        let record = format_record(&now(), line);
        self.file
            .write_all(record.as_bytes())
            .and_then(|_| self.file.flush())
            .map_err(|e| LogError::Write {
                path: self.path.clone(),
                source: e,
            })
    }

    pub fn flush(&mut self) -> Result<()> {
        self.file.flush().map_err(|e| LogError::Write {
            path: self.path.clone(),
            source: e,
        })
    }
}

fn format_record(timestamp: &str, line: &str) -> String {
    format!("{}{}{}{}", timestamp, TIMESTAMP_SEPARATOR, line, LINE_ENDING)
}

fn open_append(path: &Path) -> std::io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}
