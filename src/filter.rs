//! File admission filter
//!
//! Decides which log calls reach the file sink.

use crate::severity::Severity;

/// Threshold applied to every message before it is written to file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FileFilter {
    /// `Severity::None` = file logging disabled
    pub threshold: Severity,
}

impl FileFilter {
    pub fn new(threshold: Severity) -> Self {
        Self { threshold }
    }

    /// Check if the filter is accepting anything at all
    pub fn is_enabled(&self) -> bool {
        self.threshold != Severity::None
    }

    /// Check if a message at `severity` passes the filter
    pub fn admits(&self, severity: Severity) -> bool {
        self.threshold.includes(severity)
    }
}
