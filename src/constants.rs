//! Facility-wide constants
//!
//! Centralized constants to keep the on-disk format in one place.

// =============================================================================
// File format
// =============================================================================

/// `chrono` format string for line timestamps (`yyyy/MM/dd HH:mm:ss`, UTC)
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Written once each time file logging is enabled
pub const SESSION_MARKER: &str = "Logging begins.";

/// Separator between timestamp and the rest of a file line
pub const TIMESTAMP_SEPARATOR: &str = ": ";

/// Line terminator for the log file
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

// =============================================================================
// Defaults
// =============================================================================

/// Log file path used when a config enables the file sink without a path
pub const DEFAULT_LOG_PATH: &str = "logs/app.log";

/// Filter directive used by `init_tracing` when not verbose
pub const DEFAULT_TRACING_FILTER: &str = "info";

/// Filter directive used by `init_tracing` when verbose
pub const VERBOSE_TRACING_FILTER: &str = "debug";
