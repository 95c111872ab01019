//! Centralized error types for the logging facility
//!
//! All facility errors are represented by the `LogError` enum.
//! Use `Result<T>` as shorthand for `std::result::Result<T, LogError>`.

use crate::severity::Severity;
use std::fmt;
use std::path::PathBuf;

/// All logging facility errors
#[derive(Debug)]
pub enum LogError {
    // === File sink ===
    /// Failed to create the parent directories of the log file
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to create or open the log file for appending
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Failed to write or flush a line to the log file
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    /// File logging is already enabled on this logger
    AlreadyEnabled { path: PathBuf },
    /// Severity cannot be used as a file threshold
    InvalidSeverity { severity: Severity },

    // === Config ===
    /// Failed to read a config file
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Config file contents are not valid
    ConfigParse { path: PathBuf, reason: String },
    /// Config cannot be written as TOML
    ConfigSerialize { reason: String },
    /// Unknown severity name
    UnknownSeverity { name: String },
}

impl std::error::Error for LogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::CreateDir { source, .. }
            | Self::Open { source, .. }
            | Self::Write { source, .. }
            | Self::ConfigRead { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for LogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CreateDir { path, .. } => {
                write!(f, "Cannot create log directory: {}", path.display())
            }
            Self::Open { path, .. } => write!(f, "Cannot open log file: {}", path.display()),
            Self::Write { path, .. } => write!(f, "Cannot write log file: {}", path.display()),
            Self::AlreadyEnabled { path } => write!(
                f,
                "File logging already enabled (file: {})",
                path.display()
            ),
            Self::InvalidSeverity { severity } => {
                write!(f, "Cannot enable file logging at level {}", severity)
            }
            Self::ConfigRead { path, .. } => write!(f, "Cannot read config: {}", path.display()),
            Self::ConfigParse { path, reason } => {
                write!(f, "Invalid config {}: {}", path.display(), reason)
            }
            Self::ConfigSerialize { reason } => write!(f, "Cannot serialize config: {}", reason),
            Self::UnknownSeverity { name } => write!(f, "Unknown severity '{}'", name),
        }
    }
}

/// Alias for Result with LogError
pub type Result<T> = std::result::Result<T, LogError>;
