//! Logger configuration
//!
//! Optional TOML description of a `Logger`:
//!
//! ```toml
//! console = "debug-build"
//!
//! [file]
//! path = "logs/app.log"
//! level = "warning"
//! ```

use crate::console::ConsoleMode;
use crate::constants::DEFAULT_LOG_PATH;
use crate::error::{LogError, Result};
use crate::logger::Logger;
use crate::severity::Severity;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Logger configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggerConfig {
    /// When log lines reach the console
    pub console: ConsoleMode,
    /// File sink; absent = file logging disabled
    pub file: Option<FileLogConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLogConfig {
    /// Log file, relative paths resolve against the working directory
    pub path: PathBuf,
    /// Threshold: "error", "warning" or "info"
    pub level: Severity,
}

impl Default for FileLogConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_LOG_PATH),
            level: Severity::Warning,
        }
    }
}

impl LoggerConfig {
    /// Parse config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| LogError::ConfigParse {
            path: PathBuf::from("<inline>"),
            reason: e.to_string(),
        })
    }

    /// Load config from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| LogError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| LogError::ConfigParse {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Serialize config as TOML
    ///
    /// Fails when the file path is not valid UTF-8.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| LogError::ConfigSerialize {
            reason: e.to_string(),
        })
    }

    /// Build a logger with the `tracing` console, enabling the file sink
    /// if one is configured
    pub fn build(&self) -> Result<Logger> {
        let logger = Logger::new().with_console_mode(self.console);
        if let Some(file) = &self.file {
            logger.enable_file_logging(&file.path, file.level)?;
        }
        Ok(logger)
    }
}

// ============================================================================
// Tests
// ============================================================================
