//! Severity levels
//!
//! Declaration order is verbosity order: `None < Error < Warning < Info`.
//! A higher level includes every level below it, so a `Warning` threshold
//! admits warnings and errors while an `Error` threshold admits only errors.

use crate::error::LogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Severity of a log call, also used as the file threshold
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Disabled sentinel. Never attached to a message.
    #[default]
    None,
    Error,
    #[serde(alias = "warn")]
    Warning,
    Info,
}

impl Severity {
    /// All levels in ascending order
    pub const ALL: [Severity; 4] = [
        Severity::None,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
    ];

    /// Lowercase name, as used in config files
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// True when `self` is a threshold that lets `message` through
    #[inline]
    pub fn includes(self, message: Severity) -> bool {
        message != Severity::None && message <= self
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(Self::None),
            "error" => Ok(Self::Error),
            "warning" | "warn" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            _ => Err(LogError::UnknownSeverity {
                name: s.to_string(),
            }),
        }
    }
}
