//! Log dispatch
//!
//! `Logger` owns both sinks. Each call builds `Type.method: message` once, then
//! offers it to the console (if the gate is open) and to the file (if enabled
//! and the severity passes). The two sinks never affect each other: a file
//! that failed to open leaves the console working, and a closed console gate
//! does not stop file output.

use crate::caller::Caller;
use crate::console::{Component, ConsoleGate, ConsoleMode, ConsoleSink, TracingConsole};
use crate::error::{LogError, Result};
use crate::file::FileSink;
use crate::severity::Severity;
use parking_lot::Mutex;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use tracing::{debug, warn};

/// Logging context: console sink, console gate and optional file sink.
///
/// Most programs use the process-wide instance from [`global`]. Separate
/// instances are useful in tests or for independent subsystems.
pub struct Logger {
    console: Box<dyn ConsoleSink>,
    gate: ConsoleGate,
    /// `None` = file logging disabled
    file: Mutex<Option<FileSink>>,
}

impl Logger {
    /// Logger with the `tracing` console, gated on debug builds, file disabled
    pub fn new() -> Self {
        Self {
            console: Box::new(TracingConsole),
            gate: ConsoleGate::default(),
            file: Mutex::new(None),
        }
    }

    // === Configuration ===

    /// Replace the console sink
    pub fn with_console(mut self, console: impl ConsoleSink + 'static) -> Self {
        self.console = Box::new(console);
        self
    }

    /// Replace the console gate
    pub fn with_console_gate(mut self, gate: ConsoleGate) -> Self {
        self.gate = gate;
        self
    }

    /// Gate the console with one of the built-in policies
    pub fn with_console_mode(self, mode: ConsoleMode) -> Self {
        self.with_console_gate(mode.into())
    }

    /// Gate the console with a host predicate, evaluated on every call
    pub fn with_console_predicate(
        self,
        predicate: impl Fn() -> bool + Send + Sync + 'static,
    ) -> Self {
        self.with_console_gate(ConsoleGate::from_fn(predicate))
    }

    /// Start duplicating log lines at or above `level` to the file at `path`.
    ///
    /// Missing parent directories and the file are created; an existing file
    /// is appended to. A `Logging begins.` marker is written immediately.
    /// Fails with `AlreadyEnabled` if this logger already has a file sink,
    /// and leaves the logger unchanged on any error.
    pub fn enable_file_logging(&self, path: impl AsRef<Path>, level: Severity) -> Result<()> {
        let path = path.as_ref();
        let mut file = self.file.lock();

        if let Some(current) = file.as_ref() {
            warn!(
                "File logging already enabled at {}, ignoring {}",
                current.path().display(),
                path.display()
            );
            return Err(LogError::AlreadyEnabled {
                path: current.path().to_path_buf(),
            });
        }

        let sink = FileSink::open(path, level)?;
        debug!("File logging enabled: {} ({})", path.display(), level);
        *file = Some(sink);
        Ok(())
    }

    // === State ===

    pub fn is_file_logging_enabled(&self) -> bool {
        self.file.lock().is_some()
    }

    /// Configured file threshold, `Severity::None` when disabled
    pub fn file_level(&self) -> Severity {
        self.file
            .lock()
            .as_ref()
            .map(FileSink::level)
            .unwrap_or(Severity::None)
    }

    pub fn file_path(&self) -> Option<PathBuf> {
        self.file.lock().as_ref().map(|s| s.path().to_path_buf())
    }

    /// Flush the file sink (no-op when disabled)
    pub fn flush(&self) -> Result<()> {
        match self.file.lock().as_mut() {
            Some(sink) => sink.flush(),
            None => Ok(()),
        }
    }

    // === Dispatch ===

    /// Log at `Info`
    pub fn log<C: Component + ?Sized>(
        &self,
        caller: Caller,
        component: &C,
        message: &str,
    ) -> Result<()> {
        self.log_at(Severity::Info, caller, component, message)
    }

    /// Log at `Warning`
    pub fn log_warning<C: Component + ?Sized>(
        &self,
        caller: Caller,
        component: &C,
        message: &str,
    ) -> Result<()> {
        self.log_at(Severity::Warning, caller, component, message)
    }

    /// Log at `Error`
    pub fn log_error<C: Component + ?Sized>(
        &self,
        caller: Caller,
        component: &C,
        message: &str,
    ) -> Result<()> {
        self.log_at(Severity::Error, caller, component, message)
    }

    /// Shared path for the three entry points.
    ///
    /// Console output happens before the file write, so a file error never
    /// suppresses it. The file error itself is returned to the caller.
    pub fn log_at<C: Component + ?Sized>(
        &self,
        severity: Severity,
        caller: Caller,
        component: &C,
        message: &str,
    ) -> Result<()> {
        let line = format!("{}{}", caller.prefix(), message);

        if self.gate.is_open() {
            let source = component.component_name();
            match severity {
                Severity::Info => self.console.info(&line, source),
                Severity::Warning => self.console.warn(&line, source),
                Severity::Error => self.console.error(&line, source),
                Severity::None => {}
            }
        }

        let mut file = self.file.lock();
        match file.as_mut() {
            Some(sink) if sink.admits(severity) => sink.write_line(&line),
            _ => Ok(()),
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("gate", &self.gate)
            .field("file", &self.file_path())
            .field("file_level", &self.file_level())
            .finish()
    }
}

// =============================================================================
// Process-wide instance
// =============================================================================

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// Process-wide logger used by the `log!` family of macros.
///
/// Created with [`Logger::new`] on first use unless [`install_global`] ran first.
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(Logger::new)
}

/// Install a configured logger as the process-wide instance.
///
/// Only the first install (or first use of [`global`]) wins; a later call
/// hands the logger back.
pub fn install_global(logger: Logger) -> std::result::Result<(), Logger> {
    GLOBAL.set(logger)
}

/// [`Logger::enable_file_logging`] on the process-wide logger
pub fn enable_file_logging(path: impl AsRef<Path>, level: Severity) -> Result<()> {
    global().enable_file_logging(path, level)
}
