//! callerlog - leveled logging that names its caller
//!
//! Log calls are prefixed with the calling `Type.method`, sent to the host
//! console when a gate predicate allows it, and optionally duplicated to an
//! append-only file filtered by severity.
//!
//! ```ignore
//! use callerlog::{log, log_error, Component, Severity};
//!
//! struct Player;
//! impl Component for Player {}
//!
//! impl Player {
//!     fn spawn(&self) -> callerlog::Result<()> {
//!         log!(self, "spawned")?;           // "Player.spawn: spawned"
//!         log_error!(self, "no spawn point")
//!     }
//! }
//!
//! callerlog::enable_file_logging("logs/app.log", Severity::Warning)?;
//! ```

mod macros;

pub mod caller;
pub mod config;
pub mod console;
pub mod constants;
pub mod error;
pub mod file;
pub mod filter;
pub mod logger;
pub mod severity;

pub use caller::Caller;
pub use config::{FileLogConfig, LoggerConfig};
pub use console::{init_tracing, Component, ConsoleGate, ConsoleMode, ConsoleSink, TracingConsole};
pub use error::{LogError, Result};
pub use file::{format_timestamp, FileSink};
pub use filter::FileFilter;
pub use logger::{enable_file_logging, global, install_global, Logger};
pub use severity::Severity;
