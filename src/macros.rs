//! Entry-point macros
//!
//! `log!`, `log_warning!` and `log_error!` resolve the calling method with
//! `caller!()` and format the message. They go to the process-wide logger,
//! or to an explicit one with a leading `logger: <expr>,`:
//!
//! ```ignore
//! impl Player {
//!     fn take_damage(&mut self, amount: u32) -> callerlog::Result<()> {
//!         callerlog::log_warning!(self, "took {} damage", amount)?;
//!         callerlog::log!(logger: &self.logger, self, "hp now {}", self.hp)
//!     }
//! }
//! ```
//!
//! Each macro evaluates to `callerlog::Result<()>`; an error means the file
//! sink failed to write.

/// Log at `Info`
#[macro_export]
macro_rules! log {
    (logger: $logger:expr, $component:expr, $($arg:tt)+) => {
        $logger.log($crate::caller!(), $component, &::std::format!($($arg)+))
    };
    ($component:expr, $($arg:tt)+) => {
        $crate::global().log($crate::caller!(), $component, &::std::format!($($arg)+))
    };
}

/// Log at `Warning`
#[macro_export]
macro_rules! log_warning {
    (logger: $logger:expr, $component:expr, $($arg:tt)+) => {
        $logger.log_warning($crate::caller!(), $component, &::std::format!($($arg)+))
    };
    ($component:expr, $($arg:tt)+) => {
        $crate::global().log_warning($crate::caller!(), $component, &::std::format!($($arg)+))
    };
}

/// Log at `Error`
#[macro_export]
macro_rules! log_error {
    (logger: $logger:expr, $component:expr, $($arg:tt)+) => {
        $logger.log_error($crate::caller!(), $component, &::std::format!($($arg)+))
    };
    ($component:expr, $($arg:tt)+) => {
        $crate::global().log_error($crate::caller!(), $component, &::std::format!($($arg)+))
    };
}
