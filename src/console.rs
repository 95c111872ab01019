//! Console output
//!
//! The console itself belongs to the host. This module only defines what the
//! logger needs from it (`ConsoleSink`), when it may be used (`ConsoleGate`),
//! and a default sink that forwards to `tracing`.

use crate::caller::short_type_name;
use crate::constants::{DEFAULT_TRACING_FILTER, VERBOSE_TRACING_FILTER};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::IsTerminal;
use std::sync::Arc;

// =============================================================================
// Component
// =============================================================================

/// Something that issues log calls.
///
/// The name is handed to the console sink as the message source. The default
/// is the short type name, so `impl Component for Player {}` is enough.
pub trait Component {
    fn component_name(&self) -> &str {
        short_type_name(std::any::type_name::<Self>())
    }
}

impl Component for str {
    fn component_name(&self) -> &str {
        self
    }
}

impl Component for String {
    fn component_name(&self) -> &str {
        self.as_str()
    }
}

// =============================================================================
// Sink
// =============================================================================

/// Host console, one entry point per severity so the host keeps its own
/// per-level formatting
pub trait ConsoleSink: Send + Sync {
    fn info(&self, text: &str, source: &str);
    fn warn(&self, text: &str, source: &str);
    fn error(&self, text: &str, source: &str);
}

/// Default sink: emits through `tracing` at the matching level
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingConsole;

impl ConsoleSink for TracingConsole {
    fn info(&self, text: &str, source: &str) {
        tracing::info!(component = source, "{}", text);
    }

    fn warn(&self, text: &str, source: &str) {
        tracing::warn!(component = source, "{}", text);
    }

    fn error(&self, text: &str, source: &str) {
        tracing::error!(component = source, "{}", text);
    }
}

// =============================================================================
// Gate
// =============================================================================

/// Built-in console policies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ConsoleMode {
    /// Always write to the console
    Always,
    /// Never write to the console
    Never,
    /// Only in builds with debug assertions
    #[default]
    DebugBuild,
    /// Only when stderr is attached to a terminal
    Interactive,
}

impl ConsoleMode {
    /// Evaluate the policy now
    pub fn is_enabled(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::DebugBuild => cfg!(debug_assertions),
            Self::Interactive => std::io::stderr().is_terminal(),
        }
    }
}

/// Predicate consulted on every log call to decide if the console sees it
#[derive(Clone)]
pub struct ConsoleGate {
    predicate: Arc<dyn Fn() -> bool + Send + Sync>,
    label: &'static str,
}

impl ConsoleGate {
    /// Gate driven by a host-supplied predicate
    pub fn from_fn(predicate: impl Fn() -> bool + Send + Sync + 'static) -> Self {
        Self {
            predicate: Arc::new(predicate),
            label: "custom",
        }
    }

    pub fn is_open(&self) -> bool {
        (self.predicate)()
    }
}

impl From<ConsoleMode> for ConsoleGate {
    fn from(mode: ConsoleMode) -> Self {
        let label = match mode {
            ConsoleMode::Always => "always",
            ConsoleMode::Never => "never",
            ConsoleMode::DebugBuild => "debug-build",
            ConsoleMode::Interactive => "interactive",
        };
        Self {
            predicate: Arc::new(move || mode.is_enabled()),
            label,
        }
    }
}

impl Default for ConsoleGate {
    fn default() -> Self {
        ConsoleMode::default().into()
    }
}

impl fmt::Debug for ConsoleGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ConsoleGate").field(&self.label).finish()
    }
}

// =============================================================================
// Tracing subscriber
// =============================================================================

/// Install a compact `tracing` subscriber for `TracingConsole` output
///
/// Call early in main() before any logging occurs.
/// Set `verbose` to true to also see the facility's own debug output.
/// Does nothing if a global subscriber is already set.
pub fn init_tracing(verbose: bool) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = if verbose {
        VERBOSE_TRACING_FILTER
    } else {
        DEFAULT_TRACING_FILTER
    };

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_file(false)
                .compact(),
        )
        .with(tracing_subscriber::EnvFilter::new(level))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};

    struct Player;
    impl Component for Player {}

    struct Named(&'static str);
    impl Component for Named {
        fn component_name(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn test_default_component_name_is_short_type_name() {
        assert_eq!(Player.component_name(), "Player");
    }

    #[test]
    fn test_component_name_override() {
        assert_eq!(Named("hud").component_name(), "hud");
        assert_eq!("net".component_name(), "net");
        assert_eq!(String::from("audio").component_name(), "audio");
    }

    #[test]
    fn test_fixed_modes() {
        assert!(ConsoleGate::from(ConsoleMode::Always).is_open());
        assert!(!ConsoleGate::from(ConsoleMode::Never).is_open());
        assert_eq!(
            ConsoleGate::from(ConsoleMode::DebugBuild).is_open(),
            cfg!(debug_assertions)
        );
    }

    #[test]
    fn test_interactive_follows_stderr_terminal() {
        let expected = std::io::stderr().is_terminal();
        assert_eq!(ConsoleMode::Interactive.is_enabled(), expected);
        assert_eq!(ConsoleGate::from(ConsoleMode::Interactive).is_open(), expected);
    }

    #[test]
    fn test_predicate_is_evaluated_per_call() {
        let flag = Arc::new(AtomicBool::new(false));
        let gate = {
            let flag = flag.clone();
            ConsoleGate::from_fn(move || flag.load(Ordering::SeqCst))
        };

        assert!(!gate.is_open());
        flag.store(true, Ordering::SeqCst);
        assert!(gate.is_open());
    }

    #[test]
    fn test_mode_serde_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: ConsoleMode,
        }
        let w: Wrapper = toml::from_str("mode = \"debug-build\"").unwrap();
        assert_eq!(w.mode, ConsoleMode::DebugBuild);
        let w: Wrapper = toml::from_str("mode = \"interactive\"").unwrap();
        assert_eq!(w.mode, ConsoleMode::Interactive);
    }

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing(false);
        init_tracing(true);
        TracingConsole.info("Foo.bar: after init", "Foo");
    }

    #[test]
    fn test_gate_debug_shows_label() {
        assert_eq!(
            format!("{:?}", ConsoleGate::from(ConsoleMode::Never)),
            "ConsoleGate(\"never\")"
        );
    }
}
