//! Stderr logging for the one-shot pipeline.
//!
//! Verbosity comes from the `--debug`/`--quiet` flags; `RUST_LOG` overrides
//! the flag-derived default when set.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Verbosity selection carried from the CLI to the subscriber install.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogConfig {
    /// Output debug information.
    pub debug: bool,
    /// Only output errors.
    pub quiet: bool,
}

impl LogConfig {
    /// Default filter directive. `--debug` wins over `--quiet`.
    fn default_filter(&self) -> &'static str {
        if self.debug {
            "debug"
        } else if self.quiet {
            "error"
        } else {
            "info"
        }
    }
}

/// Install the tracing subscriber. Call once at process start.
///
/// Output: stderr, compact format with timestamps.
pub fn init(config: &LogConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_filter()));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
