//! Tracing subscriber setup for the preview binary.
//!
//! Filter priority, highest first: `SITESEARCH_LOG`, `RUST_LOG`, the `-v`/`-q` flags, and
//! finally `warn`. Logs go to stderr so rendered markup on stdout stays clean.

use tracing::Level;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Environment variable holding filter directives for this crate.
pub const LOG_ENV: &str = "SITESEARCH_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Verbosity chosen on the command line.
pub enum Verbosity {
    /// `-q`: errors only.
    Quiet,
    /// Warnings and above.
    Normal,
    /// `-v`: debug output.
    Verbose,
}

impl Verbosity {
    #[must_use]
    /// Verbose wins when both flags are given.
    pub const fn from_flags(verbose: bool, quiet: bool) -> Self {
        if verbose {
            Self::Verbose
        } else if quiet {
            Self::Quiet
        } else {
            Self::Normal
        }
    }

    #[must_use]
    /// Level used when no environment filter is set.
    pub const fn default_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::DEBUG,
        }
    }
}

fn env_filter(verbosity: Verbosity) -> EnvFilter {
    [LOG_ENV, "RUST_LOG"]
        .into_iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(verbosity.default_level().as_str().to_lowercase()))
}

/// Install the global subscriber. Later calls are ignored.
pub fn init(verbosity: Verbosity) {
    let use_ansi = std::io::IsTerminal::is_terminal(&std::io::stderr());
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(use_ansi)
        .with_target(true);
    let _ = tracing_subscriber::registry()
        .with(env_filter(verbosity))
        .with(layer)
        .try_init();
}

#[cfg(test)]
#[path = "tests/logging.rs"]
mod tests;
