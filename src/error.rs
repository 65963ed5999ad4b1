//! Error type shared by the library and the preview binary.

use crate::host::HostElement;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
/// Failures surfaced by this crate.
///
/// Only construction and loading can fail. Once mounted, the dropdown treats engine misuse as a
/// no-op rather than an error.
pub enum Error {
    /// The host markup lacks an element the dropdown needs.
    #[error("search root has no {0} element")]
    MissingElement(HostElement),

    /// A configuration file could not be parsed.
    #[error("invalid configuration in {}: {reason}", path.display())]
    Config {
        /// File that failed to parse.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// Result JSON was malformed or contained a result without hierarchy.
    #[error("invalid results: {0}")]
    Results(#[from] serde_json::Error),

    /// Reading an input file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
