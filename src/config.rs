//! Dropdown settings read from `sitesearch.toml`.
//!
//! Every key is optional and a missing file means all defaults. The settings cover the class
//! prefix for generated ids, whether the first result is highlighted, and the input debounce.

use crate::error::{Error, Result};
use facet::Facet;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// File looked up in the working directory by [`Config::load`].
pub const CONFIG_FILE: &str = "sitesearch.toml";

/// Default prefix for generated ids and classes.
pub const DEFAULT_BASE_CLASS: &str = "redis-sitesearch";

#[derive(Facet, Clone, Debug, PartialEq)]
/// Dropdown preferences loaded from sitesearch.toml or falling back to defaults.
pub struct Config {
    #[facet(default = DEFAULT_BASE_CLASS.to_string())]
    /// Prefix for generated ids and classes (`{base_class}-result-{n}`).
    pub base_class: String,
    #[facet(default = false)]
    /// Highlight the first result whenever new results arrive.
    pub auto_select: bool,
    #[facet(default = 0)]
    /// Input debounce in milliseconds; 0 disables debouncing.
    pub debounce_time: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_class: DEFAULT_BASE_CLASS.to_string(),
            auto_select: false,
            debounce_time: 0,
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from sitesearch.toml if present.
    ///
    /// A file that fails to parse is reported and ignored.
    pub fn load() -> Self {
        let path = Path::new(CONFIG_FILE);
        if !path.exists() {
            return Self::default();
        }
        Self::from_path(path).unwrap_or_else(|err| {
            tracing::warn!(%err, "falling back to default configuration");
            Self::default()
        })
    }

    /// Load configuration from an explicit file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid configuration.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml(&contents).map_err(|reason| Error::Config {
            path: path.to_path_buf(),
            reason,
        })
    }

    /// Parse configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns the parser message if the text is not valid configuration.
    pub fn from_toml(contents: &str) -> std::result::Result<Self, String> {
        facet_toml::from_str::<Self>(contents).map_err(|err| err.to_string())
    }

    #[must_use]
    /// Input debounce as a duration.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_time)
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
