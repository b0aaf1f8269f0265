//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find an obelus.toml, and if present we load settings from there.
//! This provides the reflow width cap, the edit label and how far off screen overlays are kept.

use crate::error::{Error, Result};
use facet::Facet;
use std::fs;
use std::path::Path;

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "obelus.toml";

#[derive(Facet, Clone, Debug)]
/// User preferences loaded from obelus.toml or falling back to defaults.
pub struct Config {
    #[facet(default = 100)]
    /// Maximum column width the document is reflowed to.
    pub wrap_width: u32,
    #[facet(default = "✎ edit".to_string())]
    /// Text drawn at the right end of every section overlay.
    pub edit_label: String,
    #[facet(default = 4)]
    /// Rows above and below the viewport within which sections keep their overlays.
    pub prefetch_rows: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            wrap_width: 100,
            edit_label: "✎ edit".to_string(),
            prefetch_rows: 4,
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from `path` if present and valid, else the defaults.
    pub fn load(path: &Path) -> Self {
        let Ok(contents) = fs::read_to_string(path) else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        };
        Self::parse(&contents).unwrap_or_else(|error| {
            tracing::warn!(path = %path.display(), %error, "invalid config file, using defaults");
            Self::default()
        })
    }

    /// Parse configuration from TOML text, filling unset keys with defaults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] describing the first problem in `contents`.
    pub fn parse(contents: &str) -> Result<Self> {
        facet_toml::from_str::<Self>(contents).map_err(|e| Error::Config(e.to_string()))
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
