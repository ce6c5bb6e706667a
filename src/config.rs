//! Configuration to acknowledge developer preferences as well as set defaults.
//!
//! Specifically, we try to find a scratchmark.toml, and if present we load settings from there.
//! This provides the heading marker, the bullet prefix for listed headings, and the log level.

use crate::formats::markdown::MarkdownFormat;
use facet::Facet;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "scratchmark.toml";

#[derive(Facet, Clone, Debug, PartialEq, Eq)]
/// User preferences loaded from scratchmark.toml or falling back to defaults.
pub struct Config {
    #[facet(default = "#".to_string())]
    /// Character repeated to mark heading depth; only the first character counts.
    pub marker: String,
    #[facet(default = "- ".to_string())]
    /// Prefix for bullet lines produced when listing sub-headings.
    pub bullet: String,
    #[facet(default = "warn".to_string())]
    /// Log filter used when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            marker: "#".to_string(),
            bullet: "- ".to_string(),
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    #[must_use]
    /// Load configuration from scratchmark.toml if present.
    pub fn load() -> Self {
        Self::load_from(CONFIG_FILE)
    }

    #[must_use]
    /// Load configuration from `path`, using defaults if it is missing or invalid.
    pub fn load_from(path: impl AsRef<Path>) -> Self {
        let Ok(contents) = fs::read_to_string(path.as_ref()) else {
            return Self::default();
        };
        match facet_toml::from_str::<Self>(&contents) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %path.as_ref().display(), "ignoring invalid config: {e}");
                Self::default()
            }
        }
    }

    #[must_use]
    /// The heading marker character.
    pub fn marker_char(&self) -> char {
        self.marker.chars().next().unwrap_or('#')
    }

    #[must_use]
    /// Outline format described by this configuration.
    pub fn format(&self) -> MarkdownFormat {
        MarkdownFormat::with_marker(self.marker_char()).bullet_prefix(self.bullet.clone())
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
