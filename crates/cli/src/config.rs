//! User configuration, read from the platform config directory.
//!
//! The file is optional; a missing file yields defaults and a malformed
//! file is logged and ignored rather than aborting startup.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Persisted user preferences for the console.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Preferred theme name (e.g. "lumina-dark", "ansi").
    #[serde(default)]
    pub theme: Option<String>,
    /// Start with the sidebar collapsed.
    #[serde(default)]
    pub sidebar_collapsed: bool,
    /// Route to open with instead of the dashboard.
    #[serde(default)]
    pub start_route: Option<String>,
}

impl Config {
    /// Location of the config file, when a config directory exists.
    pub fn path() -> Option<PathBuf> {
        dirs_next::config_dir().map(|dir| dir.join("lumina").join("config.json"))
    }

    /// Loads the config file, falling back to defaults when it is missing
    /// or unreadable.
    pub fn load() -> Self {
        let Some(path) = Self::path() else {
            return Self::default();
        };
        let Ok(raw) = std::fs::read_to_string(&path) else {
            return Self::default();
        };
        Self::parse(&raw).unwrap_or_else(|error| {
            warn!(path = %path.display(), %error, "ignoring malformed config file");
            Self::default()
        })
    }

    fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }
}
