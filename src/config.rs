//! Configuration handling for the TUI

use crate::logging::DEFAULT_LOG_FILTER;
use crate::state::DEFAULT_DIALOG_WIDTH;
use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TuiConfig {
    /// Capture mouse events (needed for backdrop clicks)
    pub mouse_capture: Option<bool>,
    /// Preferred width of the user details dialog
    pub dialog_width: Option<u16>,
    /// Log filter used when RUST_LOG is not set
    pub log_filter: Option<String>,
}

impl TuiConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "user-details", "user-details-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the platform config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config: TuiConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Take a loaded configuration, or warn and use defaults if loading failed.
    ///
    /// Call this after the subscriber is installed, or the warning is lost.
    pub fn or_default(loaded: Result<Self>) -> Self {
        loaded.unwrap_or_else(|err| {
            tracing::warn!("Ignoring unreadable config file: {err:#}");
            Self::default()
        })
    }

    #[cfg(test)]
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn mouse_capture(&self) -> bool {
        self.mouse_capture.unwrap_or(true)
    }

    pub fn dialog_width(&self) -> u16 {
        self.dialog_width.unwrap_or(DEFAULT_DIALOG_WIDTH)
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}
