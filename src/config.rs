//! Configuration handling for the TUI

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Artificial delay before the submitted screen, in milliseconds
    pub submit_delay_ms: Option<u64>,
    /// Path to a listings JSON file overriding the bundled fixture
    pub listings_path: Option<String>,
    /// Order featured listings first in the browse list
    pub featured_first: Option<bool>,
}

impl TuiConfig {
    /// Delay used when the config does not set one (matches the reference
    /// behavior of a one second mock submission)
    pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1000;

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("io", "choiceproperties", "lease-tui")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: TuiConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to file
    #[allow(dead_code)]
    pub fn save(&self) -> Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            let content = serde_json::to_string_pretty(self)?;
            fs::write(&path, content)?;
        }
        Ok(())
    }

    pub fn submit_delay_ms(&self) -> u64 {
        self.submit_delay_ms.unwrap_or(Self::DEFAULT_SUBMIT_DELAY_MS)
    }
}
