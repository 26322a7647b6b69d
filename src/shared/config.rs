//! Application Configuration
//!
//! Loaded from `config.toml`. Every field has a default, so a partial file (or
//! no file at all) is fine.

use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR: &str = "explorer-nav";
const CONFIG_FILE: &str = "config.toml";
const FREQUENT_LOCATIONS_FILE: &str = "frequent_locations.json";
const TAB_HISTORY_FILE: &str = "tab_history.json";

/// Configuration error
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("No configuration directory available")]
    NoConfigDir,
}

/// Application configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub navigation: NavigationConfig,

    #[serde(default)]
    pub history: HistoryConfig,

    #[serde(default)]
    pub icons: IconConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Open every navigation after a tab's first in a new tab
    #[serde(default)]
    pub force_new_tab: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// How many of the top-ranked frequent locations are saved
    #[serde(default = "default_max_stored_frequent_locations")]
    pub max_stored_frequent_locations: usize,

    /// Override for the frequent locations file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frequent_locations_file: Option<PathBuf>,

    /// Override for the saved tab history file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_history_file: Option<PathBuf>,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_stored_frequent_locations: default_max_stored_frequent_locations(),
            frequent_locations_file: None,
            tab_history_file: None,
        }
    }
}

fn default_max_stored_frequent_locations() -> usize {
    20
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IconConfig {
    /// Fetch icons for new history entries
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// One of error, warn, info, debug, trace, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log file; defaults to one next to the executable
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl LoggingConfig {
    /// Parsed level, falling back to `Info` for unknown names
    pub fn level_filter(&self) -> log::LevelFilter {
        self.level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

impl Config {
    /// Find config.toml in standard locations
    pub fn find_config_path() -> Option<PathBuf> {
        // Check in order: user config dir, exe dir, cwd
        let candidates = [
            dirs::config_dir().map(|p| p.join(APP_DIR).join(CONFIG_FILE)),
            std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|d| d.join(CONFIG_FILE))),
            Some(PathBuf::from(CONFIG_FILE)),
        ];

        candidates.into_iter().flatten().find(|candidate| candidate.exists())
    }

    /// Load configuration, returning defaults if not found or unreadable
    pub fn load() -> Self {
        let Some(path) = Self::find_config_path() else {
            return Self::default();
        };

        Self::load_from_path(&path).unwrap_or_else(|e| {
            warn!("Ignoring config file {}: {}", path.display(), e);
            Self::default()
        })
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Write configuration to a specific path
    pub fn save_to_path(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Write configuration to the user config directory
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        let path = dirs::config_dir()
            .ok_or(ConfigError::NoConfigDir)?
            .join(APP_DIR)
            .join(CONFIG_FILE);
        self.save_to_path(&path)?;
        Ok(path)
    }

    /// Directory for history data files
    pub fn data_dir() -> PathBuf {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn frequent_locations_path(&self) -> PathBuf {
        self.history
            .frequent_locations_file
            .clone()
            .unwrap_or_else(|| Self::data_dir().join(FREQUENT_LOCATIONS_FILE))
    }

    pub fn tab_history_path(&self) -> PathBuf {
        self.history
            .tab_history_file
            .clone()
            .unwrap_or_else(|| Self::data_dir().join(TAB_HISTORY_FILE))
    }
}
