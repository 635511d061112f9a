//! Configuration management for Tango

use std::path::PathBuf;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::quiz::{Direction, Mode};
use crate::theme::Theme;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Selected theme name
    pub theme: String,

    /// Custom theme overrides (if any)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_theme: Option<Theme>,

    /// Deck file to load instead of the built-in sample
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deck_path: Option<PathBuf>,

    /// Direction used at startup and when returning home
    #[serde(default)]
    pub default_direction: Direction,

    /// Mode used at startup
    #[serde(default)]
    pub default_mode: Mode,

    /// Vim mode enabled
    pub vim_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: "Tokyo Night".to_string(),
            custom_theme: None,
            deck_path: None,
            default_direction: Direction::SourceToTarget,
            default_mode: Mode::List,
            vim_mode: true,
        }
    }
}

impl Config {
    /// Load configuration from disk, or create default if not exists
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read config from {:?}", config_path))?;
            serde_json::from_str(&contents).with_context(|| "Failed to parse config.json")
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let contents =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        std::fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write config to {:?}", config_path))?;

        Ok(())
    }

    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("", "", "tango").context("Failed to determine config directory")?;
        Ok(proj_dirs.config_dir().join("config.json"))
    }

    /// Get the data directory path
    pub fn data_dir() -> Result<PathBuf> {
        let proj_dirs =
            ProjectDirs::from("", "", "tango").context("Failed to determine data directory")?;
        Ok(proj_dirs.data_dir().to_path_buf())
    }

    /// Get the log file path
    pub fn log_path() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("tango.log"))
    }

    /// Get the active theme
    pub fn active_theme(&self) -> Theme {
        self.custom_theme.clone().unwrap_or_else(Theme::tokyo_night)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_tokyo_night_theme() {
        let config = Config::default();
        assert_eq!(config.theme, "Tokyo Night");
        assert_eq!(config.active_theme().name, "Tokyo Night");
    }

    #[test]
    fn default_config_uses_builtin_deck() {
        let config = Config::default();
        assert!(config.deck_path.is_none());
        assert_eq!(config.default_mode, Mode::List);
    }

    #[test]
    fn config_serializes_to_json() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("Tokyo Night"));
        assert!(json.contains("source-to-target"));
        assert!(!json.contains("deck_path"));
    }

    #[test]
    fn config_deserializes_from_older_json() {
        let json = r#"{"theme":"Custom","vim_mode":false}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.theme, "Custom");
        assert!(!config.vim_mode);
        assert_eq!(config.default_direction, Direction::SourceToTarget);
    }

    #[test]
    fn config_reads_deck_path_and_direction() {
        let json = r#"{"theme":"x","vim_mode":true,"deck_path":"/tmp/deck.json",
            "default_direction":"target-to-source","default_mode":"quiz"}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.deck_path, Some(PathBuf::from("/tmp/deck.json")));
        assert_eq!(config.default_direction, Direction::TargetToSource);
        assert_eq!(config.default_mode, Mode::Quiz);
    }
}
