//! Optional user configuration read from a TOML file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Moving past either end of the list jumps to the other end.
    #[serde(default = "default_wrap_list")]
    pub wrap_list: bool,
    /// Replaces the app name in the header.
    #[serde(default)]
    pub title: Option<String>,
    /// Shown as the contact on every detail screen.
    #[serde(default = "default_owner_name")]
    pub owner_name: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            wrap_list: default_wrap_list(),
            title: None,
            owner_name: default_owner_name(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_wrap_list() -> bool {
    true
}

fn default_owner_name() -> String {
    "Shelter volunteer".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// `<config_dir>/pawlist/config.toml`, or `./pawlist/config.toml` when
    /// the platform has no config directory.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("pawlist").join("config.toml")
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads and validates `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.logging.level.to_ascii_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "Unknown log level '{}', expected one of {}",
                    self.logging.level,
                    LOG_LEVELS.join(", ")
                ),
            });
        }

        if self.ui.owner_name.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "ui.owner_name must not be empty".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert!(config.ui.wrap_list);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let file = write_config("[ui]\nwrap_list = false\n");
        let config = Config::load_from(file.path()).unwrap();
        assert!(!config.ui.wrap_list);
        assert_eq!(config.ui.owner_name, "Shelter volunteer");
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_full_file() {
        let file = write_config(
            "[ui]\ntitle = \"Adopt\"\nowner_name = \"Asha\"\n\n[logging]\nlevel = \"DEBUG\"\n",
        );
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.ui.title.as_deref(), Some("Adopt"));
        assert_eq!(config.ui.owner_name, "Asha");
        assert_eq!(config.logging.level, "DEBUG");
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let file = write_config("[ui\nwrap_list = yes");
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn test_unknown_log_level_rejected() {
        let file = write_config("[logging]\nlevel = \"loud\"\n");
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(err.to_string().contains("Unknown log level 'loud'"));
    }

    #[test]
    fn test_blank_owner_rejected() {
        let mut config = Config::default();
        config.ui.owner_name = "  ".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::ValidationError { .. })));
    }
}
