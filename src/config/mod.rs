//! Configuration module for nametag
//!
//! Settings are read from `config.toml` in the user's config directory and
//! can be overridden per run with `NAMETAG_*` environment variables
//! (`NAMETAG_RECURSIVE=true`, `NAMETAG_IGNORE="*.tmp,*.bak"`).
//! A missing file simply means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::NametagError;

/// Environment variable pointing at an alternative config file
pub const CONFIG_PATH_VAR: &str = "NAMETAG_CONFIG";

/// Keys accepted by `config get` / `config set`
pub const KEYS: &[&str] = &["quiet", "include_hidden", "recursive", "parallel", "ignore"];

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct NametagConfig {
    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Process hidden (dot) files found while walking directories
    #[serde(default)]
    pub include_hidden: bool,

    /// Descend into subdirectories of directory arguments
    #[serde(default)]
    pub recursive: bool,

    /// Rename files on the rayon thread pool
    #[serde(default)]
    pub parallel: bool,

    /// File name globs never handed to the core
    #[serde(default)]
    pub ignore: Vec<String>,
}

impl NametagConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_VAR) {
            return Ok(PathBuf::from(path));
        }
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;
        Ok(config_dir.join("nametag").join("config.toml"))
    }

    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load configuration from `path`, layered under `NAMETAG_*` variables
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file exists but cannot be parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(
                Environment::with_prefix("NAMETAG")
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("ignore"),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Save configuration to the default location
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config path cannot be determined or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Render a single setting
    ///
    /// # Errors
    ///
    /// Returns `NametagError::InvalidInput` for an unknown key.
    pub fn get(&self, key: &str) -> Result<String, NametagError> {
        match key {
            "quiet" => Ok(self.quiet.to_string()),
            "include_hidden" => Ok(self.include_hidden.to_string()),
            "recursive" => Ok(self.recursive.to_string()),
            "parallel" => Ok(self.parallel.to_string()),
            "ignore" => Ok(self.ignore.join(",")),
            _ => Err(unknown_key(key)),
        }
    }

    /// Update a single setting from its string form.
    ///
    /// `ignore` takes a comma-separated list; an empty value clears it.
    ///
    /// # Errors
    ///
    /// Returns `NametagError::InvalidInput` for an unknown key or a value that
    /// does not parse.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), NametagError> {
        match key {
            "quiet" => self.quiet = parse_bool(key, value)?,
            "include_hidden" => self.include_hidden = parse_bool(key, value)?,
            "recursive" => self.recursive = parse_bool(key, value)?,
            "parallel" => self.parallel = parse_bool(key, value)?,
            "ignore" => {
                self.ignore = value
                    .split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect();
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, NametagError> {
    value.parse::<bool>().map_err(|_| {
        NametagError::InvalidInput(format!(
            "Invalid value for {key}: '{value}'. Use 'true' or 'false'"
        ))
    })
}

fn unknown_key(key: &str) -> NametagError {
    NametagError::InvalidInput(format!(
        "Unknown configuration key: '{key}'. Available keys: {}",
        KEYS.join(", ")
    ))
}
