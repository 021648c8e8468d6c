//! Configuration module for relabel
//!
//! Manages application settings such as the default image folder and the
//! label length rules. Configuration is stored in the user's config directory
//! (`~/.config/relabel/config.toml` on Linux).

mod setup;

pub use setup::first_time_setup;

use std::fs;
use std::path::{Path, PathBuf};

use config::{Config, ConfigError, File, FileFormat};
use serde::{Deserialize, Serialize};

use crate::session::SessionOptions;

/// Keys accepted by [`RelabelConfig::set`] and [`RelabelConfig::get`]
pub const CONFIG_KEYS: [&str; 6] = [
    "default_folder",
    "submit_length",
    "input_length",
    "quiet",
    "open_images",
    "extensions",
];

const fn default_submit_length() -> usize {
    1
}

const fn default_input_length() -> usize {
    4
}

/// Settings for the default naming strategy
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct NamingConfig {
    /// Only these extensions are listed; empty means every file
    #[serde(default)]
    pub extensions: Vec<String>,
}

/// Application configuration structure
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct RelabelConfig {
    /// Folder opened when none is given on the command line
    #[serde(default)]
    pub default_folder: Option<PathBuf>,

    /// Exact number of characters a typed label must have
    #[serde(default = "default_submit_length")]
    pub submit_length: usize,

    /// Longest line the shell accepts as a label, so whole words can be typed
    #[serde(default = "default_input_length")]
    pub input_length: usize,

    /// Suppress informational output by default
    #[serde(default)]
    pub quiet: bool,

    /// Hand every image shown to the system image viewer
    #[serde(default)]
    pub open_images: bool,

    #[serde(default)]
    pub naming: NamingConfig,
}

impl Default for RelabelConfig {
    fn default() -> Self {
        Self {
            default_folder: None,
            submit_length: default_submit_length(),
            input_length: default_input_length(),
            quiet: false,
            open_images: false,
            naming: NamingConfig::default(),
        }
    }
}

impl RelabelConfig {
    /// Get the path to the config file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the system config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::Message("Could not determine config directory".to_string()))?;

        Ok(config_dir.join("relabel").join("config.toml"))
    }

    /// Load configuration from file, creating default if it doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read, parsed, or created.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            let default_config = Self::default();
            default_config.save_to(&config_path)?;
            return Ok(default_config);
        }

        Self::load_from(&config_path)
    }

    /// Load and validate configuration from a specific file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed, or if the
    /// settings are inconsistent.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.to_path_buf()).format(FileFormat::Toml))
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration, running first-time setup if config doesn't exist
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if loading or creating the configuration fails.
    pub fn load_or_setup() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            first_time_setup()
        }
    }

    /// Save configuration to file
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config directory cannot be created, the configuration
    /// cannot be serialized to TOML, or the file cannot be written.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::config_path()?)
    }

    /// Save configuration to a specific file
    ///
    /// # Errors
    ///
    /// Same as [`save`](Self::save).
    pub fn save_to(&self, config_path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ConfigError::Message(format!("Failed to create config directory: {e}")))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Message(format!("Failed to serialize config: {e}")))?;

        fs::write(config_path, toml_string)
            .map_err(|e| ConfigError::Message(format!("Failed to write config file: {e}")))?;

        Ok(())
    }

    /// Check that the length rules are usable together
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Message` if `submit_length` is zero or larger
    /// than `input_length`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.submit_length == 0 {
            return Err(ConfigError::Message(
                "submit_length must be at least 1".to_string(),
            ));
        }
        if self.input_length < self.submit_length {
            return Err(ConfigError::Message(format!(
                "input_length ({}) must not be smaller than submit_length ({})",
                self.input_length, self.submit_length
            )));
        }
        Ok(())
    }

    /// Session options derived from this configuration
    #[must_use]
    pub const fn session_options(&self) -> SessionOptions {
        SessionOptions {
            submit_length: self.submit_length,
        }
    }

    /// Set one setting from its string form
    ///
    /// `extensions` takes a comma-separated list; an empty `default_folder`
    /// clears it. The configuration is not saved.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Message` for unknown keys, unparsable values, or
    /// values that break [`validate`](Self::validate). On error the
    /// configuration is left unchanged.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut updated = self.clone();
        match key {
            "default_folder" => {
                updated.default_folder = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            "submit_length" => updated.submit_length = parse_value(key, value)?,
            "input_length" => updated.input_length = parse_value(key, value)?,
            "quiet" => updated.quiet = parse_value(key, value)?,
            "open_images" => updated.open_images = parse_value(key, value)?,
            "extensions" => {
                updated.naming.extensions = value
                    .split(',')
                    .map(str::trim)
                    .filter(|ext| !ext.is_empty())
                    .map(str::to_string)
                    .collect();
            }
            _ => return Err(unknown_key(key)),
        }

        updated.validate()?;
        *self = updated;
        Ok(())
    }

    /// Get one setting in string form
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Message` for unknown keys.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        let value = match key {
            "default_folder" => self
                .default_folder
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
            "submit_length" => self.submit_length.to_string(),
            "input_length" => self.input_length.to_string(),
            "quiet" => self.quiet.to_string(),
            "open_images" => self.open_images.to_string(),
            "extensions" => self.naming.extensions.join(","),
            _ => return Err(unknown_key(key)),
        };
        Ok(value)
    }
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::Message(format!("Invalid value for {key}: '{value}'")))
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::Message(format!(
        "Unknown configuration key: '{key}'. Available keys: {}",
        CONFIG_KEYS.join(", ")
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = RelabelConfig::default();
        assert!(config.default_folder.is_none());
        assert_eq!(config.submit_length, 1);
        assert_eq!(config.input_length, 4);
        assert!(!config.open_images);
        assert!(config.naming.extensions.is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = RelabelConfig::default();
        config.default_folder = Some(PathBuf::from("/data/glyphs"));
        config.submit_length = 2;
        config.naming.extensions = vec!["jpeg".into(), "png".into()];
        config.save_to(&path).unwrap();

        let loaded = RelabelConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_keys_use_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "quiet = true\n").unwrap();

        let loaded = RelabelConfig::load_from(&path).unwrap();
        assert!(loaded.quiet);
        assert_eq!(loaded.submit_length, 1);
        assert_eq!(loaded.input_length, 4);
    }

    #[test]
    fn test_load_rejects_inconsistent_lengths() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "submit_length = 3\ninput_length = 2\n").unwrap();

        assert!(RelabelConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_set_and_get() {
        let mut config = RelabelConfig::default();

        config.set("input_length", "8").unwrap();
        config.set("submit_length", "2").unwrap();
        config.set("open_images", "true").unwrap();
        config.set("extensions", "jpeg, png,,").unwrap();
        config.set("default_folder", "/data").unwrap();

        assert_eq!(config.get("submit_length").unwrap(), "2");
        assert_eq!(config.get("input_length").unwrap(), "8");
        assert_eq!(config.get("open_images").unwrap(), "true");
        assert_eq!(config.get("extensions").unwrap(), "jpeg,png");
        assert_eq!(config.get("default_folder").unwrap(), "/data");

        config.set("default_folder", "").unwrap();
        assert!(config.default_folder.is_none());
    }

    #[test]
    fn test_set_invalid_value_leaves_config_unchanged() {
        let mut config = RelabelConfig::default();

        assert!(config.set("submit_length", "many").is_err());
        assert!(config.set("submit_length", "0").is_err());
        assert!(config.set("submit_length", "9").is_err());
        assert!(config.set("quiet", "maybe").is_err());
        assert_eq!(config, RelabelConfig::default());
    }

    #[test]
    fn test_unknown_key() {
        let mut config = RelabelConfig::default();
        let err = config.set("colour", "blue").unwrap_err();
        assert!(err.to_string().contains("Available keys"));
        assert!(config.get("colour").is_err());
    }

    #[test]
    fn test_every_listed_key_is_readable() {
        let config = RelabelConfig::default();
        for key in CONFIG_KEYS {
            assert!(config.get(key).is_ok(), "{key}");
        }
    }

    #[test]
    fn test_session_options() {
        let mut config = RelabelConfig::default();
        config.set("input_length", "5").unwrap();
        config.set("submit_length", "3").unwrap();
        assert_eq!(config.session_options(), SessionOptions { submit_length: 3 });
    }
}
