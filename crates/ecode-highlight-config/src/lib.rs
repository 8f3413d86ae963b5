use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Unknown setting '{key}'")]
    UnknownSetting { key: String },

    #[error("Invalid value '{value}' for setting '{key}'")]
    InvalidSetting { key: String, value: String },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Display preferences.
///
/// Every field is optional in the file; missing ones take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: Theme,
    /// Font size in px for rendered pages.
    pub font_size: u16,
    /// Write the document back when the viewer exits with unsaved changes.
    pub auto_save: bool,
    /// Colour overrides keyed by category name (`string`, `data-type`, ...).
    pub palette: BTreeMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            font_size: 14,
            auto_save: false,
            palette: BTreeMap::new(),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    /// Loads the config, falling back to defaults when there is no file.
    pub fn load_or_default() -> Result<Self, ConfigError> {
        Ok(Self::load()?.unwrap_or_default())
    }

    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(config_path, self.to_toml()?)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/ecode-highlight");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    pub fn is_dark(&self) -> bool {
        self.theme == Theme::Dark
    }

    /// Sets one preference from its command-line form.
    ///
    /// Keys are `theme`, `font-size`, `auto-save` and `palette.<category>`.
    /// Palette colours are stored as given.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidSetting {
            key: key.to_string(),
            value: value.to_string(),
        };

        match key {
            "theme" => {
                self.theme = match value {
                    "light" => Theme::Light,
                    "dark" => Theme::Dark,
                    _ => return Err(invalid()),
                }
            }
            "font-size" => {
                self.font_size = value
                    .parse::<u16>()
                    .ok()
                    .filter(|size| *size > 0)
                    .ok_or_else(invalid)?;
            }
            "auto-save" => self.auto_save = value.parse::<bool>().map_err(|_| invalid())?,
            _ => match key.strip_prefix("palette.") {
                Some(category) if !category.is_empty() => {
                    self.palette.insert(category.to_string(), value.to_string());
                }
                _ => {
                    return Err(ConfigError::UnknownSetting {
                        key: key.to_string(),
                    });
                }
            },
        }
        Ok(())
    }
}
