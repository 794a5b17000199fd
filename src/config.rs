//! User configuration loaded from a TOML file.
//!
//! ```toml
//! history_capacity = 200
//! advanced_mode = true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculator::{Calculator, DEFAULT_HISTORY_CAPACITY, HistoryLog, Mode};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("history_capacity must be at least 1")]
    ZeroHistoryCapacity,
    #[error("failed to serialize config")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Maximum number of history entries kept.
    pub history_capacity: usize,
    /// Open the calculator with the advanced keypad.
    pub advanced_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
            advanced_mode: false,
        }
    }
}

impl Config {
    /// `$XDG_CONFIG_HOME/orca/config.toml` or the platform equivalent.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("orca").join("config.toml"))
    }

    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one the default location is
    /// tried and a missing file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = path {
            return Self::from_file(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()
    }

    /// The settings in the same format [`Config::from_file`] reads.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.history_capacity == 0 {
            return Err(ConfigError::ZeroHistoryCapacity);
        }
        Ok(self)
    }

    pub fn mode(&self) -> Mode {
        if self.advanced_mode {
            Mode::Advanced
        } else {
            Mode::Simple
        }
    }

    /// Build a fresh calculator with these settings.
    pub fn calculator(&self) -> Calculator {
        Calculator::new(HistoryLog::new(self.history_capacity), self.mode())
    }
}
