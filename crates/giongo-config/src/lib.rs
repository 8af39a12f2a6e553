use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::compile::CompileConfig;
use self::dictionary::DictionaryConfig;
use self::logging::LoggingConfig;

pub mod compile;
pub mod dictionary;
pub mod logging;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub dictionary: DictionaryConfig,
    pub compile: CompileConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let mut config = Self::default();
        config.apply_overrides(|key| env::var(key).ok());
        config
    }

    /// Read a JSON config file, then apply environment overrides
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: Config = serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.apply_overrides(|key| env::var(key).ok());
        Ok(config)
    }

    /// Apply `GIONGO_*` overrides looked up through `var`
    pub fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(path) = var("GIONGO_DICTIONARY") {
            self.dictionary.path = PathBuf::from(path);
        }

        if let Some(dir) = var("GIONGO_DATA_DIR") {
            self.compile.data_dir = PathBuf::from(dir);
        }

        if let Some(level) = var("GIONGO_LOG") {
            self.logging.level = level;
        }

        self.logging.json = var("GIONGO_LOG_JSON")
            .and_then(|v| v.parse().ok())
            .unwrap_or(self.logging.json);
    }
}
