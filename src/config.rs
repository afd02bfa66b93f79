//! User configuration
//!
//! Read from `config.toml` in the data directory. Every field is optional and
//! command line flags win over the file.
//!
//! ```toml
//! cards_path = "/home/me/kanji/kanji.csv"
//! session_path = "/home/me/kanji/session.json"
//! batch_limit = 20
//! color = false
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

const APP_DIR: &str = "kanji-drill";
const CONFIG_FILE: &str = "config.toml";
const SESSION_FILE: &str = "session.json";
const DEFAULT_CARDS_FILE: &str = "kanji.csv";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub cards_path: Option<PathBuf>,
    pub session_path: Option<PathBuf>,
    pub batch_limit: Option<usize>,
    pub color: Option<bool>,
}

impl Config {
    /// Directory holding the config and session files
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join(APP_DIR))
            .ok_or(ConfigError::DataDirNotFound)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        Ok(Self::default_data_dir()?.join(CONFIG_FILE))
    }

    /// Load a config file. A missing file is the default config.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config file at {:?}", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        log::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Card source: flag, then config, then `kanji.csv` in the working directory
    pub fn cards_path(&self, flag: Option<PathBuf>) -> PathBuf {
        flag.or_else(|| self.cards_path.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CARDS_FILE))
    }

    /// Session file: flag, then config, then the data directory
    pub fn session_path(&self, flag: Option<PathBuf>) -> Result<PathBuf> {
        match flag.or_else(|| self.session_path.clone()) {
            Some(path) => Ok(path),
            None => Ok(Self::default_data_dir()?.join(SESSION_FILE)),
        }
    }

    /// Cards per run: flag, then config. A limit of 0 means no limit.
    pub fn batch_limit(&self, flag: Option<usize>) -> Option<usize> {
        flag.or(self.batch_limit).filter(|&limit| limit > 0)
    }
}
