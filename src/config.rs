use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_AVATAR_URL};

/// What submitting the Split Bill form does
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettlementMode {
    /// Apply the split to the selected friend's balance, then close the form
    #[default]
    Settle,
    /// Accept the submission without touching any balance
    Inert,
}

/// User configuration, read from `~/.eat-n-split/config.yaml`
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub avatar_base_url: String,
    pub seed_friends: bool,
    pub settlement: SettlementMode,
    pub log_dir: PathBuf,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            avatar_base_url: String::from(DEFAULT_AVATAR_URL),
            seed_friends: true,
            settlement: SettlementMode::Settle,
            log_dir: PathBuf::from("."),
            log_level: String::from("info"),
        }
    }
}

impl Config {
    /// Default config file location
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("parsing {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(content)?)
    }

    /// Log level, falling back to INFO for unrecognised names
    pub fn tracing_level(&self) -> tracing::Level {
        tracing::Level::from_str(&self.log_level).unwrap_or(tracing::Level::INFO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.yaml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "settlement: inert\nseed_friends: false\n").unwrap();

        let config = Config::load_from(&path).unwrap();

        assert_eq!(config.settlement, SettlementMode::Inert);
        assert!(!config.seed_friends);
        assert_eq!(config.avatar_base_url, DEFAULT_AVATAR_URL);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "settlement: sometimes\n").unwrap();

        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_log_level() {
        let mut config = Config::default();
        config.log_level = "debug".into();
        assert_eq!(config.tracing_level(), tracing::Level::DEBUG);

        config.log_level = "chatty".into();
        assert_eq!(config.tracing_level(), tracing::Level::INFO);
    }
}
