//! Configuration management for gettrackers.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::path::Path;

use crate::error::TrackerError;
use crate::fs_abstraction::{real_fs, FileSystem};

/// The only configuration key
pub const SOURCE_URLS_KEY: &str = "source_urls";

/// Mirrors of the public ngosang tracker list
const DEFAULT_SOURCE_URLS: &[&str] = &[
    "https://raw.githubusercontent.com/ngosang/trackerslist/master/trackers_all.txt",
    "https://ngosang.github.io/trackerslist/trackers_all.txt",
    "https://cdn.jsdelivr.net/gh/ngosang/trackerslist@master/trackers_all.txt",
];

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Mirrors serving the same tracker list, tried in random order
    pub source_urls: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_urls: DEFAULT_SOURCE_URLS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// A configuration value as seen by `config get` / `config set`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValue {
    Text(String),
    List(Vec<String>),
}

impl ConfigValue {
    /// Interpret a raw command-line value for `key`.
    ///
    /// List-valued keys take a comma-separated string; each item is trimmed
    /// and empty items are dropped.
    pub fn from_cli(key: &str, raw: &str) -> Self {
        match key {
            SOURCE_URLS_KEY => ConfigValue::List(
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect(),
            ),
            _ => ConfigValue::Text(raw.to_string()),
        }
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Text(s) => f.write_str(s),
            ConfigValue::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    ///
    /// A missing file yields the default configuration; nothing is written.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(TrackerError::io(path, e).into()),
        };

        let config: Config = serde_yaml::from_str(&content).map_err(|e| {
            TrackerError::Parse(format!("malformed config file {:?}: {}", path, e))
        })?;

        Ok(config)
    }

    /// Save configuration to a YAML file atomically
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let content = serde_yaml::to_string(self).context("Failed to serialize config")?;
        real_fs()
            .write(path, content.as_bytes())
            .map_err(|e| TrackerError::io(path, e))?;
        Ok(())
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Result<ConfigValue, TrackerError> {
        match key {
            SOURCE_URLS_KEY => Ok(ConfigValue::List(self.source_urls.clone())),
            _ => Err(TrackerError::UnknownKey(key.to_string())),
        }
    }

    /// Replace a value by key.
    pub fn set(&mut self, key: &str, value: ConfigValue) -> Result<(), TrackerError> {
        match (key, value) {
            (SOURCE_URLS_KEY, ConfigValue::List(urls)) => {
                self.source_urls = urls;
                Ok(())
            }
            (SOURCE_URLS_KEY, ConfigValue::Text(_)) => Err(TrackerError::Type {
                key: key.to_string(),
                expected: "a list of strings",
            }),
            _ => Err(TrackerError::UnknownKey(key.to_string())),
        }
    }
}
