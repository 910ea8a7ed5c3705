//! Config command implementation.

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;
use tracing::info;

use crate::cli::ConfigAction;
use crate::config::{Config, ConfigValue, SOURCE_URLS_KEY};
use crate::paths::Paths;

/// Run the config command
pub async fn run(action: ConfigAction, paths: &Paths) -> Result<()> {
    match action {
        ConfigAction::Get { key } => {
            let config = Config::load(&paths.config_file).context("Failed to load config")?;
            let stdout = io::stdout();
            let mut out = stdout.lock();
            write_config(&config, key.as_deref(), &mut out)?;
            out.flush()?;
            Ok(())
        }
        ConfigAction::Set { key, value } => {
            let value = set_value(&paths.config_file, &key, &value)?;
            info!("Set {} = {}", key, value);
            Ok(())
        }
    }
}

/// Print the whole config, or a single value when `key` is given.
pub fn write_config<W: Write>(config: &Config, key: Option<&str>, out: &mut W) -> Result<()> {
    let Some(key) = key else {
        writeln!(out, "{}:", SOURCE_URLS_KEY)?;
        for url in &config.source_urls {
            writeln!(out, "  - {}", url)?;
        }
        return Ok(());
    };

    match config.get(key)? {
        ConfigValue::List(items) => {
            for item in items {
                writeln!(out, "{}", item)?;
            }
        }
        ConfigValue::Text(text) => writeln!(out, "{}", text)?,
    }
    Ok(())
}

/// Parse `raw` for `key`, store it and persist the config.
pub fn set_value(config_path: &Path, key: &str, raw: &str) -> Result<ConfigValue> {
    let mut config = Config::load(config_path).context("Failed to load config")?;

    let value = ConfigValue::from_cli(key, raw);
    config.set(key, value.clone())?;
    config.save(config_path).context("Failed to save config")?;

    Ok(value)
}
