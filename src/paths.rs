//! Location of the config, blocklist and cache files.
//!
//! Follows the XDG base directory convention: `$XDG_CONFIG_HOME/gettrackers`
//! and `$XDG_CACHE_HOME/gettrackers`, falling back to `~/.config` and
//! `~/.cache` when the variables are unset or empty.

use anyhow::Result;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::TrackerError;
use crate::fs_abstraction::{real_fs, FileSystem};

const APP_DIR: &str = "gettrackers";
const CONFIG_FILE: &str = "config.yaml";
const BLOCKLIST_FILE: &str = "blocklist.txt";
const CACHE_FILE: &str = "sources.txt";

pub const CONFIG_HOME_VAR: &str = "XDG_CONFIG_HOME";
pub const CACHE_HOME_VAR: &str = "XDG_CACHE_HOME";

/// Resolved file locations. Their parent directories exist once resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub config_file: PathBuf,
    pub blocklist_file: PathBuf,
    pub cache_file: PathBuf,
}

impl Paths {
    /// Resolve from the process environment and create the directories.
    pub fn resolve() -> Result<Self> {
        Self::resolve_with(real_fs(), |name| std::env::var_os(name))
    }

    /// Resolve using `lookup` for environment variables.
    pub fn resolve_with<F>(fs: &dyn FileSystem, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<OsString>,
    {
        let config_root = root_dir(&lookup, CONFIG_HOME_VAR, ".config")?;
        let cache_root = root_dir(&lookup, CACHE_HOME_VAR, ".cache")?;
        Self::from_roots(fs, &config_root, &cache_root)
    }

    /// Build paths under explicit config and cache roots.
    pub fn from_roots(fs: &dyn FileSystem, config_root: &Path, cache_root: &Path) -> Result<Self> {
        let config_dir = config_root.join(APP_DIR);
        let cache_dir = cache_root.join(APP_DIR);

        for dir in [&config_dir, &cache_dir] {
            fs.create_dir_all(dir)
                .map_err(|e| TrackerError::io(dir.as_path(), e))?;
        }

        Ok(Self {
            config_file: config_dir.join(CONFIG_FILE),
            blocklist_file: config_dir.join(BLOCKLIST_FILE),
            cache_file: cache_dir.join(CACHE_FILE),
        })
    }
}

fn root_dir<F>(lookup: &F, var: &str, home_subdir: &str) -> Result<PathBuf>
where
    F: Fn(&str) -> Option<OsString>,
{
    if let Some(dir) = non_empty(lookup(var)) {
        return Ok(PathBuf::from(dir));
    }
    let home = non_empty(lookup("HOME"))
        .or_else(|| non_empty(lookup("USERPROFILE")))
        .ok_or(TrackerError::NoHomeDir)?;
    Ok(PathBuf::from(home).join(home_subdir))
}

fn non_empty(value: Option<OsString>) -> Option<OsString> {
    value.filter(|v| !v.is_empty())
}
