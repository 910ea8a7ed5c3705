//! On-disk cache of the last successfully downloaded tracker list.
//!
//! The file's modification time is the freshness signal: the cache is stale
//! once it is older than [`CACHE_MAX_AGE`].

use anyhow::Result;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};
use tracing::debug;

use crate::error::TrackerError;
use crate::fs_abstraction::{FileSystem, RealFileSystem};

pub const CACHE_MAX_AGE: Duration = Duration::from_secs(24 * 60 * 60);

/// Cache file handle.
pub struct TrackerCache<F = RealFileSystem> {
    fs: F,
    path: PathBuf,
}

impl TrackerCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_fs(RealFileSystem, path)
    }
}

impl<F: FileSystem> TrackerCache<F> {
    pub fn with_fs(fs: F, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the cache needs refreshing: forced, missing, or stale.
    pub fn should_fetch(&self, force: bool) -> Result<bool> {
        if force {
            return Ok(true);
        }

        let modified = match self.fs.modified(&self.path) {
            Ok(modified) => modified,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("No cache at {:?}", self.path);
                return Ok(true);
            }
            Err(e) => return Err(TrackerError::io(&self.path, e).into()),
        };

        // A timestamp in the future counts as fresh
        let age = SystemTime::now()
            .duration_since(modified)
            .unwrap_or(Duration::ZERO);
        debug!("Cache age: {}s", age.as_secs());

        Ok(age > CACHE_MAX_AGE)
    }

    /// Load the cached tracker URLs, dropping empty lines.
    ///
    /// Invalid UTF-8 is replaced rather than rejected.
    pub fn load(&self) -> Result<Vec<String>> {
        let content = self
            .read_raw()?
            .ok_or_else(|| TrackerError::CacheMissing(self.path.clone()))?;
        Ok(parse_cache(&String::from_utf8_lossy(&content)))
    }

    /// Raw cache bytes, or `None` if no cache has been written yet.
    pub fn read_raw(&self) -> Result<Option<Vec<u8>>> {
        match self.fs.read(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(TrackerError::io(&self.path, e).into()),
        }
    }

    /// Replace the cache with `payload` and mark it fresh as of now.
    pub fn store(&self, payload: &[u8]) -> Result<()> {
        self.fs
            .write(&self.path, payload)
            .map_err(|e| TrackerError::io(&self.path, e))?;
        self.fs
            .set_modified(&self.path, SystemTime::now())
            .map_err(|e| TrackerError::io(&self.path, e))?;
        Ok(())
    }
}

/// Split cache content into non-empty lines on `\n`. Every `\r` is dropped,
/// wherever it appears.
pub fn parse_cache(content: &str) -> Vec<String> {
    content
        .split('\n')
        .map(|line| line.replace('\r', ""))
        .filter(|line| !line.is_empty())
        .collect()
}
