//! User-maintained blocklist of substring patterns.
//!
//! Stored as one trimmed pattern per line. Loading skips blank lines, adding
//! an existing pattern is a no-op.

use anyhow::Result;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::TrackerError;
use crate::fs_abstraction::{FileSystem, RealFileSystem};

/// Blocklist file handle.
pub struct BlocklistStore<F = RealFileSystem> {
    fs: F,
    path: PathBuf,
}

impl BlocklistStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_fs(RealFileSystem, path)
    }
}

impl<F: FileSystem> BlocklistStore<F> {
    pub fn with_fs(fs: F, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load all patterns in file order. A missing file is an empty blocklist.
    pub fn load(&self) -> Result<Vec<String>> {
        match self.fs.read_to_string(&self.path) {
            Ok(content) => Ok(parse_patterns(&content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(TrackerError::io(&self.path, e).into()),
        }
    }

    /// Add a pattern unless an identical (trimmed) one is already stored.
    ///
    /// Returns `true` when the file was rewritten.
    pub fn add(&self, pattern: &str) -> Result<bool> {
        let pattern = pattern.trim();
        if pattern.is_empty() {
            return Err(
                TrackerError::Usage("blocklist pattern must not be empty".to_string()).into(),
            );
        }

        let mut patterns = self.load()?;
        if patterns.iter().any(|p| p == pattern) {
            return Ok(false);
        }

        patterns.push(pattern.to_string());
        let mut content = patterns.join("\n");
        content.push('\n');

        self.fs
            .write(&self.path, content.as_bytes())
            .map_err(|e| TrackerError::io(&self.path, e))?;
        Ok(true)
    }
}

fn parse_patterns(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
