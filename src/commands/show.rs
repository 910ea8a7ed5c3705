//! Show command implementation.

use anyhow::{Context, Result};
use std::io::{self, Write};
use tracing::info;

use crate::blocklist::BlocklistStore;
use crate::cache::TrackerCache;
use crate::cli::ShowTarget;
use crate::error::TrackerError;
use crate::fs_abstraction::FileSystem;
use crate::paths::Paths;

/// Run the show command
pub async fn run(target: ShowTarget, paths: &Paths) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match target {
        ShowTarget::Sources => {
            let cache = TrackerCache::new(&paths.cache_file);
            write_sources(&cache, &mut out)?;
        }
        ShowTarget::Blocklist => {
            let store = BlocklistStore::new(&paths.blocklist_file);
            if write_blocklist(&store, &mut out)? == 0 {
                info!("Blocklist is empty");
            }
        }
    }

    out.flush().context("Failed to write output")?;
    Ok(())
}

/// Copy the cache file to `out` byte for byte.
pub fn write_sources<F: FileSystem, W: Write>(cache: &TrackerCache<F>, out: &mut W) -> Result<()> {
    let content = cache
        .read_raw()?
        .ok_or_else(|| TrackerError::CacheMissing(cache.path().to_path_buf()))
        .context("Failed to load cache")?;

    out.write_all(&content).context("Failed to write output")?;
    Ok(())
}

/// Print blocklist patterns one per line. Returns how many were printed.
pub fn write_blocklist<F: FileSystem, W: Write>(
    store: &BlocklistStore<F>,
    out: &mut W,
) -> Result<usize> {
    let patterns = store.load().context("Failed to load blocklist")?;
    for pattern in &patterns {
        writeln!(out, "{}", pattern).context("Failed to write output")?;
    }
    Ok(patterns.len())
}
