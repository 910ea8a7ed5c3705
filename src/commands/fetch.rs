//! Fetch command implementation.

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cache::TrackerCache;
use crate::config::Config;
use crate::fetcher::Fetcher;
use crate::paths::Paths;

/// Run the fetch command: refresh the cache regardless of its age
pub async fn run(paths: &Paths) -> Result<()> {
    let config = Config::load(&paths.config_file).context("Failed to load config")?;

    let fetcher = Fetcher::new()?;
    let cache = TrackerCache::new(&paths.cache_file);

    let mirror = fetcher
        .fetch(&config.source_urls, &cache, &mut rand::rng())
        .await
        .context("Failed to fetch")?;

    debug!("Cache written to {:?} from {}", cache.path(), mirror);
    info!("Successfully updated cache");
    Ok(())
}
