//! Default action: fetch if stale, filter, group, print.

use anyhow::{Context, Result};
use rand::Rng;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tracing::{info, warn};

use crate::blocklist::BlocklistStore;
use crate::cache::TrackerCache;
use crate::cli::GroupsArgs;
use crate::config::Config;
use crate::error::TrackerError;
use crate::fetcher::Fetcher;
use crate::filter::filter_urls;
use crate::fs_abstraction::FileSystem;
use crate::group::{group_by_domain, DomainGroup};
use crate::paths::Paths;

/// Run the groups command
pub async fn run(args: &GroupsArgs, output: Option<&Path>, paths: &Paths) -> Result<()> {
    let start_priority = validate_start_priority(args.start_priority)?;

    let config = Config::load(&paths.config_file).context("Failed to load config")?;
    let fetcher = Fetcher::new()?;
    let cache = TrackerCache::new(&paths.cache_file);
    let blocklist = BlocklistStore::new(&paths.blocklist_file);
    let mut rng = rand::rng();

    let groups = collect_groups(&config, &fetcher, &cache, &blocklist, &mut rng).await?;
    if groups.is_empty() {
        return Ok(());
    }

    match output {
        Some(path) => {
            let file = File::create(path)
                .map_err(|e| TrackerError::io(path, e))
                .context("Failed to create output file")?;
            let mut writer = BufWriter::new(file);
            write_groups(&mut writer, start_priority, &groups)
                .and_then(|_| writer.flush())
                .map_err(|e| TrackerError::io(path, e))?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            write_groups(&mut writer, start_priority, &groups)
                .and_then(|_| writer.flush())
                .context("Failed to write output")?;
        }
    }

    Ok(())
}

/// Reject negative blank-line counts.
pub fn validate_start_priority(value: i64) -> Result<usize, TrackerError> {
    usize::try_from(value).map_err(|_| {
        TrackerError::Usage(format!(
            "start-priority must be a non-negative integer, got: {}",
            value
        ))
    })
}

/// Refresh the cache if needed, then filter and group its URLs.
///
/// A failed refresh only warns: the existing cache, however old, is used.
/// Returns no groups when there is nothing to print.
pub async fn collect_groups<F, B, R>(
    config: &Config,
    fetcher: &Fetcher,
    cache: &TrackerCache<F>,
    blocklist: &BlocklistStore<B>,
    rng: &mut R,
) -> Result<Vec<DomainGroup>>
where
    F: FileSystem,
    B: FileSystem,
    R: Rng + ?Sized,
{
    if cache.should_fetch(false).context("Failed to check cache")? {
        if let Err(e) = fetcher.fetch(&config.source_urls, cache, rng).await {
            warn!("Failed to fetch new data: {:#}", e);
            warn!("Attempting to use stale cache...");
        }
    }

    let urls = cache.load().context("Failed to load cache")?;
    let patterns = blocklist.load().context("Failed to load blocklist")?;

    let total = urls.len();
    let filtered = filter_urls(urls, &patterns);
    if filtered.is_empty() {
        if total > 0 {
            info!("all urls blocked");
        }
        return Ok(Vec::new());
    }

    Ok(group_by_domain(&filtered, rng))
}

/// Write `start_priority` blank lines, then each group's URLs one per line
/// with a single blank line between groups.
pub fn write_groups<W: Write>(
    writer: &mut W,
    start_priority: usize,
    groups: &[DomainGroup],
) -> io::Result<()> {
    for _ in 0..start_priority {
        writeln!(writer)?;
    }

    for (i, group) in groups.iter().enumerate() {
        if i > 0 {
            writeln!(writer)?;
        }
        for url in &group.urls {
            writeln!(writer, "{}", url)?;
        }
    }

    Ok(())
}
