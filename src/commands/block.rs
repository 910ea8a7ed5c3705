//! Block command implementation.

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::blocklist::BlocklistStore;
use crate::paths::Paths;

/// Run the block command
pub async fn run(pattern: &str, paths: &Paths) -> Result<()> {
    let store = BlocklistStore::new(&paths.blocklist_file);

    let added = store
        .add(pattern)
        .context("Failed to add to blocklist")?;
    if !added {
        debug!("Pattern already present in {:?}", store.path());
    }

    info!("Added pattern to blocklist: {}", pattern.trim());
    Ok(())
}
