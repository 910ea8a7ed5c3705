//! # gettrackers - tracker list downloader
//!
//! Downloads a list of BitTorrent tracker URLs from one of several mirrors,
//! drops entries matching a user blocklist, and prints them grouped by
//! hostname in random order.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       gettrackers                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  CLI (clap)                                                 │
//! │    └── Commands: groups (default), fetch, show, block,      │
//! │                  config                                     │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Paths (XDG)  ·  Config (serde_yaml)  ·  Blocklist (text)   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Fetcher (reqwest + rustls)                                 │
//! │    └── Random mirror order, failover, 24h cache freshness   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Filter (substring)  →  Grouper (url, shuffled groups)      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```no_run
//! use gettrackers::cache::TrackerCache;
//! use gettrackers::config::Config;
//! use gettrackers::fetcher::Fetcher;
//! use gettrackers::filter::filter_urls;
//! use gettrackers::group::group_by_domain;
//! use gettrackers::paths::Paths;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> anyhow::Result<()> {
//!     let paths = Paths::resolve()?;
//!     let config = Config::load(&paths.config_file)?;
//!     let cache = TrackerCache::new(&paths.cache_file);
//!
//!     let mut rng = rand::rng();
//!     if cache.should_fetch(false)? {
//!         Fetcher::new()?.fetch(&config.source_urls, &cache, &mut rng).await?;
//!     }
//!
//!     let urls = filter_urls(cache.load()?, &["example.com".to_string()]);
//!     for group in group_by_domain(&urls, &mut rng) {
//!         println!("{}: {} trackers", group.domain, group.urls.len());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`blocklist`] - Blocklist file store
//! - [`cache`] - Cached tracker list and freshness check
//! - [`cli`] - Command-line interface definitions
//! - [`commands`] - CLI command implementations
//! - [`config`] - Configuration loading and key access
//! - [`error`] - Typed error kinds
//! - [`fetcher`] - Mirror download with failover
//! - [`filter`] - Blocklist substring filtering
//! - [`fs_abstraction`] - Filesystem seam for tests
//! - [`group`] - Grouping by hostname
//! - [`paths`] - Config and cache file locations

pub mod blocklist;
pub mod cache;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod fetcher;
pub mod filter;
pub mod fs_abstraction;
pub mod group;
pub mod paths;

pub use cli::{Cli, Commands};
pub use config::Config;
pub use error::TrackerError;
