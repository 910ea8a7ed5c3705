//! HTTP fetcher for downloading the tracker list from its mirrors.

use anyhow::{Context, Result};
use rand::seq::SliceRandom;
use rand::Rng;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::cache::TrackerCache;
use crate::error::{MirrorError, TrackerError};
use crate::fs_abstraction::FileSystem;

const TIMEOUT_SECS: u64 = 30;

/// Maximum size of a single mirror response (10 MB)
/// The full public tracker list is well under 100 KB
pub const MAX_PAYLOAD_SIZE: u64 = 10 * 1024 * 1024;

/// HTTP client for fetching the tracker list
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Create a new fetcher with default settings
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(TIMEOUT_SECS))
    }

    /// Create a fetcher with a custom per-request timeout
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(format!("gettrackers/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self { client })
    }

    /// Download the tracker list and store it in `cache`.
    ///
    /// Mirrors are tried in a random order until one answers 200; the cache is
    /// untouched unless a download succeeds. Returns the mirror that was used.
    pub async fn fetch<F, R>(
        &self,
        sources: &[String],
        cache: &TrackerCache<F>,
        rng: &mut R,
    ) -> Result<String>
    where
        F: FileSystem,
        R: Rng + ?Sized,
    {
        if sources.is_empty() {
            return Err(TrackerError::EmptySources.into());
        }

        let mirrors = mirror_order(sources, rng);
        let mut last_error = None;

        for url in mirrors {
            debug!("Trying mirror {}", url);
            match self.download(&url).await {
                Ok(body) => {
                    cache
                        .store(&body)
                        .context("Failed to write cache file")?;
                    info!("Fetched tracker list from {} ({} bytes)", url, body.len());
                    return Ok(url);
                }
                Err(e) => {
                    warn!("Mirror failed: {}", e);
                    last_error = Some(e);
                }
            }
        }

        // sources is non-empty, so at least one attempt was made
        match last_error {
            Some(last) => Err(TrackerError::AllMirrorsFailed { last }.into()),
            None => Err(TrackerError::EmptySources.into()),
        }
    }

    /// GET a single mirror. Anything but a 200 within the size limit fails.
    async fn download(&self, url: &str) -> Result<Vec<u8>, MirrorError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| MirrorError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(MirrorError::Status {
                url: url.to_string(),
                status,
            });
        }

        if let Some(content_length) = response.content_length() {
            if content_length > MAX_PAYLOAD_SIZE {
                return Err(MirrorError::TooLarge {
                    url: url.to_string(),
                    size: content_length,
                    max: MAX_PAYLOAD_SIZE,
                });
            }
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| MirrorError::Request {
                url: url.to_string(),
                source,
            })?;

        // Double-check actual size after download
        let size = body.len() as u64;
        if size > MAX_PAYLOAD_SIZE {
            return Err(MirrorError::TooLarge {
                url: url.to_string(),
                size,
                max: MAX_PAYLOAD_SIZE,
            });
        }

        Ok(body.to_vec())
    }
}

/// A uniformly shuffled copy of the mirror list.
pub fn mirror_order<R>(sources: &[String], rng: &mut R) -> Vec<String>
where
    R: Rng + ?Sized,
{
    let mut mirrors = sources.to_vec();
    mirrors.shuffle(rng);
    mirrors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs_abstraction::MockFileSystem;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_mirror_order_is_permutation() {
        let sources: Vec<String> = (0..10).map(|i| format!("https://m{}.example/t.txt", i)).collect();
        let mut rng = StdRng::seed_from_u64(3);

        let mut order = mirror_order(&sources, &mut rng);
        assert_eq!(order.len(), sources.len());
        order.sort();
        let mut expected = sources.clone();
        expected.sort();
        assert_eq!(order, expected);
    }

    #[test]
    fn test_mirror_order_does_not_mutate_input() {
        let sources = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let before = sources.clone();
        let _ = mirror_order(&sources, &mut StdRng::seed_from_u64(9));
        assert_eq!(sources, before);
    }

    #[tokio::test]
    async fn test_fetch_empty_sources() {
        let mut mock = MockFileSystem::new();
        mock.expect_write().never();
        let cache = TrackerCache::with_fs(mock, "/cache/sources.txt");
        let fetcher = Fetcher::new().unwrap();

        let err = fetcher
            .fetch(&[], &cache, &mut StdRng::seed_from_u64(0))
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TrackerError>(),
            Some(TrackerError::EmptySources)
        ));
    }

    #[tokio::test]
    async fn test_fetch_invalid_urls_fail_every_mirror() {
        let mut mock = MockFileSystem::new();
        mock.expect_write().never();
        mock.expect_set_modified().never();
        let cache = TrackerCache::with_fs(mock, "/cache/sources.txt");
        let fetcher = Fetcher::new().unwrap();

        let sources = vec!["not-a-url".to_string(), "ftp://invalid-scheme.example".to_string()];
        let err = fetcher
            .fetch(&sources, &cache, &mut StdRng::seed_from_u64(0))
            .await
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TrackerError>(),
            Some(TrackerError::AllMirrorsFailed {
                last: MirrorError::Request { .. }
            })
        ));
    }
}
