//! Error types for gettrackers.

use reqwest::StatusCode;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Unknown config key: {0}")]
    UnknownKey(String),

    #[error("Invalid value for '{key}': expected {expected}")]
    Type { key: String, expected: &'static str },

    #[error("No source URLs configured")]
    EmptySources,

    #[error("Failed to download from all mirrors: {last}")]
    AllMirrorsFailed {
        #[source]
        last: MirrorError,
    },

    #[error("Cache file does not exist: {0:?}")]
    CacheMissing(PathBuf),

    #[error("Could not determine the home directory")]
    NoHomeDir,

    #[error("Invalid usage: {0}")]
    Usage(String),
}

impl TrackerError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Failure of a single mirror download. Never fatal on its own.
#[derive(Error, Debug)]
pub enum MirrorError {
    #[error("unexpected status code {status} from {url}")]
    Status { url: String, status: StatusCode },

    #[error("failed to fetch {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("response from {url} too large: {size} bytes (max: {max} bytes)")]
    TooLarge { url: String, size: u64, max: u64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_path() {
        let err = TrackerError::io(
            "/tmp/sources.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        let msg = err.to_string();
        assert!(msg.contains("sources.txt"));
        assert!(msg.contains("denied"));
    }

    #[test]
    fn test_all_mirrors_failed_wraps_last_error() {
        let err = TrackerError::AllMirrorsFailed {
            last: MirrorError::Status {
                url: "https://mirror.example/trackers.txt".to_string(),
                status: StatusCode::INTERNAL_SERVER_ERROR,
            },
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Failed to download from all mirrors"));
        assert!(msg.contains("500"));
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_downcast_through_anyhow_context() {
        use anyhow::Context;

        let result: anyhow::Result<()> =
            Err(TrackerError::UnknownKey("colour".to_string())).context("Failed to get config");
        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TrackerError>(),
            Some(TrackerError::UnknownKey(k)) if k == "colour"
        ));
    }
}
