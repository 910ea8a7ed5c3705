//! Filesystem abstraction layer for testability
//!
//! The cache and blocklist stores are generic over [`FileSystem`] so tests can
//! inject stat failures and arbitrary modification times without touching
//! the real filesystem. Uses mockall for automatic mock generation in test builds.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;
use std::time::SystemTime;

#[cfg(test)]
use mockall::automock;

/// Filesystem operations used by the stores.
///
/// # Example (testing)
/// ```ignore
/// use gettrackers::fs_abstraction::MockFileSystem;
///
/// let mut mock_fs = MockFileSystem::new();
/// mock_fs.expect_read_to_string()
///     .returning(|_| Ok("udp://tracker.example:1337/announce\n".to_string()));
/// ```
#[cfg_attr(test, automock)]
pub trait FileSystem: Send + Sync {
    /// Read file contents as a string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Read file contents as raw bytes.
    fn read(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Replace the file's contents, creating it if it doesn't exist.
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()>;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> io::Result<()>;

    /// Last modification time of a file.
    fn modified(&self, path: &Path) -> io::Result<SystemTime>;

    /// Overwrite the modification time of an existing file.
    fn set_modified(&self, path: &Path, time: SystemTime) -> io::Result<()>;
}

#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

/// Real filesystem implementation using std::fs.
#[derive(Default, Clone, Copy, Debug)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn read(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    /// Writes to a temporary file next to `path`, then renames it into place.
    /// The result is world-readable (0644) on unix.
    fn write(&self, path: &Path, contents: &[u8]) -> io::Result<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
        temp_file.write_all(contents)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            // NamedTempFile creates 0600
            temp_file
                .as_file()
                .set_permissions(std::fs::Permissions::from_mode(FILE_MODE))?;
        }
        temp_file.as_file().sync_all()?;
        temp_file.persist(path).map_err(|e| e.error)?;
        Ok(())
    }

    fn create_dir_all(&self, path: &Path) -> io::Result<()> {
        std::fs::create_dir_all(path)
    }

    fn modified(&self, path: &Path) -> io::Result<SystemTime> {
        std::fs::metadata(path)?.modified()
    }

    fn set_modified(&self, path: &Path, time: SystemTime) -> io::Result<()> {
        File::options().write(true).open(path)?.set_modified(time)
    }
}

static REAL_FS: RealFileSystem = RealFileSystem;

/// Get a reference to the global real filesystem instance.
pub fn real_fs() -> &'static RealFileSystem {
    &REAL_FS
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tempfile::TempDir;

    #[test]
    fn test_real_fs_read_write() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("sources.txt");

        let fs = RealFileSystem;
        fs.write(&file_path, b"udp://a.example:80/announce\n").unwrap();

        let content = fs.read_to_string(&file_path).unwrap();
        assert_eq!(content, "udp://a.example:80/announce\n");
    }

    #[test]
    fn test_real_fs_write_replaces_content() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("blocklist.txt");

        let fs = RealFileSystem;
        fs.write(&file_path, b"a much longer first version\n").unwrap();
        fs.write(&file_path, b"short\n").unwrap();

        assert_eq!(fs.read_to_string(&file_path).unwrap(), "short\n");
        // No temp files left behind
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_real_fs_read_bytes_not_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("sources.txt");

        let fs = RealFileSystem;
        fs.write(&file_path, b"ok\n\xff\xfe\n").unwrap();

        assert_eq!(fs.read(&file_path).unwrap(), b"ok\n\xff\xfe\n");
        assert_eq!(
            fs.read_to_string(&file_path).unwrap_err().kind(),
            io::ErrorKind::InvalidData
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_real_fs_write_is_world_readable() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("config.yaml");

        let fs = RealFileSystem;
        fs.write(&file_path, b"source_urls: []\n").unwrap();
        fs.write(&file_path, b"source_urls: []\n").unwrap();

        let mode = std::fs::metadata(&file_path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o644);
    }

    #[test]
    fn test_real_fs_create_dir_all() {
        let temp_dir = TempDir::new().unwrap();
        let nested_path = temp_dir.path().join("a/b/c");

        let fs = RealFileSystem;
        fs.create_dir_all(&nested_path).unwrap();
        // Idempotent
        fs.create_dir_all(&nested_path).unwrap();

        assert!(nested_path.is_dir());
    }

    #[test]
    fn test_real_fs_set_modified() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("sources.txt");

        let fs = RealFileSystem;
        fs.write(&file_path, b"x").unwrap();

        let past = SystemTime::now() - Duration::from_secs(3 * 24 * 3600);
        fs.set_modified(&file_path, past).unwrap();

        let modified = fs.modified(&file_path).unwrap();
        let drift = modified
            .duration_since(past)
            .unwrap_or_else(|e| e.duration());
        assert!(drift < Duration::from_secs(2));
    }

    #[test]
    fn test_real_fs_modified_nonexistent() {
        let temp_dir = TempDir::new().unwrap();
        let fs = RealFileSystem;
        let result = fs.modified(&temp_dir.path().join("missing.txt"));
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_real_fs_read_nonexistent() {
        let fs = RealFileSystem;
        let result = fs.read_to_string(Path::new("/nonexistent/path/file.txt"));
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn test_real_fs_write_to_nonexistent_dir() {
        let fs = RealFileSystem;
        let result = fs.write(Path::new("/nonexistent/path/file.txt"), b"test");
        assert!(result.is_err());
    }

    #[test]
    fn test_real_fs_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RealFileSystem>();
    }

    #[test]
    fn test_mock_fs_error_simulation() {
        let mut mock = MockFileSystem::new();
        mock.expect_modified().returning(|_| {
            Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "access denied",
            ))
        });

        let result = mock.modified(Path::new("/any/path"));
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::PermissionDenied);
    }
}
