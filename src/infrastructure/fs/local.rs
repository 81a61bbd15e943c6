//! Local File System Implementation
//!
//! Implements the AssetReader port for files on disk and provides the atomic
//! write used when a manifest is saved to a path.

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::Path;

use crate::domain::ports::AssetReader;

/// Local file system implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }

    /// Write `content` to `path` atomically
    ///
    /// Content goes to a temporary file in the destination directory which
    /// is renamed over `path` only once fully written and synced. Missing
    /// parent directories are created.
    pub fn write_atomic(&self, path: &Path, content: &[u8]) -> io::Result<()> {
        let parent = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;

        let mut tmp = tempfile::NamedTempFile::new_in(parent)?;
        tmp.write_all(content)?;
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }

    /// Read a whole file, or `None` if it does not exist
    pub fn read_if_exists(&self, path: &Path) -> io::Result<Option<Vec<u8>>> {
        match fs::read(path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }
}

impl AssetReader for LocalFs {
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(File::open(path)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn local_fs_open_reads_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("asset.bin");
        fs::write(&file, b"payload").unwrap();

        let mut content = Vec::new();
        LocalFs::new()
            .open(&file)
            .unwrap()
            .read_to_end(&mut content)
            .unwrap();

        assert_eq!(content, b"payload");
    }

    #[test]
    fn local_fs_open_missing_is_not_found() {
        let dir = tempdir().unwrap();

        let err = LocalFs::new().open(&dir.path().join("missing")).err().unwrap();

        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn write_atomic_creates_parent_dirs() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("nested").join("dir").join("hashes.go");

        LocalFs::new().write_atomic(&file, b"content").unwrap();

        assert_eq!(fs::read(&file).unwrap(), b"content");
    }

    #[test]
    fn write_atomic_overwrites() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("hashes.go");
        fs::write(&file, "Original").unwrap();

        LocalFs::new().write_atomic(&file, b"Replaced").unwrap();

        assert_eq!(fs::read_to_string(&file).unwrap(), "Replaced");
    }

    #[test]
    fn write_atomic_leaves_no_temp_files() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("hashes.go");

        LocalFs::new().write_atomic(&file, b"x").unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn read_if_exists_distinguishes_missing() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("hashes.go");
        let local = LocalFs::new();

        assert_eq!(local.read_if_exists(&file).unwrap(), None);

        fs::write(&file, "x").unwrap();
        assert_eq!(local.read_if_exists(&file).unwrap(), Some(b"x".to_vec()));
    }
}
