//! In-memory asset sources
//!
//! Serves asset bytes from a map keyed by path. Useful when content is
//! produced in-process, and as a test double for `LocalFs`.

use std::collections::HashMap;
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};

use crate::domain::ports::AssetReader;

/// Asset bytes keyed by source path
#[derive(Debug, Clone, Default)]
pub struct MemoryAssets {
    files: HashMap<PathBuf, Vec<u8>>,
}

impl MemoryAssets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register content for a source path, replacing any previous content
    pub fn insert(&mut self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) {
        self.files.insert(path.into(), content.into());
    }

    /// Builder form of [`MemoryAssets::insert`]
    pub fn with(mut self, path: impl Into<PathBuf>, content: impl Into<Vec<u8>>) -> Self {
        self.insert(path, content);
        self
    }

    pub fn remove(&mut self, path: &Path) -> Option<Vec<u8>> {
        self.files.remove(path)
    }
}

impl AssetReader for MemoryAssets {
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + '_>> {
        let content = self.files.get(path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no in-memory asset at {}", path.display()),
            )
        })?;
        Ok(Box::new(Cursor::new(content.as_slice())))
    }
}
