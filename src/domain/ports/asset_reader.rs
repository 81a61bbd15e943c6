//! AssetReader port - where asset bytes come from
//!
//! The digest computer only ever sees a byte stream. Local files, in-memory
//! fixtures or anything else readable can stand behind this trait.

use std::io::{self, Read};
use std::path::Path;

/// Opens asset sources for reading
///
/// Implementations:
/// - `LocalFs` - files on disk
/// - `MemoryAssets` - in-memory buffers keyed by path
pub trait AssetReader {
    /// Open the source at `path` as a byte stream
    ///
    /// The returned stream is dropped as soon as it has been consumed, which
    /// releases any handle behind it.
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + '_>>;
}

impl<R: AssetReader + ?Sized> AssetReader for &R {
    fn open(&self, path: &Path) -> io::Result<Box<dyn Read + '_>> {
        (**self).open(path)
    }
}
