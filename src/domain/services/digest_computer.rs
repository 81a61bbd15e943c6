//! Digest Computer
//!
//! Opens one asset source at a time and streams it through SHA-256.

use std::path::Path;

use crate::domain::ports::AssetReader;
use crate::domain::value_objects::ContentDigest;
use crate::error::{ManifestError, ManifestResult};

/// Computes content digests through an [`AssetReader`]
#[derive(Debug, Clone, Default)]
pub struct DigestComputer<R> {
    reader: R,
}

impl<R: AssetReader> DigestComputer<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Digest the source at `source_path`
    ///
    /// The stream is opened, read to the end and dropped before this returns,
    /// whether or not reading succeeded.
    pub fn compute(&self, source_path: &Path) -> ManifestResult<ContentDigest> {
        let read_error = |source| ManifestError::ReadAsset {
            path: source_path.to_path_buf(),
            source,
        };

        let stream = self.reader.open(source_path).map_err(read_error)?;
        ContentDigest::from_reader(stream).map_err(read_error)
    }
}
