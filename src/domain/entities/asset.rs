//! Asset entity - one embeddable input file
//!
//! Assets are built by whatever discovers the input files. Inside this crate
//! they are read-only: the name becomes the manifest key and the source path
//! is only ever read to compute the digest.

use std::path::{Path, PathBuf};

/// A named asset awaiting digesting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Asset {
    /// Logical lookup key in the emitted manifest
    name: String,
    /// Location read to compute the digest (never emitted)
    source_path: PathBuf,
}

impl Asset {
    /// Create a new Asset
    pub fn new(name: impl Into<String>, source_path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            source_path: source_path.into(),
        }
    }

    /// Get the logical name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the source path
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// True when the name can never be matched by the accessor
    ///
    /// The accessor rewrites `\` to `/` before lookup, so a stored name that
    /// itself contains `\` is unreachable.
    pub fn has_unreachable_name(&self) -> bool {
        self.name.contains('\\')
    }
}

impl<N: Into<String>, P: Into<PathBuf>> From<(N, P)> for Asset {
    fn from((name, source_path): (N, P)) -> Self {
        Self::new(name, source_path)
    }
}
