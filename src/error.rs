//! Error types for assetdigest
//!
//! Generation errors are all-or-nothing: any variant of [`ManifestError`]
//! means no usable manifest was produced. [`LookupError`] belongs to the
//! read side (querying an emitted manifest).

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for manifest generation
pub type ManifestResult<T> = Result<T, ManifestError>;

/// Errors raised while generating a manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    /// An asset source could not be opened or read to the end
    #[error("failed to read asset source {path}: {source}")]
    ReadAsset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A previously generated manifest could not be read back
    #[error("failed to read manifest {path}: {source}")]
    ReadManifest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output sink rejected a write
    #[error("failed to write manifest to {sink}: {source}")]
    WriteSink {
        sink: String,
        #[source]
        source: std::io::Error,
    },

    /// Two assets share a logical name (input positions are zero-based)
    #[error("duplicate asset name '{name}' at positions {first} and {second}")]
    DuplicateName {
        name: String,
        first: usize,
        second: usize,
    },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },
}

impl ManifestError {
    /// True for the I/O class of failures
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            ManifestError::ReadAsset { .. }
                | ManifestError::ReadManifest { .. }
                | ManifestError::WriteSink { .. }
        )
    }
}

/// Errors raised when querying an emitted manifest
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// No entry for the queried name (carries the name as queried)
    #[error("Asset {name} not found")]
    NotFound { name: String },

    /// An entry line could not be parsed
    #[error("malformed manifest entry on line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

/// A string that is not a 64-character lowercase hex SHA-256 digest
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid digest '{0}': expected 64 lowercase hex characters")]
pub struct InvalidDigest(pub String);
