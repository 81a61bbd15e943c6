//! assetdigest - content-addressed asset manifest generator
//!
//! Given an ordered list of named asset files, assetdigest computes a SHA-256
//! digest for each one and emits source code (Go, JavaScript or Python) that
//! maps every asset name to its digest behind a small accessor function.
//!
//! ```text
//! // AssetHash get the file hash
//! func AssetHash(name string) (string, error) { ... }
//!
//! var _binhash = map[string]string{
//!   "icon.png": "5f78c33274e43fa9de5659265c1d917e25c03722dcb0b8d27db8d5feaa813953",
//! }
//! ```
//!
//! Discovering the files is the caller's job; this crate takes the list as
//! given and preserves its order in the output.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod escaping;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{
    check_manifest_file, compute_digest, generate_manifest, render_manifest, write_manifest_file,
    ManifestDrift, ManifestGenerator, ManifestOptions, ManifestStatus,
};
pub use config::Config;
pub use domain::entities::Asset;
pub use domain::policies::DuplicatePolicy;
pub use domain::value_objects::{ContentDigest, Dialect, ManifestIndex};
pub use error::{LookupError, ManifestError, ManifestResult};
