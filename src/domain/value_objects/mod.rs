//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod dialect;
mod digest;
mod manifest_index;

pub use dialect::Dialect;
pub use digest::ContentDigest;
pub use manifest_index::{normalize_name, ManifestIndex};
