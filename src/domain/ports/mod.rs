//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod asset_reader;
pub mod manifest_dialect;

pub use asset_reader::AssetReader;
pub use manifest_dialect::ManifestDialect;
