//! Domain Layer
//!
//! Pure manifest logic. Everything that touches the disk goes through a port.
//!
//! ## Structure
//!
//! - `entities/` - Asset (one named input file)
//! - `value_objects/` - ContentDigest, Dialect, ManifestIndex
//! - `services/` - DigestComputer, ManifestRenderer
//! - `policies/` - DuplicatePolicy
//! - `ports/` - AssetReader, ManifestDialect

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
