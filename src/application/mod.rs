//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ManifestGenerator` - Digest every asset and emit the manifest
//! - `check_manifest_file` - Compare an existing manifest with a fresh render

pub mod check;
pub mod generate;

pub use check::{check_manifest_file, ManifestDrift, ManifestStatus};
pub use generate::{
    compute_digest, generate_manifest, render_manifest, write_manifest_file, ManifestGenerator,
    ManifestOptions,
};
