//! Generate Module
//!
//! Orchestrates manifest generation: duplicate check, digesting, rendering.
//!
//! ## Structure
//!
//! - `options` - `ManifestOptions` (dialect, duplicate policy, alignment)
//! - `use_case` - `ManifestGenerator` and the free-function entry points
//!
//! ## Usage
//!
//! ```no_run
//! use assetdigest::application::generate::{generate_manifest, ManifestOptions};
//! use assetdigest::Asset;
//!
//! let assets = vec![Asset::new("icon.png", "static/icon.png")];
//! let mut out = Vec::new();
//! generate_manifest(&mut out, &assets, &ManifestOptions::default())?;
//! # Ok::<(), assetdigest::ManifestError>(())
//! ```

mod options;
mod use_case;

pub use options::ManifestOptions;
pub use use_case::{
    compute_digest, generate_manifest, render_manifest, write_manifest_file, ManifestGenerator,
};
