//! Domain Services
//!
//! Digesting and rendering. Both work against ports, never the disk directly.

mod digest_computer;
mod manifest_renderer;

pub use digest_computer::DigestComputer;
pub use manifest_renderer::ManifestRenderer;
