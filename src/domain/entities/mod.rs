//! Domain Entities
//!
//! - `Asset` - one embeddable input file, identified by its logical name

mod asset;

pub use asset::Asset;
