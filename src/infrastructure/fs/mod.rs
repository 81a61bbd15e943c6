//! File System Implementations
//!
//! Concrete implementations of the AssetReader port.

mod local;
mod memory;

pub use local::LocalFs;
pub use memory::MemoryAssets;
