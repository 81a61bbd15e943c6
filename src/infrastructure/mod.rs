//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Asset readers (local disk, in-memory) and atomic writes
//! - `adapters/` - Dialect adapters (Go, JavaScript, Python)

pub mod adapters;
pub mod fs;

// Re-export for convenience
pub use adapters::{all_dialects, get_dialect, GoDialect, JavaScriptDialect, PythonDialect};
pub use fs::{LocalFs, MemoryAssets};
