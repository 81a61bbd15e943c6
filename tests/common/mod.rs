//! Common test utilities for assetdigest integration tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated temp directory holding asset sources and outputs
//! - Fixtures: Known byte contents and their digests
//! - `init_tracing`: opt-in log output via `RUST_LOG`

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
