//! Test environment for isolated assetdigest testing.
//!
//! Provides `TestEnv` - a temp directory where tests drop asset sources and
//! write manifests.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;

use anyhow::Result;
use assetdigest::Asset;
use tempfile::TempDir;

/// Isolated directory for asset sources and generated output
pub struct TestEnv {
    root: TempDir,
}

impl TestEnv {
    pub fn new() -> Result<Self> {
        init_tracing();
        Ok(Self {
            root: tempfile::tempdir()?,
        })
    }

    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Path inside the environment (not created)
    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    /// Write `content` under `relative` and return an asset named `name`
    pub fn asset(&self, name: &str, relative: &str, content: impl AsRef<[u8]>) -> Result<Asset> {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, content)?;
        Ok(Asset::new(name, path))
    }

    /// Asset whose source does not exist
    pub fn missing_asset(&self, name: &str) -> Asset {
        Asset::new(name, self.path(&format!("missing/{}", name)))
    }

    pub fn read(&self, relative: &str) -> Result<String> {
        Ok(fs::read_to_string(self.path(relative))?)
    }
}

/// Install a test subscriber once; output shows with `RUST_LOG=assetdigest=debug`
pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}
