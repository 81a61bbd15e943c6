//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::application::generate::ManifestOptions;
use crate::domain::policies::DuplicatePolicy;
use crate::domain::value_objects::Dialect;
use crate::error::ManifestResult;

use super::loader::{self, ConfigWarning};

/// `[manifest]` table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestConfig {
    #[serde(default)]
    pub dialect: Dialect,

    #[serde(default)]
    pub duplicates: DuplicatePolicy,

    #[serde(default)]
    pub align: bool,
}

impl ManifestConfig {
    /// Generation options described by this table
    pub fn options(&self) -> ManifestOptions {
        ManifestOptions {
            dialect: self.dialect,
            duplicates: self.duplicates,
            align: self.align,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub manifest: ManifestConfig,
}

impl Config {
    /// Load configuration from a TOML file, ignoring unknown keys
    pub fn load(path: &Path) -> ManifestResult<Self> {
        Self::load_with_warnings(path).map(|(config, _)| config)
    }

    /// Load configuration and report unknown keys
    pub fn load_with_warnings(path: &Path) -> ManifestResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Generation options described by this configuration
    pub fn options(&self) -> ManifestOptions {
        self.manifest.options()
    }
}
