//! Configuration module for assetdigest
//!
//! Configuration hierarchy:
//! 1. Environment variables (ASSETDIGEST_*) (highest priority)
//! 2. Project config (assetdigest.toml)
//! 3. User config (~/.config/assetdigest/config.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    apply_overrides, load_or_default, load_with_warnings, with_env_overrides, ConfigWarning,
    PROJECT_CONFIG_FILE,
};
pub use types::{Config, ManifestConfig};
