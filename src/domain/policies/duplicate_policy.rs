//! Duplicate Name Policy
//!
//! Decides what happens when two assets share a logical name.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::entities::Asset;
use crate::error::{ManifestError, ManifestResult};

/// Handling of repeated asset names
///
/// - `Reject`: fail before anything is digested or written (default)
/// - `Allow`: emit every entry; lookups resolve to the last one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    #[default]
    Reject,
    Allow,
}

impl DuplicatePolicy {
    /// Apply the policy to an asset list
    ///
    /// Under `Allow` each repeat is logged and the list passes.
    pub fn enforce(&self, assets: &[Asset]) -> ManifestResult<()> {
        let mut seen: HashMap<&str, usize> = HashMap::with_capacity(assets.len());

        for (position, asset) in assets.iter().enumerate() {
            let Some(&first) = seen.get(asset.name()) else {
                seen.insert(asset.name(), position);
                continue;
            };

            match self {
                DuplicatePolicy::Reject => {
                    return Err(ManifestError::DuplicateName {
                        name: asset.name().to_string(),
                        first,
                        second: position,
                    });
                }
                DuplicatePolicy::Allow => {
                    tracing::warn!(
                        name = asset.name(),
                        first,
                        second = position,
                        "duplicate asset name, later entry shadows earlier one"
                    );
                    seen.insert(asset.name(), position);
                }
            }
        }

        Ok(())
    }
}

impl std::str::FromStr for DuplicatePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reject" | "error" => Ok(DuplicatePolicy::Reject),
            "allow" | "last-wins" => Ok(DuplicatePolicy::Allow),
            other => Err(format!(
                "unknown duplicate policy '{}' (expected reject or allow)",
                other
            )),
        }
    }
}
