//! Check Use Case
//!
//! Compares a manifest already on disk with what generation would produce
//! now, so callers can tell whether a committed manifest needs regenerating.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::domain::entities::Asset;
use crate::domain::value_objects::{ContentDigest, ManifestIndex};
use crate::error::{ManifestError, ManifestResult};
use crate::infrastructure::fs::LocalFs;

use super::generate::{render_manifest, ManifestOptions};

/// Entry-level differences between two manifests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestDrift {
    /// Names present only in the fresh manifest
    pub added: Vec<String>,
    /// Names present only in the existing manifest
    pub removed: Vec<String>,
    /// Names whose digest changed
    pub changed: Vec<String>,
}

impl ManifestDrift {
    /// Compare two indexes by stored name, in fresh-then-existing order
    ///
    /// Names are compared as written, without the accessor's `\` rewrite.
    /// Repeated names count once, with their last digest.
    pub fn between(existing: &ManifestIndex, fresh: &ManifestIndex) -> Self {
        let old = last_digests(existing);
        let new = last_digests(fresh);
        let mut seen = HashSet::new();
        let mut drift = Self::default();

        for (name, _) in fresh.iter() {
            if !seen.insert(name) {
                continue;
            }
            match old.get(name) {
                Some(digest) if *digest == new[name] => {}
                Some(_) => drift.changed.push(name.to_string()),
                None => drift.added.push(name.to_string()),
            }
        }
        for name in existing.names() {
            if !new.contains_key(name) && seen.insert(name) {
                drift.removed.push(name.to_string());
            }
        }

        drift
    }

    /// True when no entry differs
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.changed.is_empty()
    }
}

/// Status of a manifest file relative to its assets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestStatus {
    /// File matches a fresh render byte for byte
    UpToDate,
    /// File differs; `drift` is `None` when the old file could not be parsed
    Stale { drift: Option<ManifestDrift> },
    /// No file at the path
    Missing,
}

impl ManifestStatus {
    pub fn is_up_to_date(&self) -> bool {
        matches!(self, ManifestStatus::UpToDate)
    }
}

fn last_digests(index: &ManifestIndex) -> HashMap<&str, &ContentDigest> {
    index.iter().collect()
}

/// Check whether the manifest at `path` is current for `assets`
///
/// Every asset is re-digested. Failures reading assets surface as errors,
/// exactly as during generation.
pub fn check_manifest_file(
    path: &Path,
    assets: &[Asset],
    options: &ManifestOptions,
) -> ManifestResult<ManifestStatus> {
    let fresh = render_manifest(assets, options)?;

    let existing = LocalFs::new()
        .read_if_exists(path)
        .map_err(|source| ManifestError::ReadManifest {
            path: path.to_path_buf(),
            source,
        })?;
    let Some(existing) = existing else {
        return Ok(ManifestStatus::Missing);
    };

    if existing == fresh.as_bytes() {
        return Ok(ManifestStatus::UpToDate);
    }

    let drift = std::str::from_utf8(&existing)
        .ok()
        .and_then(|text| ManifestIndex::parse(text).ok())
        .zip(ManifestIndex::parse(&fresh).ok())
        .map(|(old, new)| ManifestDrift::between(&old, &new));

    tracing::debug!(path = %path.display(), ?drift, "manifest is stale");
    Ok(ManifestStatus::Stale { drift })
}
