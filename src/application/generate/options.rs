//! Manifest Options
//!
//! Settings consumed by the generator.

use crate::domain::policies::DuplicatePolicy;
use crate::domain::value_objects::Dialect;

/// Options for manifest generation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ManifestOptions {
    /// Target language of the emitted text
    pub dialect: Dialect,
    /// What to do with repeated asset names
    pub duplicates: DuplicatePolicy,
    /// Pad entry lines so digests line up (cosmetic only)
    pub align: bool,
}

impl ManifestOptions {
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            ..Self::default()
        }
    }

    pub fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }

    pub fn with_alignment(mut self, align: bool) -> Self {
        self.align = align;
        self
    }
}
