//! Manifest Index Value Object
//!
//! The runtime view of an emitted manifest: the ordered `(name, digest)`
//! pairs read back out of the text, queried the same way the generated
//! accessor queries its map literal.

use crate::domain::value_objects::ContentDigest;
use crate::error::LookupError;
use crate::escaping;

/// Prefix shared by every entry line in every dialect
const ENTRY_PREFIX: &str = "  \"";

/// Rewrite `\` separators to `/`, as the accessor does before lookup
pub fn normalize_name(name: &str) -> String {
    name.replace('\\', "/")
}

/// Parsed name -> digest table of an emitted manifest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ManifestIndex {
    entries: Vec<(String, ContentDigest)>,
}

impl ManifestIndex {
    /// Read every entry line of a manifest in emission order
    ///
    /// Header and footer lines are skipped; only lines starting with two
    /// spaces and a double quote are entries.
    pub fn parse(text: &str) -> Result<Self, LookupError> {
        let mut entries = Vec::new();

        for (idx, line) in text.lines().enumerate() {
            if !line.starts_with(ENTRY_PREFIX) {
                continue;
            }
            let malformed = |reason: String| LookupError::Malformed {
                line: idx + 1,
                reason,
            };

            let (name, rest) = escaping::unquote(&line[2..]).map_err(malformed)?;
            let rest = rest
                .strip_prefix(':')
                .ok_or_else(|| malformed("expected ':' after name".to_string()))?
                .trim_start_matches(' ');
            let (hex, rest) = escaping::unquote(rest).map_err(malformed)?;
            if rest != "," {
                return Err(malformed("expected ',' after digest".to_string()));
            }
            let digest = ContentDigest::parse(&hex).map_err(|e| malformed(e.to_string()))?;

            entries.push((name, digest));
        }

        Ok(Self { entries })
    }

    /// Look up a digest by name
    ///
    /// `\` in the query is treated as `/`. When a name occurs more than once
    /// the last entry wins, matching map-literal semantics.
    pub fn get(&self, name: &str) -> Result<&ContentDigest, LookupError> {
        let canonical = normalize_name(name);
        self.entries
            .iter()
            .rev()
            .find(|(entry, _)| *entry == canonical)
            .map(|(_, digest)| digest)
            .ok_or_else(|| LookupError::NotFound {
                name: name.to_string(),
            })
    }

    /// Check if a name resolves
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_ok()
    }

    /// Names in emission order (duplicates included)
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    /// Entries in emission order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ContentDigest)> {
        self.entries.iter().map(|(name, digest)| (name.as_str(), digest))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
