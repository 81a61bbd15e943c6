//! Content Digest Value Object
//!
//! A validated, immutable SHA-256 digest of an asset's bytes, kept as the
//! lowercase hex string that ends up in the manifest.

use std::fmt;
use std::io::{self, Read};

use sha2::{Digest, Sha256};

use crate::error::InvalidDigest;

/// Content digest value object
///
/// Always exactly [`ContentDigest::HEX_LEN`] lowercase hex characters with no
/// prefix or separators. Identical bytes give identical digests regardless of
/// where they came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContentDigest(String);

impl ContentDigest {
    /// Length of the hex encoding of a 256-bit digest
    pub const HEX_LEN: usize = 64;

    /// Compute the digest of an in-memory buffer
    pub fn from_bytes(content: &[u8]) -> Self {
        Self(format!("{:x}", Sha256::digest(content)))
    }

    /// Compute the digest of a stream
    ///
    /// Content is fed to the hasher through a fixed-size copy buffer, so the
    /// stream is never held in memory as a whole.
    pub fn from_reader<R: Read>(mut reader: R) -> io::Result<Self> {
        let mut hasher = Sha256::new();
        io::copy(&mut reader, &mut hasher)?;
        Ok(Self(format!("{:x}", hasher.finalize())))
    }

    /// Validate an existing hex digest
    pub fn parse(hex: &str) -> Result<Self, InvalidDigest> {
        let valid = hex.len() == Self::HEX_LEN
            && hex
                .bytes()
                .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b));
        if valid {
            Ok(Self(hex.to_string()))
        } else {
            Err(InvalidDigest(hex.to_string()))
        }
    }

    /// Get the hex string
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this digest matches a hex string
    pub fn matches_str(&self, hex: &str) -> bool {
        self.0 == hex
    }
}

impl fmt::Display for ContentDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for ContentDigest {
    type Err = InvalidDigest;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ContentDigest {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
