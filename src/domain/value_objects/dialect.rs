//! Dialect Value Object
//!
//! The target language a manifest is emitted in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Target language of the emitted manifest
///
/// Every dialect shares the entry line format `  "<name>": "<digest>",` and
/// only differs in the accessor boilerplate around it:
/// - `Go`: `AssetHash(name)` and a `map[string]string` literal (default)
/// - `JavaScript`: ES module exporting `assetHash(name)`
/// - `Python`: `asset_hash(name)` and a dict literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    #[default]
    Go,
    #[serde(alias = "js")]
    JavaScript,
    #[serde(alias = "py")]
    Python,
}

impl Dialect {
    /// All dialects, in declaration order
    pub const ALL: [Dialect; 3] = [Dialect::Go, Dialect::JavaScript, Dialect::Python];

    /// Canonical lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Dialect::Go => "go",
            Dialect::JavaScript => "javascript",
            Dialect::Python => "python",
        }
    }

    /// Conventional file extension for generated output
    pub fn file_extension(&self) -> &'static str {
        match self {
            Dialect::Go => "go",
            Dialect::JavaScript => "js",
            Dialect::Python => "py",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "go" | "golang" => Ok(Dialect::Go),
            "javascript" | "js" => Ok(Dialect::JavaScript),
            "python" | "py" => Ok(Dialect::Python),
            other => Err(format!(
                "unknown dialect '{}' (expected go, javascript or python)",
                other
            )),
        }
    }
}
