//! Python dialect
//!
//! Emits `asset_hash(name)` over a module-level dict. A miss raises
//! `KeyError` naming the queried asset.

use crate::domain::ports::ManifestDialect;
use crate::domain::value_objects::Dialect;

const HEADER: &str = concat!(
    "def asset_hash(name: str) -> str:\n",
    "    \"\"\"Return the content hash of an embedded asset.\"\"\"\n",
    "    canonical_name = name.replace(\"\\\\\", \"/\")\n",
    "    try:\n",
    "        return _binhash[canonical_name]\n",
    "    except KeyError:\n",
    "        raise KeyError(f\"Asset {name} not found\") from None\n",
    "\n",
    "\n",
    "# _binhash is a table, holding each asset hash, mapped to its name.\n",
    "_binhash = {\n",
);

const FOOTER: &str = "}\n\n";

/// Python dialect adapter
#[derive(Debug, Clone, Copy, Default)]
pub struct PythonDialect;

impl PythonDialect {
    pub fn new() -> Self {
        Self
    }
}

impl ManifestDialect for PythonDialect {
    fn dialect(&self) -> Dialect {
        Dialect::Python
    }

    fn header(&self) -> &'static str {
        HEADER
    }

    fn footer(&self) -> &'static str {
        FOOTER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_normalizes_backslashes() {
        assert!(PythonDialect
            .header()
            .contains(r#"canonical_name = name.replace("\\", "/")"#));
    }

    #[test]
    fn miss_raises_key_error_with_name() {
        assert!(PythonDialect
            .header()
            .contains(r#"raise KeyError(f"Asset {name} not found")"#));
    }

    #[test]
    fn header_opens_dict() {
        assert!(PythonDialect.header().ends_with("_binhash = {\n"));
    }
}
