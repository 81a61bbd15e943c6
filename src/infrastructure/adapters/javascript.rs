//! JavaScript dialect
//!
//! Emits an ES module: `export function assetHash(name)` over a frozen
//! object literal.

use crate::domain::ports::ManifestDialect;
use crate::domain::value_objects::Dialect;

const HEADER: &str = concat!(
    "// assetHash returns the content hash of an embedded asset.\n",
    "export function assetHash(name) {\n",
    "\tconst canonicalName = name.replace(/\\\\/g, \"/\");\n",
    "\tif (Object.prototype.hasOwnProperty.call(_binhash, canonicalName)) {\n",
    "\t\treturn _binhash[canonicalName];\n",
    "\t}\n",
    "\tthrow new Error(`Asset ${name} not found`);\n",
    "}\n",
    "\n",
    "// _binhash is a table, holding each asset hash, mapped to its name.\n",
    "const _binhash = Object.freeze({\n",
);

const FOOTER: &str = "});\n\n";

/// JavaScript dialect adapter
#[derive(Debug, Clone, Copy, Default)]
pub struct JavaScriptDialect;

impl JavaScriptDialect {
    pub fn new() -> Self {
        Self
    }
}

impl ManifestDialect for JavaScriptDialect {
    fn dialect(&self) -> Dialect {
        Dialect::JavaScript
    }

    fn header(&self) -> &'static str {
        HEADER
    }

    fn footer(&self) -> &'static str {
        FOOTER
    }
}
