//! Go dialect
//!
//! Emits `AssetHash(name)` and the `_binhash` map. The header is kept byte
//! for byte identical to the long-standing generated Go output, trailing
//! space included, so regenerated files diff cleanly against old ones.

use crate::domain::ports::ManifestDialect;
use crate::domain::value_objects::Dialect;

const HEADER: &str = concat!(
    "// AssetHash get the file hash \n",
    "func AssetHash(name string) (string, error) {\n",
    "\tcanonicalName := strings.Replace(name, \"\\\\\", \"/\", -1)\n",
    "\tif f, ok := _binhash[canonicalName]; ok {\n",
    "\t\treturn f, nil\n",
    "\t}\n",
    "\treturn \"\", fmt.Errorf(\"Asset %s not found\", name)\n",
    "}\n",
    "\n",
    "// _binhash is a table, holding each asset hash, mapped to its name.\n",
    "var _binhash = map[string]string{\n",
);

const FOOTER: &str = "}\n\n";

/// Go dialect adapter
#[derive(Debug, Clone, Copy, Default)]
pub struct GoDialect;

impl GoDialect {
    pub fn new() -> Self {
        Self
    }
}

impl ManifestDialect for GoDialect {
    fn dialect(&self) -> Dialect {
        Dialect::Go
    }

    fn header(&self) -> &'static str {
        HEADER
    }

    fn footer(&self) -> &'static str {
        FOOTER
    }
}
