//! Manifest Renderer
//!
//! Emits the three sections of a manifest against any writable sink:
//! header, one line per entry, footer. Call order is the caller's job;
//! nothing here checks it.

use std::io::{self, Write};

use crate::domain::entities::Asset;
use crate::domain::ports::ManifestDialect;
use crate::domain::value_objects::{ContentDigest, Dialect};

/// Writes manifest text for one dialect
pub struct ManifestRenderer {
    dialect: Box<dyn ManifestDialect>,
    align: bool,
}

impl ManifestRenderer {
    pub fn new(dialect: Box<dyn ManifestDialect>) -> Self {
        Self {
            dialect,
            align: false,
        }
    }

    /// Pad entries so digests start in the same column
    pub fn with_alignment(mut self, align: bool) -> Self {
        self.align = align;
        self
    }

    pub fn dialect(&self) -> Dialect {
        self.dialect.dialect()
    }

    /// Accessor function and the opening of the map literal
    pub fn emit_header<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        sink.write_all(self.dialect.header().as_bytes())
    }

    /// One `  "<name>": "<digest>",` line
    ///
    /// `max_name_len` only matters when alignment is on.
    pub fn emit_entry<W: Write + ?Sized>(
        &self,
        sink: &mut W,
        asset: &Asset,
        digest: &ContentDigest,
        max_name_len: usize,
    ) -> io::Result<()> {
        sink.write_all(self.entry_line(asset.name(), digest, max_name_len).as_bytes())
    }

    /// Closing delimiter of the map literal
    pub fn emit_footer<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        sink.write_all(self.dialect.footer().as_bytes())
    }

    /// Widest name literal in `assets` as it appears on an entry line
    ///
    /// Measured in chars of the quoted, escaped literal so padding lines up
    /// for names that need escapes. 0 for an empty list.
    pub fn max_name_len(&self, assets: &[Asset]) -> usize {
        assets
            .iter()
            .map(|asset| literal_width(&self.dialect.quote(asset.name())))
            .max()
            .unwrap_or(0)
    }

    /// Format a single entry line, newline included
    ///
    /// `max_name_len` is a literal width from [`ManifestRenderer::max_name_len`].
    pub fn entry_line(&self, name: &str, digest: &ContentDigest, max_name_len: usize) -> String {
        let literal = self.dialect.quote(name);
        let padding = if self.align {
            max_name_len.saturating_sub(literal_width(&literal))
        } else {
            0
        };
        format!("  {}: {}\"{}\",\n", literal, " ".repeat(padding), digest)
    }
}

fn literal_width(literal: &str) -> usize {
    literal.chars().count()
}

impl std::fmt::Debug for ManifestRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManifestRenderer")
            .field("dialect", &self.dialect())
            .field("align", &self.align)
            .finish()
    }
}
