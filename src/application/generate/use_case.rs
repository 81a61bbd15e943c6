//! Manifest Generator
//!
//! One straight pass over the asset list: header, one digested entry per
//! asset in input order, footer. The first failure stops the pass; whatever
//! was already written to the sink stays there and is the caller's to drop.

use std::io::{self, Write};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::domain::entities::Asset;
use crate::domain::policies::DuplicatePolicy;
use crate::domain::ports::AssetReader;
use crate::domain::services::{DigestComputer, ManifestRenderer};
use crate::domain::value_objects::ContentDigest;
use crate::error::{ManifestError, ManifestResult};
use crate::infrastructure::adapters::get_dialect;
use crate::infrastructure::fs::LocalFs;

use super::options::ManifestOptions;

/// Sink label used when the caller does not name the sink
const DEFAULT_SINK_LABEL: &str = "manifest output";

/// Generates manifests from asset lists
#[derive(Debug)]
pub struct ManifestGenerator<R> {
    digests: DigestComputer<R>,
    renderer: ManifestRenderer,
    duplicates: DuplicatePolicy,
}

impl ManifestGenerator<LocalFs> {
    /// Generator reading assets from the local file system
    pub fn new(options: &ManifestOptions) -> Self {
        Self::with_reader(LocalFs::new(), options)
    }
}

impl<R: AssetReader> ManifestGenerator<R> {
    /// Generator reading assets through a custom reader
    pub fn with_reader(reader: R, options: &ManifestOptions) -> Self {
        Self {
            digests: DigestComputer::new(reader),
            renderer: ManifestRenderer::new(get_dialect(options.dialect))
                .with_alignment(options.align),
            duplicates: options.duplicates,
        }
    }

    /// Write a complete manifest for `assets` to `sink`
    pub fn generate<W: Write + ?Sized>(&self, sink: &mut W, assets: &[Asset]) -> ManifestResult<()> {
        self.generate_labeled(sink, DEFAULT_SINK_LABEL, assets)
    }

    /// Like [`ManifestGenerator::generate`], naming the sink in write errors
    pub fn generate_labeled<W: Write + ?Sized>(
        &self,
        sink: &mut W,
        sink_label: &str,
        assets: &[Asset],
    ) -> ManifestResult<()> {
        self.duplicates.enforce(assets)?;

        let write_error = |source| ManifestError::WriteSink {
            sink: sink_label.to_string(),
            source,
        };
        let max_name_len = self.renderer.max_name_len(assets);

        self.renderer.emit_header(sink).map_err(write_error)?;

        for asset in assets {
            if asset.has_unreachable_name() {
                warn!(
                    name = asset.name(),
                    "asset name contains '\\' and cannot be matched by the accessor"
                );
            }

            let digest = self.digests.compute(asset.source_path())?;
            debug!(
                name = asset.name(),
                source = %asset.source_path().display(),
                digest = digest.as_str(),
                "digested asset"
            );

            self.renderer
                .emit_entry(sink, asset, &digest, max_name_len)
                .map_err(write_error)?;
        }

        self.renderer.emit_footer(sink).map_err(write_error)?;
        sink.flush().map_err(write_error)?;

        info!(
            entries = assets.len(),
            dialect = %self.renderer.dialect(),
            sink = sink_label,
            "generated manifest"
        );
        Ok(())
    }

    /// Render the manifest into memory
    pub fn render(&self, assets: &[Asset]) -> ManifestResult<String> {
        let mut buf = Vec::new();
        self.generate(&mut buf, assets)?;
        String::from_utf8(buf).map_err(|e| ManifestError::WriteSink {
            sink: DEFAULT_SINK_LABEL.to_string(),
            source: io::Error::new(io::ErrorKind::InvalidData, e),
        })
    }

    /// Digest a single source through this generator's reader
    pub fn digest(&self, source_path: &Path) -> ManifestResult<ContentDigest> {
        self.digests.compute(source_path)
    }
}

/// Digest one file on disk
pub fn compute_digest(source_path: &Path) -> ManifestResult<ContentDigest> {
    DigestComputer::new(LocalFs::new()).compute(source_path)
}

/// Write a manifest for files on disk to `sink`
pub fn generate_manifest<W: Write + ?Sized>(
    sink: &mut W,
    assets: &[Asset],
    options: &ManifestOptions,
) -> ManifestResult<()> {
    ManifestGenerator::new(options).generate(sink, assets)
}

/// Render a manifest for files on disk into a string
pub fn render_manifest(assets: &[Asset], options: &ManifestOptions) -> ManifestResult<String> {
    ManifestGenerator::new(options).render(assets)
}

/// Generate a manifest and save it to `path`
///
/// The file is only replaced once the whole manifest rendered successfully,
/// so a failed run leaves any previous file untouched.
pub fn write_manifest_file(
    path: &Path,
    assets: &[Asset],
    options: &ManifestOptions,
) -> ManifestResult<()> {
    let sink_label = path.display().to_string();
    let mut buf = Vec::new();
    ManifestGenerator::new(options).generate_labeled(&mut buf, &sink_label, assets)?;

    LocalFs::new()
        .write_atomic(path, &buf)
        .map_err(|source| ManifestError::WriteSink {
            sink: sink_label,
            source,
        })
}
