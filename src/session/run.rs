use std::path::{Path, PathBuf};

use crate::catalog::manifest::read_manifest;
use crate::catalog::tile::{global_extent, load_placements};
use crate::compose::ComposeOpts;
use crate::compose::rows::{band_rows, write_row_descriptors};
use crate::compose::toplevel::build_top_level;
use crate::foundation::error::{MosaicError, MosaicResult};
use crate::foundation::geom::{GlobalExtent, PixelType};
use crate::materialize::artifacts::ArtifactTracker;
use crate::materialize::translate::{Materializer, OutputKind};

/// Options for one mosaic run.
#[derive(Clone, Copy, Debug)]
pub struct MosaicOpts {
    /// Data type declared for every descriptor band.
    pub pixel_type: PixelType,
    /// Write the gray color interpretation tag on each band.
    pub gray: bool,
    /// Number of output bands.
    pub band_count: u32,
}

impl Default for MosaicOpts {
    fn default() -> Self {
        Self {
            pixel_type: PixelType::Float32,
            gray: true,
            band_count: 1,
        }
    }
}

impl From<MosaicOpts> for ComposeOpts {
    fn from(opts: MosaicOpts) -> Self {
        Self {
            pixel_type: opts.pixel_type,
            gray: opts.gray,
            band_count: opts.band_count,
        }
    }
}

/// Summary of a composition pass.
#[derive(Clone, Copy, Debug)]
pub struct ComposeReport {
    /// Tiles read from the catalog.
    pub tile_count: usize,
    /// Row bands composed.
    pub row_count: usize,
    /// Tiles skipped because their sub-raster is missing (mosaic holes).
    pub skipped: usize,
    /// Global extent covered by the mosaic.
    pub extent: GlobalExtent,
}

/// One mosaic run, from tile catalog to final artifact.
///
/// The session validates the requested output up front, composes the row
/// and top-level descriptors, and owns the lifecycle of every intermediate
/// it writes: a run that materializes removes its descriptors on every
/// exit path, while a `.vrt` run persists them as part of the output.
#[derive(Debug)]
pub struct MosaicSession {
    out_path: PathBuf,
    kind: OutputKind,
    descriptor_path: PathBuf,
    opts: MosaicOpts,
    artifacts: ArtifactTracker,
    composed: bool,
}

impl MosaicSession {
    /// Create a session for the requested output path.
    ///
    /// Configuration errors (an unsupported extension, a zero band count)
    /// surface here, before anything is written.
    pub fn new(out_path: impl Into<PathBuf>, opts: MosaicOpts) -> MosaicResult<Self> {
        let out_path = out_path.into();
        let kind = OutputKind::from_path(&out_path)?;
        ComposeOpts::from(opts).validate()?;

        // For concrete output the descriptor sits next to it, same stem.
        let descriptor_path = match kind {
            OutputKind::Virtual => out_path.clone(),
            OutputKind::GeoTiff => out_path.with_extension("vrt"),
        };

        Ok(Self {
            out_path,
            kind,
            descriptor_path,
            opts,
            artifacts: ArtifactTracker::new(),
            composed: false,
        })
    }

    /// Path of the top-level descriptor this session writes.
    pub fn descriptor_path(&self) -> &Path {
        &self.descriptor_path
    }

    /// Compose from a tile manifest file.
    pub fn compose_manifest(&mut self, manifest: &Path, sub_img: &Path) -> MosaicResult<ComposeReport> {
        let configs = read_manifest(manifest)?;
        self.compose_catalog(&configs, sub_img)
    }

    /// Compose from explicit tile-config paths.
    ///
    /// Runs the full pipeline: placement loading, extent computation, row
    /// banding, row descriptors, top-level descriptor. Intermediates are
    /// registered with the artifact tracker as they are written.
    #[tracing::instrument(skip(self, configs), fields(out = %self.out_path.display()))]
    pub fn compose_catalog(
        &mut self,
        configs: &[PathBuf],
        sub_img: &Path,
    ) -> MosaicResult<ComposeReport> {
        let placements = load_placements(configs)?;
        if placements.is_empty() {
            return Err(MosaicError::insufficient_input(
                "tile set is empty, nothing to mosaic",
            ));
        }
        let extent = global_extent(&placements)?;

        let out_dir = self
            .out_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."))
            .to_path_buf();
        let stem = self
            .out_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .ok_or_else(|| {
                MosaicError::configuration(format!(
                    "output path '{}' has no file name",
                    self.out_path.display()
                ))
            })?;

        let copts = ComposeOpts::from(self.opts);

        let grouping = band_rows(&placements, sub_img, extent, &out_dir)?;
        let rows = write_row_descriptors(&grouping.rows, extent, &out_dir, &stem, &copts)?;
        for row in &rows {
            self.artifacts.register(&row.path);
        }

        let top = build_top_level(&rows, extent, &out_dir, &copts)?;
        top.write_to(&self.descriptor_path)?;
        self.artifacts.register(&self.descriptor_path);
        self.composed = true;

        tracing::debug!(
            tiles = placements.len(),
            rows = rows.len(),
            skipped = grouping.skipped,
            "composed mosaic descriptors"
        );
        Ok(ComposeReport {
            tile_count: placements.len(),
            row_count: rows.len(),
            skipped: grouping.skipped,
            extent,
        })
    }

    /// Finish the run and return the final artifact path.
    ///
    /// `.vrt` output persists the composed descriptors as the final
    /// artifact. `.tif` output rasterizes through `materializer`; the
    /// intermediates are removed whether or not it succeeds, so a failed
    /// conversion never strands descriptor files.
    pub fn finish(mut self, materializer: &dyn Materializer) -> MosaicResult<PathBuf> {
        if !self.composed {
            return Err(MosaicError::configuration(
                "session finished before composing a mosaic",
            ));
        }
        match self.kind {
            OutputKind::Virtual => {
                self.artifacts.persist_all();
                Ok(self.out_path.clone())
            }
            OutputKind::GeoTiff => {
                materializer.materialize(&self.descriptor_path, &self.out_path)?;
                Ok(self.out_path.clone())
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/run.rs"]
mod tests;
