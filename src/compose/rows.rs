use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::catalog::tile::TilePlacement;
use crate::compose::ComposeOpts;
use crate::descriptor::model::{SourceEntry, VirtualDescriptor};
use crate::foundation::error::{MosaicError, MosaicResult};
use crate::foundation::geom::{GlobalExtent, PixelRect};
use crate::foundation::paths::{relative_from, to_slash};

/// The set of tiles sharing one row origin, composed horizontally.
///
/// Entries are band-1 sources in tile input order; destination windows are
/// horizontal only (`y = 0` in the row's local frame).
#[derive(Clone, Debug)]
pub struct RowBand {
    /// Row origin shared by every member tile.
    pub y: i64,
    /// Row height; every member tile must declare it.
    pub height: u32,
    /// Ordered band-1 source entries.
    pub entries: Vec<SourceEntry>,
}

/// Result of grouping a tile set into row bands.
#[derive(Clone, Debug)]
pub struct RowGrouping {
    /// Bands in ascending row-origin order.
    pub rows: Vec<RowBand>,
    /// Tiles skipped because their sub-raster does not exist.
    pub skipped: usize,
}

/// A row descriptor written to disk.
#[derive(Clone, Debug)]
pub struct RowDescriptor {
    /// Row origin in the global grid.
    pub y: i64,
    /// Row height in pixels.
    pub height: u32,
    /// Where the descriptor was written.
    pub path: PathBuf,
}

/// Group placements into row bands keyed by their exact row origin.
///
/// For each tile in input order, the requested sub-raster is resolved
/// against the tile's own directory; a missing file skips the tile with a
/// warning, since partial mosaics with holes are a supported outcome, not
/// a failure. Surviving tiles map their whole image (`src = (0,0,w,h)`) to
/// `dst = (x - min_x, 0, w, h)`. Source paths are made relative to
/// `out_dir`, where the row descriptors will live.
///
/// Tiles placed in one band must agree on the row height; a mismatch fails
/// fast rather than producing windows that disagree with the band height.
pub fn band_rows(
    placements: &[TilePlacement],
    sub_img: &Path,
    extent: GlobalExtent,
    out_dir: &Path,
) -> MosaicResult<RowGrouping> {
    let mut bands: BTreeMap<i64, RowBand> = BTreeMap::new();
    let mut skipped = 0usize;

    for tile in placements {
        let roi = tile.roi;
        let band = bands.entry(roi.y).or_insert_with(|| RowBand {
            y: roi.y,
            height: roi.h,
            entries: Vec::new(),
        });
        if band.height != roi.h {
            return Err(MosaicError::consistency(format!(
                "row {}: tile '{}' declares height {}, but the row has height {}",
                roi.y,
                tile.config_path.display(),
                roi.h,
                band.height
            )));
        }

        let sub_raster = tile.dir().join(sub_img);
        if !sub_raster.exists() {
            tracing::warn!(
                path = %sub_raster.display(),
                "sub-raster missing, skipping tile"
            );
            skipped += 1;
            continue;
        }

        let rel = relative_from(&sub_raster, out_dir)?;
        band.entries.push(SourceEntry {
            source_file: to_slash(&rel),
            relative_to_descriptor: true,
            source_band: 1,
            src_rect: PixelRect {
                x: 0,
                y: 0,
                w: roi.w,
                h: roi.h,
            },
            dst_rect: PixelRect {
                x: roi.x - extent.min_x,
                y: 0,
                w: roi.w,
                h: roi.h,
            },
        });
    }

    Ok(RowGrouping {
        rows: bands.into_values().collect(),
        skipped,
    })
}

/// Write one descriptor per row band into `out_dir`.
///
/// Row files are named `<stem>_row<y>.vrt`. Band 1 holds the grouped
/// entries; further bands duplicate them with the source band rewritten to
/// the target band number.
pub fn write_row_descriptors(
    rows: &[RowBand],
    extent: GlobalExtent,
    out_dir: &Path,
    stem: &str,
    opts: &ComposeOpts,
) -> MosaicResult<Vec<RowDescriptor>> {
    opts.validate()?;
    let (width, _) = extent.raster_size()?;

    let mut written = Vec::with_capacity(rows.len());
    for row in rows {
        let descriptor = VirtualDescriptor::from_uniform_sources(
            width,
            row.height,
            opts.pixel_type,
            opts.gray,
            opts.band_count,
            row.entries.clone(),
        )?;
        let path = out_dir.join(format!("{stem}_row{}.vrt", row.y));
        descriptor.write_to(&path)?;
        written.push(RowDescriptor {
            y: row.y,
            height: row.height,
            path,
        });
    }
    Ok(written)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/rows.rs"]
mod tests;
