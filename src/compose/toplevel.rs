use std::path::Path;

use crate::compose::ComposeOpts;
use crate::compose::rows::RowDescriptor;
use crate::descriptor::model::{SourceEntry, VirtualDescriptor};
use crate::foundation::error::MosaicResult;
use crate::foundation::geom::{GlobalExtent, PixelRect};
use crate::foundation::paths::{relative_from, to_slash};

/// Stitch row descriptors vertically into one descriptor spanning the
/// global extent.
///
/// Each row contributes one full-width source entry placed at
/// `dst = (0, row_y - min_y, width, row_height)`, in ascending row order.
/// Band indices are forwarded unchanged: the row descriptors already
/// expose the requested band count, so top-level band `b` reads row band
/// `b`.
pub fn build_top_level(
    rows: &[RowDescriptor],
    extent: GlobalExtent,
    top_dir: &Path,
    opts: &ComposeOpts,
) -> MosaicResult<VirtualDescriptor> {
    opts.validate()?;
    let (width, height) = extent.raster_size()?;

    let mut entries = Vec::with_capacity(rows.len());
    for row in rows {
        let rel = relative_from(&row.path, top_dir)?;
        entries.push(SourceEntry {
            source_file: to_slash(&rel),
            relative_to_descriptor: true,
            source_band: 1,
            src_rect: PixelRect {
                x: 0,
                y: 0,
                w: width,
                h: row.height,
            },
            dst_rect: PixelRect {
                x: 0,
                y: row.y - extent.min_y,
                w: width,
                h: row.height,
            },
        });
    }

    VirtualDescriptor::from_uniform_sources(
        width,
        height,
        opts.pixel_type,
        opts.gray,
        opts.band_count,
        entries,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/compose/toplevel.rs"]
mod tests;
