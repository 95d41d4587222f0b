//! Mosaic composition: row banding, top-level stitching, and the
//! direct-placement path.

/// Direct-placement composition from explicit `(file, x, y)` tuples.
pub mod direct;
/// Row grouping and per-row descriptor building.
pub mod rows;
/// Vertical stitching of row descriptors into the top-level descriptor.
pub mod toplevel;

pub use direct::{
    DirectPlacement, GdalinfoProbe, RasterInfo, RasterProbe, compose_direct, write_direct,
};
pub use rows::{RowBand, RowDescriptor, RowGrouping, band_rows, write_row_descriptors};
pub use toplevel::build_top_level;

use crate::foundation::error::{MosaicError, MosaicResult};
use crate::foundation::geom::PixelType;

/// Options shared by the descriptor builders.
#[derive(Clone, Copy, Debug)]
pub struct ComposeOpts {
    /// Data type declared for every descriptor band.
    pub pixel_type: PixelType,
    /// Write the gray color interpretation tag on each band.
    pub gray: bool,
    /// Number of output bands (output band `b` reads input band `b`).
    pub band_count: u32,
}

impl Default for ComposeOpts {
    fn default() -> Self {
        Self {
            pixel_type: PixelType::Float32,
            gray: true,
            band_count: 1,
        }
    }
}

impl ComposeOpts {
    /// Reject option combinations no descriptor can be built from.
    pub fn validate(&self) -> MosaicResult<()> {
        if self.band_count == 0 {
            return Err(MosaicError::configuration(
                "band count must be at least 1",
            ));
        }
        Ok(())
    }
}
