//! vmosaic assembles a large raster mosaic from many placed tile rasters
//! without copying pixel data until final materialization.
//!
//! Tiles carry a region of interest placing them on a shared pixel grid.
//! The engine computes the global extent, groups tiles into row bands,
//! writes one virtual (metadata-only) descriptor per row plus a top-level
//! descriptor stitching the rows (GDAL VRT files any mainstream raster
//! tool can open), and optionally rasterizes the result through the system
//! `gdal_translate`. The public API is session-oriented:
//!
//! - Create a [`MosaicSession`] for the requested output path
//! - Compose a manifest or explicit tile-config list into descriptors
//! - Finish by keeping the `.vrt` or materializing a `.tif` through a
//!   [`Materializer`]
//!
//! A direct-placement path ([`compose_direct`]) builds a single descriptor
//! straight from `(file, x, y)` tuples for simpler one-shot mosaics.
#![forbid(unsafe_code)]

/// Tile catalog: manifests and placements.
pub mod catalog;
/// Row, top-level, and direct-placement composition.
pub mod compose;
/// Virtual descriptor model and VRT serialization.
pub mod descriptor;
/// Error taxonomy, pixel geometry, path helpers.
pub mod foundation;
/// Output kinds, external rasterizer, artifact lifecycle.
pub mod materialize;
/// Session-oriented run orchestration.
pub mod session;

pub use crate::foundation::error::{MosaicError, MosaicResult};
pub use crate::foundation::geom::{GlobalExtent, PixelRect, PixelType};

pub use crate::catalog::manifest::read_manifest;
pub use crate::catalog::tile::{TilePlacement, global_extent, load_placements};
pub use crate::compose::direct::{
    DirectPlacement, GdalinfoProbe, RasterInfo, RasterProbe, compose_direct, write_direct,
};
pub use crate::compose::{
    ComposeOpts, RowBand, RowDescriptor, RowGrouping, band_rows, build_top_level,
    write_row_descriptors,
};
pub use crate::descriptor::model::{SourceEntry, VirtualDescriptor};
pub use crate::materialize::artifacts::ArtifactTracker;
pub use crate::materialize::translate::{
    GdalTranslate, Materializer, OutputKind, is_gdal_translate_on_path,
};
pub use crate::session::run::{ComposeReport, MosaicOpts, MosaicSession};
