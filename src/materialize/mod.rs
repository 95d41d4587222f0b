//! Materialization: output-kind selection, the external rasterizer
//! capability, and intermediate-artifact lifecycle.

/// Run-scoped intermediate-file tracking.
pub mod artifacts;
/// Output kinds and the `gdal_translate` materializer.
pub mod translate;

pub use artifacts::ArtifactTracker;
pub use translate::{GdalTranslate, Materializer, OutputKind, is_gdal_translate_on_path};
