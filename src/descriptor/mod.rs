//! Virtual raster descriptors: the metadata-only composition model and its
//! GDAL VRT XML serialization.

/// Descriptor and source-entry model.
pub mod model;
/// Deterministic VRT XML writer.
pub mod xml;

pub use model::{SourceEntry, VirtualDescriptor};
