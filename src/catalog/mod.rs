//! Tile catalog: manifest reading and tile-config placement loading.

/// Tile manifest parsing.
pub mod manifest;
/// Tile-config boundary model and placement records.
pub mod tile;

pub use manifest::read_manifest;
pub use tile::{TilePlacement, global_extent, load_placements};
