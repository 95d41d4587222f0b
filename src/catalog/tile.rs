use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::foundation::error::{MosaicError, MosaicResult};
use crate::foundation::geom::{GlobalExtent, PixelRect};

/// JSON boundary model of a tile config.
///
/// Only the ROI is required here; collaborators store additional fields in
/// the same document, which are ignored.
#[derive(Debug, Clone, Deserialize)]
struct TileConfigDef {
    roi: RoiDef,
}

#[derive(Debug, Clone, Copy, Deserialize)]
struct RoiDef {
    x: i64,
    y: i64,
    w: u32,
    h: u32,
}

/// One tile's placement in the shared pixel grid, read from its config.
///
/// Immutable once read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TilePlacement {
    /// Path of the tile config this placement was read from.
    pub config_path: PathBuf,
    /// Placement rectangle in global pixel units.
    pub roi: PixelRect,
}

impl TilePlacement {
    /// Load a placement from a tile-config JSON file.
    ///
    /// An unreadable file, an undecodable document, a missing or
    /// non-numeric ROI field, and a zero-sized ROI are all malformed-config
    /// errors.
    pub fn from_config(path: impl Into<PathBuf>) -> MosaicResult<Self> {
        let path = path.into();
        let f = File::open(&path).map_err(|e| {
            MosaicError::malformed(format!("open tile config '{}': {e}", path.display()))
        })?;
        let def: TileConfigDef = serde_json::from_reader(BufReader::new(f)).map_err(|e| {
            MosaicError::malformed(format!("parse tile config '{}': {e}", path.display()))
        })?;

        let roi = PixelRect::new(def.roi.x, def.roi.y, def.roi.w, def.roi.h).map_err(|_| {
            MosaicError::malformed(format!(
                "tile config '{}' declares a zero-sized roi ({}x{})",
                path.display(),
                def.roi.w,
                def.roi.h
            ))
        })?;

        Ok(Self {
            config_path: path,
            roi,
        })
    }

    /// Directory the tile config lives in; sub-raster paths resolve here.
    pub fn dir(&self) -> &Path {
        self.config_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
    }
}

/// Load placements for every config path, preserving input order.
pub fn load_placements(configs: &[PathBuf]) -> MosaicResult<Vec<TilePlacement>> {
    configs
        .iter()
        .map(|path| TilePlacement::from_config(path.clone()))
        .collect()
}

/// Compute the global extent over a set of placements.
///
/// An empty set is rejected before any extent arithmetic runs.
pub fn global_extent(placements: &[TilePlacement]) -> MosaicResult<GlobalExtent> {
    GlobalExtent::from_rois(placements.iter().map(|t| t.roi))
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/tile.rs"]
mod tests;
