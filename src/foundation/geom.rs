use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{MosaicError, MosaicResult};

/// Placement rectangle `(x, y, w, h)` in the shared global pixel grid.
///
/// Origins may be negative relative to other tiles; the global extent
/// normalizes them. Sizes are always positive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PixelRect {
    /// Column origin.
    pub x: i64,
    /// Row origin.
    pub y: i64,
    /// Width in pixels.
    pub w: u32,
    /// Height in pixels.
    pub h: u32,
}

impl PixelRect {
    /// Create a validated rectangle with non-zero size.
    pub fn new(x: i64, y: i64, w: u32, h: u32) -> MosaicResult<Self> {
        if w == 0 || h == 0 {
            return Err(MosaicError::malformed(format!(
                "rectangle size must be non-zero, got {w}x{h}"
            )));
        }
        Ok(Self { x, y, w, h })
    }

    /// Exclusive right edge, `x + w`.
    pub fn max_x(self) -> i64 {
        self.x + i64::from(self.w)
    }

    /// Exclusive bottom edge, `y + h`.
    pub fn max_y(self) -> i64 {
        self.y + i64::from(self.h)
    }
}

/// Tightest bounding box covering a set of placement rectangles.
///
/// Derived data: recompute whenever the tile set changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlobalExtent {
    /// Minimum column over all placements.
    pub min_x: i64,
    /// Maximum exclusive right edge over all placements.
    pub max_x: i64,
    /// Minimum row over all placements.
    pub min_y: i64,
    /// Maximum exclusive bottom edge over all placements.
    pub max_y: i64,
}

impl GlobalExtent {
    /// Accumulate the extent of a non-empty sequence of rectangles.
    ///
    /// The empty set has no defined extent and is rejected up front.
    pub fn from_rois<I>(rois: I) -> MosaicResult<Self>
    where
        I: IntoIterator<Item = PixelRect>,
    {
        let mut iter = rois.into_iter();
        let first = iter.next().ok_or_else(|| {
            MosaicError::insufficient_input("cannot compute the extent of an empty tile set")
        })?;

        let mut extent = Self {
            min_x: first.x,
            max_x: first.max_x(),
            min_y: first.y,
            max_y: first.max_y(),
        };
        for roi in iter {
            extent.include(roi);
        }
        Ok(extent)
    }

    /// Grow the extent to cover `roi`.
    pub fn include(&mut self, roi: PixelRect) {
        self.min_x = self.min_x.min(roi.x);
        self.max_x = self.max_x.max(roi.max_x());
        self.min_y = self.min_y.min(roi.y);
        self.max_y = self.max_y.max(roi.max_y());
    }

    /// Total mosaic width, `max_x - min_x`.
    pub fn width(self) -> i64 {
        self.max_x - self.min_x
    }

    /// Total mosaic height, `max_y - min_y`.
    pub fn height(self) -> i64 {
        self.max_y - self.min_y
    }

    /// Width and height as raster dimensions.
    ///
    /// Extents are accumulated from non-empty rectangles so both sides are
    /// positive; dimensions beyond `u32` are rejected rather than truncated.
    pub fn raster_size(self) -> MosaicResult<(u32, u32)> {
        let w = u32::try_from(self.width());
        let h = u32::try_from(self.height());
        match (w, h) {
            (Ok(w), Ok(h)) => Ok((w, h)),
            _ => Err(MosaicError::configuration(format!(
                "mosaic extent {}x{} exceeds supported raster dimensions",
                self.width(),
                self.height()
            ))),
        }
    }
}

/// Raster data type, named after the GDAL spellings used in descriptors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum PixelType {
    /// 8-bit unsigned integer.
    Byte,
    /// 16-bit signed integer.
    Int16,
    /// 16-bit unsigned integer.
    UInt16,
    /// 32-bit signed integer.
    Int32,
    /// 32-bit unsigned integer.
    UInt32,
    /// 32-bit floating point.
    Float32,
    /// 64-bit floating point.
    Float64,
}

impl PixelType {
    /// Canonical GDAL name as written into descriptors.
    pub fn gdal_name(self) -> &'static str {
        match self {
            Self::Byte => "Byte",
            Self::Int16 => "Int16",
            Self::UInt16 => "UInt16",
            Self::Int32 => "Int32",
            Self::UInt32 => "UInt32",
            Self::Float32 => "Float32",
            Self::Float64 => "Float64",
        }
    }
}

impl fmt::Display for PixelType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.gdal_name())
    }
}

impl FromStr for PixelType {
    type Err = MosaicError;

    fn from_str(s: &str) -> MosaicResult<Self> {
        match s {
            "Byte" => Ok(Self::Byte),
            "Int16" => Ok(Self::Int16),
            "UInt16" => Ok(Self::UInt16),
            "Int32" => Ok(Self::Int32),
            "UInt32" => Ok(Self::UInt32),
            "Float32" => Ok(Self::Float32),
            "Float64" => Ok(Self::Float64),
            other => Err(MosaicError::malformed(format!(
                "unrecognized pixel data type '{other}'"
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/geom.rs"]
mod tests;
