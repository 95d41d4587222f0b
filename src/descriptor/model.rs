use crate::foundation::error::{MosaicError, MosaicResult};
use crate::foundation::geom::{PixelRect, PixelType};

/// One reference, within a virtual descriptor, to a source file/band and
/// the pixel-window mapping from that source into the descriptor's output
/// space.
///
/// Entries compose in insertion order with painter's-algorithm semantics:
/// where destination windows overlap, a later entry's pixels end up on top
/// once materialized. Overlap is never an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceEntry {
    /// Source path as serialized, always with `/` separators.
    pub source_file: String,
    /// Whether `source_file` resolves relative to the descriptor's own
    /// directory.
    pub relative_to_descriptor: bool,
    /// 1-based band read from the source.
    pub source_band: u32,
    /// Window cropped from the source raster.
    pub src_rect: PixelRect,
    /// Window painted into the descriptor's output space.
    pub dst_rect: PixelRect,
}

impl SourceEntry {
    /// Copy of this entry reading a different source band.
    pub fn with_source_band(&self, band: u32) -> Self {
        Self {
            source_band: band,
            ..self.clone()
        }
    }
}

/// Metadata-only raster description referencing external files and pixel
/// windows.
///
/// A descriptor can itself be referenced as another descriptor's source,
/// which is how row descriptors become sources of the top-level mosaic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VirtualDescriptor {
    width: u32,
    height: u32,
    pixel_type: PixelType,
    gray: bool,
    bands: Vec<Vec<SourceEntry>>,
}

impl VirtualDescriptor {
    /// Create an empty descriptor with `band_count` bands.
    ///
    /// `gray` controls whether bands carry a gray color interpretation tag.
    pub fn new(
        width: u32,
        height: u32,
        pixel_type: PixelType,
        gray: bool,
        band_count: u32,
    ) -> MosaicResult<Self> {
        if width == 0 || height == 0 {
            return Err(MosaicError::configuration(format!(
                "descriptor size must be non-zero, got {width}x{height}"
            )));
        }
        if band_count == 0 {
            return Err(MosaicError::configuration(
                "descriptor band count must be at least 1",
            ));
        }
        Ok(Self {
            width,
            height,
            pixel_type,
            gray,
            bands: vec![Vec::new(); band_count as usize],
        })
    }

    /// Build a descriptor whose bands all map onto the same source windows.
    ///
    /// `entries` describe band 1; each further output band duplicates them
    /// with the source band rewritten to the target band number (output
    /// band `b` reads input band `b`).
    pub fn from_uniform_sources(
        width: u32,
        height: u32,
        pixel_type: PixelType,
        gray: bool,
        band_count: u32,
        entries: Vec<SourceEntry>,
    ) -> MosaicResult<Self> {
        let mut descriptor = Self::new(width, height, pixel_type, gray, band_count)?;
        for band in 2..=band_count {
            descriptor.bands[band as usize - 1] =
                entries.iter().map(|e| e.with_source_band(band)).collect();
        }
        descriptor.bands[0] = entries;
        Ok(descriptor)
    }

    /// Append a source entry to the given 1-based band.
    pub fn push_source(&mut self, band: u32, entry: SourceEntry) -> MosaicResult<()> {
        let idx = band
            .checked_sub(1)
            .map(|b| b as usize)
            .filter(|b| *b < self.bands.len())
            .ok_or_else(|| {
                MosaicError::configuration(format!(
                    "band {band} out of range for a {}-band descriptor",
                    self.bands.len()
                ))
            })?;
        self.bands[idx].push(entry);
        Ok(())
    }

    /// Raster width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Raster height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Data type declared for every band.
    pub fn pixel_type(&self) -> PixelType {
        self.pixel_type
    }

    /// Whether bands carry the gray color interpretation tag.
    pub fn gray(&self) -> bool {
        self.gray
    }

    /// Number of bands.
    pub fn band_count(&self) -> u32 {
        self.bands.len() as u32
    }

    /// Ordered source entries per band, band 1 first.
    pub fn bands(&self) -> &[Vec<SourceEntry>] {
        &self.bands
    }
}

#[cfg(test)]
#[path = "../../tests/unit/descriptor/model.rs"]
mod tests;
