use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Deserialize;

use crate::descriptor::model::{SourceEntry, VirtualDescriptor};
use crate::foundation::error::{MosaicError, MosaicResult};
use crate::foundation::geom::{PixelRect, PixelType};
use crate::foundation::paths::to_slash;

/// One tile of a direct-placement mosaic: a source raster and its
/// destination origin in a zero-based composite grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DirectPlacement {
    /// Source raster path, written into the descriptor as given.
    pub source: PathBuf,
    /// Destination column origin.
    pub dst_x: i64,
    /// Destination row origin.
    pub dst_y: i64,
}

/// Raster metadata read without touching pixel data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RasterInfo {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Number of bands.
    pub band_count: u32,
    /// Data type of the first band.
    pub pixel_type: PixelType,
}

/// Capability for inspecting raster metadata.
///
/// The composer only needs size, band count, and pixel type, so tests can
/// supply a fake without any raster tooling installed.
pub trait RasterProbe {
    /// Inspect the raster at `path`.
    fn probe(&self, path: &Path) -> MosaicResult<RasterInfo>;
}

/// Probe backed by the system `gdalinfo` tool.
#[derive(Clone, Copy, Debug, Default)]
pub struct GdalinfoProbe;

/// Return `true` when `gdalinfo` can be invoked from `PATH`.
pub fn is_gdalinfo_on_path() -> bool {
    Command::new("gdalinfo")
        .arg("--version")
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[derive(Debug, Deserialize)]
struct ProbeReportDef {
    size: [u32; 2],
    bands: Vec<ProbeBandDef>,
}

#[derive(Debug, Deserialize)]
struct ProbeBandDef {
    #[serde(rename = "type")]
    data_type: String,
}

impl RasterProbe for GdalinfoProbe {
    fn probe(&self, path: &Path) -> MosaicResult<RasterInfo> {
        let output = Command::new("gdalinfo")
            .arg("-json")
            .arg(path)
            .output()
            .map_err(|e| {
                MosaicError::external_tool(format!(
                    "failed to spawn gdalinfo (is GDAL installed and on PATH?): {e}"
                ))
            })?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(MosaicError::external_tool(format!(
                "gdalinfo exited with status {} for '{}': {}",
                output.status,
                path.display(),
                stderr.trim()
            )));
        }

        let report: ProbeReportDef = serde_json::from_slice(&output.stdout).map_err(|e| {
            MosaicError::external_tool(format!(
                "parse gdalinfo report for '{}': {e}",
                path.display()
            ))
        })?;
        let first = report.bands.first().ok_or_else(|| {
            MosaicError::external_tool(format!(
                "gdalinfo reported no bands for '{}'",
                path.display()
            ))
        })?;

        Ok(RasterInfo {
            width: report.size[0],
            height: report.size[1],
            band_count: report.bands.len() as u32,
            pixel_type: first.data_type.parse()?,
        })
    }
}

/// Build a single descriptor straight from explicit placements.
///
/// Every tile is probed for band count and pixel type (the first band's
/// type is authoritative); any disagreement aborts with a consistency
/// error before anything is written. The composite spans
/// `max(dst_x + width) x max(dst_y + height)`; placements are assumed to
/// already use a zero-based origin. Paint order is input order.
pub fn compose_direct(
    placements: &[DirectPlacement],
    probe: &dyn RasterProbe,
    gray: bool,
) -> MosaicResult<VirtualDescriptor> {
    if placements.is_empty() {
        return Err(MosaicError::insufficient_input(
            "direct placement list is empty",
        ));
    }

    let mut probed = Vec::with_capacity(placements.len());
    for placement in placements {
        probed.push(probe.probe(&placement.source)?);
    }

    let reference = probed[0];
    for (placement, info) in placements.iter().zip(&probed) {
        if info.band_count != reference.band_count {
            return Err(MosaicError::consistency(format!(
                "'{}' has {} bands, expected {}",
                placement.source.display(),
                info.band_count,
                reference.band_count
            )));
        }
        if info.pixel_type != reference.pixel_type {
            return Err(MosaicError::consistency(format!(
                "'{}' has pixel type {}, expected {}",
                placement.source.display(),
                info.pixel_type,
                reference.pixel_type
            )));
        }
    }

    let mut max_x = 0i64;
    let mut max_y = 0i64;
    for (placement, info) in placements.iter().zip(&probed) {
        max_x = max_x.max(placement.dst_x + i64::from(info.width));
        max_y = max_y.max(placement.dst_y + i64::from(info.height));
    }
    let (width, height) = match (u32::try_from(max_x), u32::try_from(max_y)) {
        (Ok(w), Ok(h)) => (w, h),
        _ => {
            return Err(MosaicError::configuration(format!(
                "direct composite extent {max_x}x{max_y} exceeds supported raster dimensions"
            )));
        }
    };

    let mut descriptor = VirtualDescriptor::new(
        width,
        height,
        reference.pixel_type,
        gray,
        reference.band_count,
    )?;
    for (placement, info) in placements.iter().zip(&probed) {
        for band in 1..=reference.band_count {
            descriptor.push_source(
                band,
                SourceEntry {
                    source_file: to_slash(&placement.source),
                    relative_to_descriptor: !placement.source.is_absolute(),
                    source_band: band,
                    src_rect: PixelRect {
                        x: 0,
                        y: 0,
                        w: info.width,
                        h: info.height,
                    },
                    dst_rect: PixelRect {
                        x: placement.dst_x,
                        y: placement.dst_y,
                        w: info.width,
                        h: info.height,
                    },
                },
            )?;
        }
    }
    Ok(descriptor)
}

/// Compose directly and write the descriptor to `out_path`.
///
/// Consistency failures happen before the write, so no output file is
/// created for a mismatched tile set.
pub fn write_direct(
    placements: &[DirectPlacement],
    probe: &dyn RasterProbe,
    out_path: &Path,
    gray: bool,
) -> MosaicResult<()> {
    let descriptor = compose_direct(placements, probe, gray)?;
    descriptor.write_to(out_path)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/direct.rs"]
mod tests;
