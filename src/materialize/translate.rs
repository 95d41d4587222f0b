use std::path::Path;
use std::process::Command;

use crate::foundation::error::{MosaicError, MosaicResult};

/// Output behavior selected by the requested file extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputKind {
    /// `.vrt`: the top-level descriptor is itself the final artifact.
    Virtual,
    /// `.tif`: rasterize the descriptor into a concrete GeoTIFF.
    GeoTiff,
}

impl OutputKind {
    /// Classify an output path by extension.
    ///
    /// Anything other than `.vrt` or `.tif` is a configuration error,
    /// reported before any file is generated.
    pub fn from_path(path: &Path) -> MosaicResult<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or_default();
        if ext.eq_ignore_ascii_case("vrt") {
            Ok(Self::Virtual)
        } else if ext.eq_ignore_ascii_case("tif") {
            Ok(Self::GeoTiff)
        } else {
            Err(MosaicError::configuration(format!(
                "unsupported output extension for '{}': expected .vrt or .tif",
                path.display()
            )))
        }
    }
}

/// Capability for converting a virtual descriptor into a concrete raster.
///
/// Modeling the external rasterization step as a trait keeps the engine
/// testable without a real conversion tool installed.
pub trait Materializer {
    /// Rasterize `descriptor` into `out_path`.
    fn materialize(&self, descriptor: &Path, out_path: &Path) -> MosaicResult<()>;
}

/// Materializer backed by the system `gdal_translate`.
///
/// Output options are fixed: tiled layout, `Float32` samples, and BIGTIFF
/// when the result grows past the classic TIFF limit.
#[derive(Clone, Copy, Debug, Default)]
pub struct GdalTranslate;

/// Return `true` when `gdal_translate` can be invoked from `PATH`.
pub fn is_gdal_translate_on_path() -> bool {
    Command::new("gdal_translate")
        .arg("--version")
        .stdout(std::process::Stdio::null())
        .stderr(std::process::Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

impl Materializer for GdalTranslate {
    fn materialize(&self, descriptor: &Path, out_path: &Path) -> MosaicResult<()> {
        if !is_gdal_translate_on_path() {
            return Err(MosaicError::external_tool(
                "gdal_translate is required for GeoTIFF output, but was not found on PATH",
            ));
        }

        let output = Command::new("gdal_translate")
            .args(["-ot", "Float32", "-co", "TILED=YES", "-co", "BIGTIFF=IF_NEEDED"])
            .arg(descriptor)
            .arg(out_path)
            .output()
            .map_err(|e| {
                MosaicError::external_tool(format!("failed to spawn gdal_translate: {e}"))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(MosaicError::external_tool(format!(
                "gdal_translate exited with status {}: {}",
                output.status,
                stderr.trim()
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/materialize/translate.rs"]
mod tests;
