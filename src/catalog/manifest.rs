use std::path::{Path, PathBuf};

use crate::foundation::error::{MosaicError, MosaicResult};

/// Read a tile manifest: one tile-config path per line, relative to the
/// manifest's own directory.
///
/// Lines are trimmed and blank lines are skipped. Order is preserved; it
/// determines composition order all the way into the descriptors. Entries
/// are not checked for existence here; missing sub-rasters surface later as
/// holes in the mosaic.
pub fn read_manifest(path: &Path) -> MosaicResult<Vec<PathBuf>> {
    let text = std::fs::read_to_string(path).map_err(|e| {
        MosaicError::parse(format!("open tile manifest '{}': {e}", path.display()))
    })?;
    let base = path.parent().unwrap_or_else(|| Path::new("."));

    Ok(text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| base.join(line))
        .collect())
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/manifest.rs"]
mod tests;
