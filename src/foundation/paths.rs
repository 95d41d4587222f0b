use std::path::{Component, Path, PathBuf};

use anyhow::Context as _;

use crate::foundation::error::MosaicResult;

/// Compute `path` relative to the directory `base`.
///
/// Both arguments are anchored to the current working directory first, so
/// mixing relative and absolute inputs is fine. The result walks up out of
/// `base` with `..` segments where the two diverge, matching what a
/// descriptor needs to reference a file from its own directory.
pub fn relative_from(path: &Path, base: &Path) -> MosaicResult<PathBuf> {
    let path = std::path::absolute(path)
        .with_context(|| format!("resolve path '{}'", path.display()))?;
    let base = std::path::absolute(base)
        .with_context(|| format!("resolve base directory '{}'", base.display()))?;

    let path_parts: Vec<Component<'_>> = path.components().collect();
    let base_parts: Vec<Component<'_>> = base.components().collect();

    let common = path_parts
        .iter()
        .zip(base_parts.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut rel = PathBuf::new();
    for _ in common..base_parts.len() {
        rel.push("..");
    }
    for part in &path_parts[common..] {
        rel.push(part);
    }
    if rel.as_os_str().is_empty() {
        rel.push(".");
    }
    Ok(rel)
}

/// Render a path with `/` separators for descriptor output.
///
/// Descriptor files must stay portable across platforms, so the serialized
/// source references never use the host separator.
pub fn to_slash(path: &Path) -> String {
    let mut out = String::new();
    for part in path.components() {
        match part {
            Component::RootDir => out.push('/'),
            other => {
                if !out.is_empty() && !out.ends_with('/') {
                    out.push('/');
                }
                out.push_str(&other.as_os_str().to_string_lossy());
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/paths.rs"]
mod tests;
