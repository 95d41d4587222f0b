use std::path::PathBuf;

/// Run-scoped registry of intermediate descriptor files.
///
/// Every descriptor a run writes on the way to a concrete raster is
/// registered here. Registered files are removed when the tracker drops,
/// so cleanup happens on every exit path (success, error, or early
/// return) unless the run persists them because the virtual descriptor
/// itself is the final artifact.
#[derive(Debug, Default)]
pub struct ArtifactTracker {
    paths: Vec<PathBuf>,
    persist: bool,
}

impl ArtifactTracker {
    /// Create an empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `path` for removal when the run ends.
    pub fn register(&mut self, path: impl Into<PathBuf>) {
        self.paths.push(path.into());
    }

    /// Paths currently registered, in registration order.
    pub fn registered(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Keep everything registered on disk; removal is disarmed.
    pub fn persist_all(&mut self) {
        self.persist = true;
    }

    /// Remove registered files now, most recent first.
    ///
    /// Files already gone are ignored.
    pub fn cleanup(&mut self) {
        while let Some(path) = self.paths.pop() {
            match std::fs::remove_file(&path) {
                Ok(()) => tracing::debug!(path = %path.display(), "removed intermediate"),
                Err(_) => {}
            }
        }
    }
}

impl Drop for ArtifactTracker {
    fn drop(&mut self) {
        if !self.persist {
            self.cleanup();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/materialize/artifacts.rs"]
mod tests;
