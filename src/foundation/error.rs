/// Convenience result type used across vmosaic.
pub type MosaicResult<T> = Result<T, MosaicError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum MosaicError {
    /// The tile manifest could not be opened or read.
    #[error("manifest error: {0}")]
    Parse(String),

    /// A tile config is unreadable or missing required ROI fields.
    #[error("tile config error: {0}")]
    MalformedConfig(String),

    /// The tile or placement set is empty.
    #[error("empty input: {0}")]
    InsufficientInput(String),

    /// Tiles disagree on band count, pixel type, or row height.
    #[error("consistency error: {0}")]
    Consistency(String),

    /// Unsupported output extension or invalid run options.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// An external tool could not be spawned or exited with failure.
    #[error("external tool error: {0}")]
    ExternalTool(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MosaicError {
    /// Build a [`MosaicError::Parse`] value.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`MosaicError::MalformedConfig`] value.
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::MalformedConfig(msg.into())
    }

    /// Build a [`MosaicError::InsufficientInput`] value.
    pub fn insufficient_input(msg: impl Into<String>) -> Self {
        Self::InsufficientInput(msg.into())
    }

    /// Build a [`MosaicError::Consistency`] value.
    pub fn consistency(msg: impl Into<String>) -> Self {
        Self::Consistency(msg.into())
    }

    /// Build a [`MosaicError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`MosaicError::ExternalTool`] value.
    pub fn external_tool(msg: impl Into<String>) -> Self {
        Self::ExternalTool(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
