/// Convenience result type used across Shalom.
pub type ShalomResult<T> = Result<T, ShalomError>;

/// Top-level error taxonomy used by editor and export APIs.
#[derive(thiserror::Error, Debug)]
pub enum ShalomError {
    /// Invalid user-provided data (rectangles, settings, gestures, documents).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while resolving a scene tree, fonts or assets for capture.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors raised while rasterizing or encoding the captured canvas.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ShalomError {
    /// Build a [`ShalomError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ShalomError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`ShalomError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`ShalomError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
