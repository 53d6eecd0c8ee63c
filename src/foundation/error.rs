/// Result alias used across the crate.
pub type CourseResult<T> = Result<T, CourseError>;

/// Error type for loading, publishing and CLI-facing operations.
///
/// Per-item content problems never surface here: builders degrade them locally into visible
/// placeholder blocks. Only whole-request failures are represented.
#[derive(thiserror::Error, Debug)]
pub enum CourseError {
    /// The course description could not be read as JSON.
    #[error("parse error: {0}")]
    Parse(String),

    /// The course description failed pre-flight validation.
    #[error("validation error: {0}")]
    Validation(String),

    /// The page service rejected a create/append call.
    #[error("remote error: {0}")]
    Remote(String),

    /// Local I/O failed (reading a course file, writing request payloads).
    #[error("io error: {0}")]
    Io(String),

    /// Output could not be serialized.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other failure.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CourseError {
    /// Build a [`CourseError::Parse`].
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Build a [`CourseError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CourseError::Remote`].
    pub fn remote(msg: impl Into<String>) -> Self {
        Self::Remote(msg.into())
    }

    /// Build a [`CourseError::Io`].
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Build a [`CourseError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
