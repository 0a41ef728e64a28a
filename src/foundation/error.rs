/// Convenience result type used across Walkway.
pub type WalkwayResult<T> = Result<T, WalkwayError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum WalkwayError {
    /// Invalid or incomplete animation configuration (for example a missing selector).
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A shape whose geometry cannot be measured to a finite length.
    #[error("geometry error: {0}")]
    Geometry(String),

    /// An operation addressed an instance that is not registered.
    #[error("instance error: {0}")]
    Instance(String),

    /// Errors when serializing or deserializing scene data.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WalkwayError {
    /// Build a [`WalkwayError::Configuration`] value.
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    /// Build a [`WalkwayError::Geometry`] value.
    pub fn geometry(msg: impl Into<String>) -> Self {
        Self::Geometry(msg.into())
    }

    /// Build a [`WalkwayError::Instance`] value.
    pub fn instance(msg: impl Into<String>) -> Self {
        Self::Instance(msg.into())
    }

    /// Build a [`WalkwayError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
