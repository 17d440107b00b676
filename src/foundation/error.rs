/// Convenience result type used across prllx.
pub type PrllxResult<T> = Result<T, PrllxError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Configuration warnings and degenerate geometry are not errors; they go through
/// [`crate::DiagnosticsSink`] and the visibility predicate respectively.
#[derive(thiserror::Error, Debug)]
pub enum PrllxError {
    /// Invalid user-provided options, selectors, fixtures or element handles.
    #[error("validation error: {0}")]
    Validation(String),

    /// An operation was called in a lifecycle state that forbids it.
    #[error("lifecycle error: {0}")]
    Lifecycle(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PrllxError {
    /// Build a [`PrllxError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PrllxError::Lifecycle`] value.
    pub fn lifecycle(msg: impl Into<String>) -> Self {
        Self::Lifecycle(msg.into())
    }

    /// Build a [`PrllxError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
