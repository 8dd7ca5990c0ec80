//! Error types for shape creation.

use thiserror::Error;

/// Result type for factory operations.
pub type FactoryResult<T> = std::result::Result<T, FactoryError>;

/// Errors that can occur when creating shapes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FactoryError {
    /// The requested name does not match any known shape.
    ///
    /// Names are case-sensitive: `"circle"` is a shape, `"Circle"` is not.
    #[error("unrecognized shape name: {name:?}")]
    UnrecognizedShape {
        /// The name that was requested.
        name: String,
    },
}

impl FactoryError {
    /// Creates an unrecognized-shape error.
    #[must_use]
    pub fn unrecognized(name: impl Into<String>) -> Self {
        Self::UnrecognizedShape { name: name.into() }
    }
}
