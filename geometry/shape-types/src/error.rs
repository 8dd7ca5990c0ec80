//! Error types for shape primitives.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors that can occur when parsing a [`Point`](crate::Point) from text.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParsePointError {
    /// Fewer than two coordinates were supplied.
    #[error("missing {axis} coordinate")]
    MissingCoordinate {
        /// The axis the input ran out before reaching (`"x"` or `"y"`).
        axis: &'static str,
    },

    /// A coordinate token was not a valid integer.
    #[error("invalid coordinate: {0}")]
    InvalidCoordinate(#[from] ParseIntError),
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ParsePointError::MissingCoordinate { axis: "y" };
        assert_eq!(err.to_string(), "missing y coordinate");

        let err: ParsePointError = "nope".parse::<i32>().unwrap_err().into();
        assert!(err.to_string().starts_with("invalid coordinate"));
    }
}
