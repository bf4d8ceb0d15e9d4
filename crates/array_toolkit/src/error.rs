//! # Toolkit Error Types
//!
//! All errors that can occur in the array toolkit.
//!
//! "Value not found" is not an error: searches return `Option<usize>`.

use thiserror::Error;

/// Errors that can occur in toolkit operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ToolkitError {
    /// An operation that needs at least one element was given an empty slice.
    #[error("{operation} requires a non-empty array")]
    EmptyInput {
        /// Name of the rejected operation.
        operation: &'static str,
    },

    /// A range extends past the end of the slice.
    #[error("range {start}..{end} out of bounds for array of length {len}")]
    RangeOutOfBounds {
        /// Start of the range.
        start: usize,
        /// End of the range (exclusive).
        end: usize,
        /// Length of the slice.
        len: usize,
    },

    /// A range whose start lies after its end.
    #[error("inverted range: start {start} is after end {end}")]
    InvertedRange {
        /// Start of the range.
        start: usize,
        /// End of the range (exclusive).
        end: usize,
    },

    /// Rotation of an empty slice (the modulus would be zero).
    #[error("cannot rotate an empty array")]
    ZeroLengthRotate,

    /// Text rendering would exceed the configured limit.
    #[error("text representation needs at least {required} bytes, limit is {limit}")]
    TextOverflow {
        /// Bytes needed at the point the limit was hit.
        required: usize,
        /// Configured limit.
        limit: usize,
    },

    /// Invalid configuration file.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for toolkit operations.
pub type ToolkitResult<T> = Result<T, ToolkitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ToolkitError::EmptyInput { operation: "max_value" };
        assert_eq!(err.to_string(), "max_value requires a non-empty array");

        let err = ToolkitError::RangeOutOfBounds { start: 2, end: 9, len: 4 };
        assert_eq!(err.to_string(), "range 2..9 out of bounds for array of length 4");

        let err = ToolkitError::TextOverflow { required: 12, limit: 10 };
        assert!(err.to_string().contains("limit is 10"));
    }
}
