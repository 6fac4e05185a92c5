//! Error types for buffer, counter and marshalling operations.
//!
//! A decrease that would push a counter below zero is not an error; it is
//! reported through [`crate::data::RankUpdate::Rejected`] instead.

use thiserror::Error;

/// Result type alias for tinyext operations.
pub type Result<T> = std::result::Result<T, ExtError>;

/// Errors surfaced by the core and by the host-facing layers.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExtError {
    /// Replacement data does not match the buffer's fixed length.
    #[error("buffer length mismatch: expected {expected}, got {actual}")]
    SizeMismatch {
        /// Length fixed by the first successful `set`.
        expected: usize,
        /// Length of the rejected replacement.
        actual: usize,
    },

    /// Maximum requested from a buffer with no contents.
    #[error("No data.")]
    EmptyBuffer,

    /// A decoded element was neither an integer nor a float.
    #[error("Input is not a float or int. (element {index} is {type_name})")]
    InvalidElementType {
        /// Position of the offending element.
        index: usize,
        /// Host type name of the offending element.
        type_name: String,
    },

    /// An attribute write failed validation.
    #[error("{reason}")]
    InvalidField {
        /// Attribute being written.
        field: &'static str,
        /// Host-facing description of the violated constraint.
        reason: String,
    },

    /// Null pointer passed across the C boundary.
    #[error("null pointer passed")]
    NullPointer,

    /// C string argument was not valid UTF-8.
    #[error("invalid UTF-8 in string")]
    InvalidUtf8,
}

impl ExtError {
    /// Shorthand for an [`ExtError::InvalidField`] on `field`.
    pub fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        ExtError::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}
