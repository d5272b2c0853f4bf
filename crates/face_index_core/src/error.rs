//! # Face Index Error Types
//!
//! Failures of the calling layer. The synthesis, codec and geometry
//! functions themselves are total and never produce these.

use thiserror::Error;

/// Errors raised when validating caller input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FaceError {
    /// Reference string has the wrong number of characters.
    #[error("invalid reference length: expected {expected} hex digits, got {actual}")]
    ReferenceLength {
        /// Required length.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// Reference string contains a character that is not a hex digit.
    #[error("invalid reference digit {found:?} at position {position}")]
    ReferenceDigit {
        /// Character offset of the offending digit.
        position: usize,
        /// The offending character.
        found: char,
    },

    /// Invalid configuration file.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for face index operations.
pub type FaceResult<T> = Result<T, FaceError>;
