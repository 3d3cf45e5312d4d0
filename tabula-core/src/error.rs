//! Recoverable errors
//!
//! Only failures that depend on runtime data are reported here. Broken
//! preconditions (shape mismatches, unchecked subscripts out of range,
//! square-only operations on rectangular matrices) are contract violations
//! and go through [`requires!`](crate::requires) instead.

use thiserror::Error;

/// Standard error codes (machine-readable)
pub mod codes {
    pub const OUT_OF_RANGE: &str = "OUT_OF_RANGE";
    pub const INDEX_OUT_OF_RANGE: &str = "INDEX_OUT_OF_RANGE";
    pub const SINGULAR: &str = "SINGULAR";
    pub const RAGGED_ROWS: &str = "RAGGED_ROWS";
    pub const DATA_LENGTH: &str = "DATA_LENGTH";
    pub const DIV_ZERO: &str = "DIV_ZERO";
    pub const PARSE_ERROR: &str = "PARSE_ERROR";
}

/// Result type alias using [`TabulaError`]
pub type Result<T> = std::result::Result<T, TabulaError>;

/// Errors reported to callers of the checked entry points
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TabulaError {
    /// Checked `(row, column)` access outside the matrix
    #[error("No such index: ({row}, {column}) in a {rows}×{columns} matrix")]
    OutOfRange {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    /// Checked flat access outside the buffer
    #[error("No such index: {index} in a matrix of size {size}")]
    IndexOutOfRange { index: usize, size: usize },

    /// Elimination met a zero pivot
    #[error("Matrix is singular: zero pivot at row {pivot}")]
    Singular { pivot: usize },

    /// Nested rows of unequal length
    #[error("Row {row} has {len} columns, expected {expected}")]
    RaggedRows { row: usize, len: usize, expected: usize },

    /// Flat data does not match the requested shape
    #[error("Expected {expected} values, got {got}")]
    DataLength { expected: usize, got: usize },

    #[error("Division by zero")]
    DivisionByZero,

    #[error("Invalid number format: {0}")]
    Parse(String),
}

impl TabulaError {
    /// Machine-readable code for this error
    pub fn code(&self) -> &'static str {
        match self {
            TabulaError::OutOfRange { .. } => codes::OUT_OF_RANGE,
            TabulaError::IndexOutOfRange { .. } => codes::INDEX_OUT_OF_RANGE,
            TabulaError::Singular { .. } => codes::SINGULAR,
            TabulaError::RaggedRows { .. } => codes::RAGGED_ROWS,
            TabulaError::DataLength { .. } => codes::DATA_LENGTH,
            TabulaError::DivisionByZero => codes::DIV_ZERO,
            TabulaError::Parse(_) => codes::PARSE_ERROR,
        }
    }

    /// Suggestion for fixing the error
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            TabulaError::OutOfRange { .. } | TabulaError::IndexOutOfRange { .. } => {
                Some("Check the subscript against rows() and columns()")
            }
            TabulaError::Singular { .. } => {
                Some("Reorder the rows or solve with Pivoting::NonZero")
            }
            TabulaError::RaggedRows { .. } => Some("Give every row the same length"),
            TabulaError::DataLength { .. } => Some("Pass exactly rows * columns values"),
            TabulaError::DivisionByZero => Some("Ensure divisor is not zero"),
            TabulaError::Parse(_) => Some("Use an integer or a fraction such as \"-3/4\""),
        }
    }
}
