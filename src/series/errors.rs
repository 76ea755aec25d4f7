//! Error types for the series module
//!
//! Every failure while reading or reducing a coefficient table is fatal: the
//! evaluator never substitutes a default for a missing or malformed record.

use std::num::ParseFloatError;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for coefficient table handling
#[derive(Error, Debug)]
pub enum SeriesError {
    /// Error when the coefficient table cannot be read
    #[error("File I/O error on {path:?}: {source}")]
    Io {
        /// The path of the table that caused the error
        path: PathBuf,
        /// The underlying I/O error
        source: std::io::Error,
    },

    /// The table ends before the requested number of records
    #[error("Coefficient table too short: expected {expected} records after the header, found {found}")]
    TruncatedTable {
        /// Number of records requested
        expected: usize,
        /// Number of lines available after the header
        found: usize,
    },

    /// A data line has fewer than three whitespace-separated tokens
    #[error("Line {line}: expected at least 3 tokens, found {found}")]
    MissingTokens {
        /// 1-indexed line number in the table
        line: usize,
        /// Number of tokens on the line
        found: usize,
    },

    /// One of the last three tokens is not a floating-point literal
    #[error("Line {line}: invalid number {token:?}: {source}")]
    InvalidNumber {
        /// 1-indexed line number in the table
        line: usize,
        /// The offending token
        token: String,
        /// The underlying parse error
        source: ParseFloatError,
    },
}

/// Extension of the Result type for series operations
pub type Result<T> = std::result::Result<T, SeriesError>;

/// Helper function to convert a std::io::Error to SeriesError
pub fn io_err(path: impl Into<PathBuf>, err: std::io::Error) -> SeriesError {
    SeriesError::Io {
        path: path.into(),
        source: err,
    }
}
