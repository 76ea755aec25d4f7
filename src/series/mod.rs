//! VSOP87 series tables
//!
//! This module reads VSOP87 coefficient tables and reduces them into a single
//! coordinate term.
//!
//! # Overview
//!
//! VSOP87 expresses each coordinate of a planet as a sum of blocks, each block a
//! list of terms `A * cos(B + C * t)` multiplied by a power of `t`, the time in
//! Julian millennia from J2000.0. This module evaluates the trigonometric sum of
//! one block, taken as a fixed number of lines following a header line.
//!
//! # Main Components
//!
//! - `term`: the (A, B, C) coefficient record and its evaluation
//! - `header`: recognition of VSOP87 block header lines
//! - `table`: line selection, parsing and reduction
//! - Error types for proper error handling

pub mod errors;
pub mod header;
pub mod table;
pub mod term;

// Re-export primary types for convenience
pub use self::errors::SeriesError;
pub use self::header::SeriesHeader;
pub use self::table::CoefficientTable;
pub use self::term::Term;
