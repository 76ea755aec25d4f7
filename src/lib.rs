//! VSOP87: partial series evaluation for the VSOP87 planetary theory
//!
//! This crate reads VSOP87 coefficient tables and evaluates the trigonometric
//! sum `Σ A·cos(B + C·t)` of one block of terms at a single instant. The default
//! configuration sums the first 685 records of `VSOP87C.ven`, the Venus X
//! coordinate (T^0 block), at t = 0.012970568104 Julian millennia from J2000.0.
//!
//! ```no_run
//! use vsop87::{EvaluatorConfig, SeriesEvaluator};
//!
//! let value = SeriesEvaluator::new(EvaluatorConfig::default()).run()?;
//! println!("{:?}", value);
//! # Ok::<(), vsop87::Vsop87Error>(())
//! ```

use thiserror::Error;

pub mod config;
pub mod constants;
pub mod evaluator;
pub mod series;
pub mod time;

// Re-export commonly used types
pub use config::{ConfigError, EvaluatorConfig};
pub use evaluator::SeriesEvaluator;
pub use series::{CoefficientTable, SeriesError, SeriesHeader, Term};

/// Main error type for the vsop87 library
#[derive(Debug, Error)]
pub enum Vsop87Error {
    #[error(transparent)]
    Series(#[from] SeriesError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for vsop87 operations
pub type Result<T> = std::result::Result<T, Vsop87Error>;
