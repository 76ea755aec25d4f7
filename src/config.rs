//! Evaluator configuration
//!
//! The three parameters of a run: which table to read, how many records to sum,
//! and the instant to evaluate at. Defaults reproduce the Venus X (T^0) block at
//! JD 2456282.5 (2012-12-21 0h TDB, less about a millisecond).

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::constants::{DEFAULT_SERIES_LENGTH, DEFAULT_TABLE_PATH, DEFAULT_TIME_ARGUMENT};

/// Error type for configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config {path:?}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Configuration for a single series evaluation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Path of the VSOP87 coefficient table
    pub table_path: PathBuf,
    /// Number of records summed after the header line
    pub series_length: usize,
    /// Time argument in Julian millennia from J2000.0
    pub time_argument: f64,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            table_path: PathBuf::from(DEFAULT_TABLE_PATH),
            series_length: DEFAULT_SERIES_LENGTH,
            time_argument: DEFAULT_TIME_ARGUMENT,
        }
    }
}

impl EvaluatorConfig {
    /// Load a configuration from a JSON file.
    ///
    /// Missing fields take their default values.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Set the coefficient table path
    pub fn with_table_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.table_path = path.as_ref().to_path_buf();
        self
    }

    /// Set the number of records to sum
    pub fn with_series_length(mut self, series_length: usize) -> Self {
        self.series_length = series_length;
        self
    }

    /// Set the time argument (Julian millennia from J2000.0)
    pub fn with_time_argument(mut self, t: f64) -> Self {
        self.time_argument = t;
        self
    }
}
