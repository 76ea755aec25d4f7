//! Coefficient records of a VSOP87 series
//!
//! A VSOP87 data line starts with a term code and the integer multipliers of
//! the planetary arguments, followed by the S and K coefficients, and ends with
//! the three values actually used for evaluation: amplitude A, phase B and
//! frequency C. Only the trailing triple is read here.

use super::errors::{Result, SeriesError};
use crate::constants::COEFFICIENT_TOKENS;

/// One (A, B, C) record of a VSOP87 series
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Term {
    /// Amplitude (AU for rectangular versions)
    pub amplitude: f64,
    /// Phase in radians
    pub phase: f64,
    /// Frequency in radians per Julian millennium
    pub frequency: f64,
}

impl Term {
    /// Create a term from its amplitude, phase and frequency
    pub fn new(amplitude: f64, phase: f64, frequency: f64) -> Self {
        Self {
            amplitude,
            phase,
            frequency,
        }
    }

    /// Parse the last three whitespace-separated tokens of `line`.
    ///
    /// `line_number` is the 1-indexed position of the line in its table and is
    /// only used for error reporting. Leading tokens are ignored.
    pub fn parse_line(line_number: usize, line: &str) -> Result<Self> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < COEFFICIENT_TOKENS {
            return Err(SeriesError::MissingTokens {
                line: line_number,
                found: tokens.len(),
            });
        }

        let tail = &tokens[tokens.len() - COEFFICIENT_TOKENS..];
        let parse = |token: &str| {
            token
                .parse::<f64>()
                .map_err(|source| SeriesError::InvalidNumber {
                    line: line_number,
                    token: token.to_string(),
                    source,
                })
        };

        Ok(Self {
            amplitude: parse(tail[0])?,
            phase: parse(tail[1])?,
            frequency: parse(tail[2])?,
        })
    }

    /// Argument of the cosine at time `t` (Julian millennia)
    #[inline]
    pub fn argument(&self, t: f64) -> f64 {
        self.phase + self.frequency * t
    }

    /// Contribution of this term at time `t`: A * cos(B + C * t)
    #[inline]
    pub fn evaluate(&self, t: f64) -> f64 {
        self.amplitude * self.argument(t).cos()
    }
}
