//! Constants module for VSOP87 series evaluation

// Time constants
/// J2000.0 epoch as Julian date (TDB)
pub const J2000: f64 = 2_451_545.0;
/// Days in a Julian millennium, the native time unit of VSOP87
pub const DAYS_PER_JULIAN_MILLENNIUM: f64 = 365_250.0;
/// Seconds in a day
pub const DAY_S: f64 = 86_400.0;

// Series defaults
/// Coefficient table for Venus, VSOP87 version C (rectangular, ecliptic of date)
pub const DEFAULT_TABLE_PATH: &str = "VSOP87C.ven";

/// Number of coefficient records summed, starting right after the header line.
///
/// Matches the term count of the first block (X, T^0) of `VSOP87C.ven`.
pub const DEFAULT_SERIES_LENGTH: usize = 685;

/// Time argument in Julian millennia from J2000.0
pub const DEFAULT_TIME_ARGUMENT: f64 = 0.012970568104;

/// Number of trailing tokens on a data line holding (A, B, C)
pub const COEFFICIENT_TOKENS: usize = 3;
