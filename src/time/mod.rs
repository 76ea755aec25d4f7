//! Time arguments for VSOP87 series
//!
//! VSOP87 series take their time argument in Julian millennia of TDB measured
//! from J2000.0. These helpers convert between that unit, Julian dates, and
//! calendar instants for reporting.

use crate::constants::{DAYS_PER_JULIAN_MILLENNIUM, DAY_S, J2000};
use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Julian millennia elapsed since J2000.0 at Julian date `jd`
pub fn julian_millennia_since_j2000(jd: f64) -> f64 {
    (jd - J2000) / DAYS_PER_JULIAN_MILLENNIUM
}

/// Julian date corresponding to `t` Julian millennia from J2000.0
pub fn jd_from_julian_millennia(t: f64) -> f64 {
    J2000 + t * DAYS_PER_JULIAN_MILLENNIUM
}

/// Calendar instant on the TDB scale for `t` Julian millennia from J2000.0.
///
/// The result is a plain calendar reading with no leap seconds or time scale
/// conversion, rounded to the microsecond. Returns `None` when `t` is not
/// finite or lies outside the range chrono can represent.
pub fn instant_from_julian_millennia(t: f64) -> Option<NaiveDateTime> {
    if !t.is_finite() {
        return None;
    }

    let j2000 = NaiveDate::from_ymd_opt(2000, 1, 1)?.and_hms_opt(12, 0, 0)?;
    let micros = (t * DAYS_PER_JULIAN_MILLENNIUM * DAY_S * 1e6).round();
    if micros.abs() >= i64::MAX as f64 {
        return None;
    }

    j2000.checked_add_signed(Duration::microseconds(micros as i64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_TIME_ARGUMENT;
    use approx::assert_relative_eq;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_j2000_is_zero() {
        assert_eq!(julian_millennia_since_j2000(J2000), 0.0);
        assert_eq!(jd_from_julian_millennia(0.0), J2000);
    }

    #[test]
    fn test_conversions_are_inverse() {
        let jd = 2_460_000.5;
        let t = julian_millennia_since_j2000(jd);
        assert_relative_eq!(jd_from_julian_millennia(t), jd, epsilon = 1e-6);

        // One Julian century is a tenth of a millennium
        assert_relative_eq!(
            julian_millennia_since_j2000(J2000 + 36_525.0),
            0.1,
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_instant_at_j2000() {
        let instant = instant_from_julian_millennia(0.0).unwrap();
        assert_eq!(instant.to_string(), "2000-01-01 12:00:00");
    }

    #[test]
    fn test_default_time_argument_instant() {
        // 0.012970568104 millennia is 4737.499999986 days after J2000.0
        assert_relative_eq!(
            jd_from_julian_millennia(DEFAULT_TIME_ARGUMENT),
            2_456_282.5,
            epsilon = 1e-7
        );

        // About a millisecond short of midnight
        let instant = instant_from_julian_millennia(DEFAULT_TIME_ARGUMENT).unwrap();
        assert_eq!(instant.year(), 2012);
        assert_eq!(instant.month(), 12);
        assert_eq!(instant.day(), 20);
        assert_eq!(instant.hour(), 23);
        assert_eq!(instant.minute(), 59);
        assert_eq!(instant.second(), 59);
    }

    #[test]
    fn test_instant_rejects_non_finite() {
        assert!(instant_from_julian_millennia(f64::NAN).is_none());
        assert!(instant_from_julian_millennia(f64::INFINITY).is_none());
        assert!(instant_from_julian_millennia(1e12).is_none());
    }
}
