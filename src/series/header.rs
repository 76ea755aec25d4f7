//! VSOP87 table header lines
//!
//! Each block of a VSOP87 file opens with a line such as
//!
//! ```text
//!  VSOP87 VERSION C3    VENUS     VARIABLE 1 (XYZ)       *T**0    685 TERMS    HELIOCENTRIC DYNAMICAL ECLIPTIC AND EQUINOX OF THE DATE
//! ```
//!
//! The header is informational only. Evaluation never depends on it.

use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    static ref HEADER_RE: Regex = Regex::new(
        r"VSOP87\s+VERSION\s+([A-Z])(\d)\s+(\S+)\s+VARIABLE\s+(\d)\s+\((\w+)\)\s+\*T\*\*(\d+)\s+(\d+)\s+TERMS(?:\s+(.*\S))?"
    )
    .expect("header pattern is valid");
}

/// Metadata carried by a VSOP87 block header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesHeader {
    /// Version letter (A-E)
    pub version: char,
    /// Version code matching the letter (0 = main version, 1 = A ... 5 = E)
    pub version_code: u8,
    /// Body name as written in the file
    pub body: String,
    /// 1-based index of the variable within `coordinates`
    pub variable: u8,
    /// Coordinate set, e.g. "XYZ" or "LBR"
    pub coordinates: String,
    /// Power of T multiplying this block
    pub time_power: u8,
    /// Number of terms declared for this block
    pub term_count: usize,
    /// Trailing reference frame description, if present
    pub frame: Option<String>,
}

impl SeriesHeader {
    /// Parse a header line, returning `None` if it does not follow the VSOP87 layout
    pub fn parse(line: &str) -> Option<Self> {
        let caps = HEADER_RE.captures(line)?;
        Some(Self {
            version: caps[1].chars().next()?,
            version_code: caps[2].parse().ok()?,
            body: caps[3].to_string(),
            variable: caps[4].parse().ok()?,
            coordinates: caps[5].to_string(),
            time_power: caps[6].parse().ok()?,
            term_count: caps[7].parse().ok()?,
            frame: caps.get(8).map(|m| m.as_str().to_string()),
        })
    }

    /// Name of the variable this block contributes to, e.g. 'X' for variable 1 of "XYZ"
    pub fn variable_name(&self) -> Option<char> {
        let index = usize::from(self.variable).checked_sub(1)?;
        self.coordinates.chars().nth(index)
    }
}

impl fmt::Display for SeriesHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VSOP87{} {}", self.version, self.body)?;
        match self.variable_name() {
            Some(name) => write!(f, " {}", name)?,
            None => write!(f, " variable {}", self.variable)?,
        }
        write!(f, " T^{} ({} terms)", self.time_power, self.term_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VENUS_X0: &str = " VSOP87 VERSION C3    VENUS     VARIABLE 1 (XYZ)       *T**0    685 TERMS    HELIOCENTRIC DYNAMICAL ECLIPTIC AND EQUINOX OF THE DATE";

    #[test]
    fn test_parse_venus_header() {
        let header = SeriesHeader::parse(VENUS_X0).unwrap();
        assert_eq!(header.version, 'C');
        assert_eq!(header.version_code, 3);
        assert_eq!(header.body, "VENUS");
        assert_eq!(header.variable, 1);
        assert_eq!(header.coordinates, "XYZ");
        assert_eq!(header.time_power, 0);
        assert_eq!(header.term_count, 685);
        assert_eq!(
            header.frame.as_deref(),
            Some("HELIOCENTRIC DYNAMICAL ECLIPTIC AND EQUINOX OF THE DATE")
        );
        assert_eq!(header.variable_name(), Some('X'));
    }

    #[test]
    fn test_parse_spherical_header_without_frame() {
        let header =
            SeriesHeader::parse(" VSOP87 VERSION D4    VENUS     VARIABLE 3 (LBR)       *T**2     23 TERMS")
                .unwrap();
        assert_eq!(header.version, 'D');
        assert_eq!(header.version_code, 4);
        assert_eq!(header.variable_name(), Some('R'));
        assert_eq!(header.time_power, 2);
        assert_eq!(header.term_count, 23);
        assert_eq!(header.frame, None);
    }

    #[test]
    fn test_display() {
        let header = SeriesHeader::parse(VENUS_X0).unwrap();
        assert_eq!(header.to_string(), "VSOP87C VENUS X T^0 (685 terms)");
    }

    #[test]
    fn test_unrecognized_header() {
        assert!(SeriesHeader::parse("685").is_none());
        assert!(SeriesHeader::parse("").is_none());
        assert!(SeriesHeader::parse("1.0 0.0 0.0").is_none());
    }
}
