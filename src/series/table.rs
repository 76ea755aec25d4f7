//! Coefficient table loading and series reduction
//!
//! A table is read whole, split on newlines, and the `series_length` lines
//! following the header are parsed as [`Term`]s. Anything after that slice is
//! never looked at.

use log::{debug, warn};
use std::fs;
use std::path::Path;

use super::errors::{io_err, Result, SeriesError};
use super::header::SeriesHeader;
use super::term::Term;

/// The working slice of a VSOP87 coefficient table
#[derive(Debug, Clone)]
pub struct CoefficientTable {
    /// Header metadata, when the first line follows the VSOP87 layout
    header: Option<SeriesHeader>,
    /// Records in file order
    terms: Vec<Term>,
}

impl CoefficientTable {
    /// Build a table directly from terms, without a header
    pub fn from_terms(terms: Vec<Term>) -> Self {
        Self {
            header: None,
            terms,
        }
    }

    /// Read a table from disk and parse its first `series_length` records
    pub fn load<P: AsRef<Path>>(path: P, series_length: usize) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| io_err(path, e))?;
        debug!("Read {} bytes from {}", text.len(), path.display());
        Self::parse(&text, series_length)
    }

    /// Parse table text.
    ///
    /// Line 1 is the header and is skipped. Lines 2 through `series_length + 1`
    /// (1-indexed) each contribute one term. A trailing newline produces a final
    /// empty line, which counts towards the slice like any other line.
    pub fn parse(text: &str, series_length: usize) -> Result<Self> {
        let mut lines = text.split('\n');
        let header_line = lines.next().unwrap_or_default();
        let slice: Vec<&str> = lines.take(series_length).collect();

        if slice.len() < series_length {
            return Err(SeriesError::TruncatedTable {
                expected: series_length,
                found: slice.len(),
            });
        }

        let header = SeriesHeader::parse(header_line);
        match &header {
            Some(h) if h.term_count != series_length => warn!(
                "Header declares {} terms but {} records will be summed",
                h.term_count, series_length
            ),
            Some(h) => debug!("Header: {}", h),
            None => debug!("Header line not in VSOP87 layout: {:?}", header_line.trim()),
        }

        // File line numbers are 1-indexed and the header is line 1
        let terms = slice
            .iter()
            .enumerate()
            .map(|(i, line)| Term::parse_line(i + 2, line))
            .collect::<Result<Vec<_>>>()?;

        debug!("Parsed {} coefficient records", terms.len());
        Ok(Self { header, terms })
    }

    /// Header metadata, if the first line could be recognised
    pub fn header(&self) -> Option<&SeriesHeader> {
        self.header.as_ref()
    }

    /// Records in file order
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Check if the table holds no records
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Sum of A * cos(B + C * t) over all records, accumulated in file order
    pub fn evaluate(&self, t: f64) -> f64 {
        self.terms.iter().fold(0.0, |acc, term| acc + term.evaluate(t))
    }
}
