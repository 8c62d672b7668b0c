//! Document number value objects.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParseNumberError;

/// The two independently numbered document series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentSeries {
    /// Offers (Angebote), prefix `A`.
    Offer,
    /// Invoices (Rechnungen), prefix `R`.
    Invoice,
}

impl DocumentSeries {
    /// Prefix letter used in the formatted number.
    #[must_use]
    pub const fn prefix(self) -> char {
        match self {
            Self::Offer => 'A',
            Self::Invoice => 'R',
        }
    }

    /// Counter assigned to the first document of a year.
    ///
    /// Offers start at 42 to continue a pre-existing paper numbering
    /// scheme; invoices start at 1. The asymmetry is a business rule,
    /// not an accident.
    #[must_use]
    pub const fn first_counter(self) -> u32 {
        match self {
            Self::Offer => 42,
            Self::Invoice => 1,
        }
    }

    /// Resolves a prefix letter back to its series.
    #[must_use]
    pub const fn from_prefix(prefix: char) -> Option<Self> {
        match prefix {
            'A' => Some(Self::Offer),
            'R' => Some(Self::Invoice),
            _ => None,
        }
    }
}

/// A fully qualified document number: series, year and counter.
///
/// Renders as `"{prefix}-{year}-{counter}"` with the counter zero-padded
/// to at least three digits (`A-2026-042`). Counters keep growing past 999
/// without truncation (`A-2026-1000`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentNumber {
    /// The series this number belongs to.
    pub series: DocumentSeries,
    /// Calendar year the number was issued in.
    pub year: i32,
    /// Position within the year's sequence.
    pub counter: u32,
}

impl DocumentNumber {
    /// Creates a number from its parts.
    #[must_use]
    pub const fn new(series: DocumentSeries, year: i32, counter: u32) -> Self {
        Self {
            series,
            year,
            counter,
        }
    }

    /// The first number issued in a fresh (or freshly rolled-over) year.
    #[must_use]
    pub const fn first_of_year(series: DocumentSeries, year: i32) -> Self {
        Self::new(series, year, series.first_counter())
    }

    /// The number following this one within the same year.
    #[must_use]
    pub const fn next(self) -> Self {
        Self::new(self.series, self.year, self.counter + 1)
    }

    /// Ordering key for "most recent document" lookups.
    ///
    /// Store queries MUST order a series by this numeric `(year, counter)`
    /// pair. A raw string sort stops being order-preserving once a counter
    /// passes 999: `"R-2026-1000"` sorts before `"R-2026-999"`
    /// alphabetically.
    #[must_use]
    pub const fn sort_key(self) -> (i32, u32) {
        (self.year, self.counter)
    }
}

impl fmt::Display for DocumentNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{:04}-{:03}",
            self.series.prefix(),
            self.year,
            self.counter
        )
    }
}

impl FromStr for DocumentNumber {
    type Err = ParseNumberError;

    /// Parses `^{prefix}-(\d{4})-(\d+)$` without a regex engine.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, rest) = s.split_once('-').ok_or(ParseNumberError::Malformed)?;
        let mut prefix_chars = prefix.chars();
        let series = prefix_chars
            .next()
            .filter(|_| prefix_chars.next().is_none())
            .and_then(DocumentSeries::from_prefix)
            .ok_or(ParseNumberError::UnknownPrefix)?;

        let (year, counter) = rest.split_once('-').ok_or(ParseNumberError::Malformed)?;
        if year.len() != 4 || !year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseNumberError::Malformed);
        }
        if counter.is_empty() || !counter.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseNumberError::Malformed);
        }

        let year: i32 = year.parse().map_err(|_| ParseNumberError::Malformed)?;
        let counter: u32 = counter.parse().map_err(|_| ParseNumberError::Malformed)?;
        Ok(Self::new(series, year, counter))
    }
}
