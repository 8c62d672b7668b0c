//! Sequence number generation.

use super::types::{DocumentNumber, DocumentSeries};

/// Computes the next number for a series.
///
/// `last_issued` is the `number` field of the most recent document in the
/// series, or `None` when the series is empty. A malformed string, a
/// foreign-series prefix or a prior-year number all restart the series at
/// its first counter for `current_year`; a well-formed current-year number
/// increments the counter by one.
///
/// The current year is an explicit parameter so the generator never reads
/// the system clock.
#[must_use]
pub fn next_number(
    series: DocumentSeries,
    current_year: i32,
    last_issued: Option<&str>,
) -> DocumentNumber {
    let Some(raw) = last_issued else {
        return DocumentNumber::first_of_year(series, current_year);
    };
    match raw.parse::<DocumentNumber>() {
        Ok(last) if last.series == series && last.year == current_year => last.next(),
        // Malformed, foreign series or year rollover: the sequence restarts.
        _ => DocumentNumber::first_of_year(series, current_year),
    }
}

/// Stateless service bridging the pure generator and the record store.
pub struct NumberingService;

impl NumberingService {
    /// Generates the next number using a caller-supplied store lookup.
    ///
    /// `lookup` must return the `number` field of the single document with
    /// the highest numeric `(year, counter)` key in the series, or
    /// `Ok(None)` when the series is empty. Sorting by raw number string is
    /// NOT sufficient past counter 999; see
    /// [`DocumentNumber::sort_key`](super::types::DocumentNumber::sort_key).
    ///
    /// # Errors
    ///
    /// Propagates the lookup error unchanged. A failed query aborts
    /// generation; only a genuinely empty series may reach the generator as
    /// `None`, otherwise a transient store failure would silently restart
    /// the sequence.
    pub fn next_in_series<F, E>(
        series: DocumentSeries,
        current_year: i32,
        lookup: F,
    ) -> Result<DocumentNumber, E>
    where
        F: FnOnce(DocumentSeries) -> Result<Option<String>, E>,
    {
        let last_issued = lookup(series)?;
        Ok(next_number(series, current_year, last_issued.as_deref()))
    }
}
