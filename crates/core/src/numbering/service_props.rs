//! Property-based tests for sequence number generation.

use std::str::FromStr;

use proptest::prelude::*;

use super::service::next_number;
use super::types::{DocumentNumber, DocumentSeries};

fn series_strategy() -> impl Strategy<Value = DocumentSeries> {
    prop_oneof![Just(DocumentSeries::Offer), Just(DocumentSeries::Invoice)]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// For any issued number, feeding it back in the same year yields a
    /// counter exactly one higher in the same series and year.
    #[test]
    fn prop_counter_increments_by_exactly_one(
        series in series_strategy(),
        year in 1900i32..=9999,
        counter in 0u32..=1_000_000,
    ) {
        let last = DocumentNumber::new(series, year, counter);
        let next = next_number(series, year, Some(&last.to_string()));
        prop_assert_eq!(next.series, series);
        prop_assert_eq!(next.year, year);
        prop_assert_eq!(next.counter, counter + 1);
    }

    /// Chained generation is strictly monotonic: each output used as the
    /// next input advances the sequence by one, never repeating a number.
    #[test]
    fn prop_chained_generation_is_strictly_monotonic(
        series in series_strategy(),
        year in 1900i32..=9999,
        steps in 1usize..=50,
    ) {
        let mut current = next_number(series, year, None);
        for _ in 0..steps {
            let following = next_number(series, year, Some(&current.to_string()));
            prop_assert!(following.sort_key() > current.sort_key());
            prop_assert_eq!(following.counter, current.counter + 1);
            current = following;
        }
    }

    /// A last-issued number from any other year resets the sequence.
    #[test]
    fn prop_year_change_resets_to_first_counter(
        series in series_strategy(),
        last_year in 1900i32..=9999,
        current_year in 1900i32..=9999,
        counter in 0u32..=1_000_000,
    ) {
        prop_assume!(last_year != current_year);
        let last = DocumentNumber::new(series, last_year, counter);
        let next = next_number(series, current_year, Some(&last.to_string()));
        prop_assert_eq!(next, DocumentNumber::first_of_year(series, current_year));
    }

    /// Display and parse are inverse for all representable numbers.
    #[test]
    fn prop_format_round_trips_through_parse(
        series in series_strategy(),
        year in 1000i32..=9999,
        counter in 0u32..=10_000_000,
    ) {
        let number = DocumentNumber::new(series, year, counter);
        let parsed = DocumentNumber::from_str(&number.to_string()).unwrap();
        prop_assert_eq!(number, parsed);
    }

    /// Arbitrary input never panics and never produces a number outside
    /// the requested series and year.
    #[test]
    fn prop_arbitrary_input_stays_in_series_and_year(
        series in series_strategy(),
        year in 1900i32..=9999,
        raw in ".*",
    ) {
        let next = next_number(series, year, Some(&raw));
        prop_assert_eq!(next.series, series);
        prop_assert_eq!(next.year, year);
    }
}
