//! Period filtering, totals and range labels.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use super::types::{Period, PeriodSummary};
use crate::billing::round2;
use crate::ledger::{AccountingEntry, EntryType};

/// German month names, indexed by `month0`.
const MONTHS_DE: [&str; 12] = [
    "Januar",
    "Februar",
    "März",
    "April",
    "Mai",
    "Juni",
    "Juli",
    "August",
    "September",
    "Oktober",
    "November",
    "Dezember",
];

/// Report service for the bookkeeping page and its exports.
///
/// Pure functions over caller-supplied entry lists; fetching the entries
/// from the record store is the caller's concern.
pub struct ReportService;

impl ReportService {
    /// Entries dated inside the period, both bounds inclusive. Dates are
    /// compared as calendar dates; entries carry no time component.
    #[must_use]
    pub fn filter_by_period<'a>(
        entries: &'a [AccountingEntry],
        period: &Period,
    ) -> Vec<&'a AccountingEntry> {
        entries
            .iter()
            .filter(|entry| period.contains(entry.date))
            .collect()
    }

    /// Income, expense and profit totals over the given entries.
    ///
    /// Empty input is valid and produces zero totals.
    pub fn summarize<'a, I>(entries: I) -> PeriodSummary
    where
        I: IntoIterator<Item = &'a AccountingEntry>,
    {
        let mut income = Decimal::ZERO;
        let mut expense = Decimal::ZERO;
        for entry in entries {
            match entry.entry_type {
                EntryType::Income => income += entry.amount,
                EntryType::Expense => expense += entry.amount,
            }
        }
        let total_income = round2(income);
        let total_expense = round2(expense);
        PeriodSummary {
            total_income,
            total_expense,
            net: round2(total_income - total_expense),
        }
    }

    /// Derives a human-readable label from a date range for file names and
    /// PDF titles.
    ///
    /// Shapes are matched in priority order, first match wins:
    /// 1. the full reference year → `"2026"`
    /// 2. the full previous year → `"2025"`
    /// 3. a quarter of the reference year → `"Q2 2026"`
    /// 4. a single full calendar month → `"März 2026"`
    /// 5. anything else → `"05.03.2026 – 20.03.2026"`
    #[must_use]
    pub fn range_label(period: &Period, reference_year: i32) -> String {
        if Some(*period) == Period::full_year(reference_year) {
            return reference_year.to_string();
        }
        if Some(*period) == Period::full_year(reference_year - 1) {
            return (reference_year - 1).to_string();
        }
        for q in 1..=4 {
            if Some(*period) == Period::quarter(reference_year, q) {
                return format!("Q{q} {reference_year}");
            }
        }
        if Some(*period) == Period::for_month(period.from.year(), period.from.month()) {
            let month_name = MONTHS_DE[period.from.month0() as usize];
            return format!("{month_name} {}", period.from.year());
        }
        format!("{} – {}", format_bound(Some(period.from)), format_bound(Some(period.to)))
    }

    /// Like [`Self::range_label`], but for the filter's raw state where one
    /// or both bounds may still be empty. A missing bound renders as `"?"`.
    #[must_use]
    pub fn range_label_for_bounds(
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        reference_year: i32,
    ) -> String {
        match (from, to) {
            (Some(from), Some(to)) => Self::range_label(&Period::new(from, to), reference_year),
            _ => format!("{} – {}", format_bound(from), format_bound(to)),
        }
    }
}

/// Fixed day.month.year display format; a missing bound is a `"?"`.
fn format_bound(date: Option<NaiveDate>) -> String {
    date.map_or_else(|| "?".to_string(), |d| d.format("%d.%m.%Y").to_string())
}
