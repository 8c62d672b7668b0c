//! Reporting period types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A closed date interval, inclusive on both ends.
///
/// `from ≤ to` is expected but not enforced; an inverted period simply
/// contains no dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// First day of the interval.
    pub from: NaiveDate,
    /// Last day of the interval.
    pub to: NaiveDate,
}

impl Period {
    /// Creates a period from its bounds.
    #[must_use]
    pub const fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }

    /// January 1 through December 31 of `year`.
    #[must_use]
    pub fn full_year(year: i32) -> Option<Self> {
        Some(Self::new(
            NaiveDate::from_ymd_opt(year, 1, 1)?,
            NaiveDate::from_ymd_opt(year, 12, 31)?,
        ))
    }

    /// Calendar quarter `q` (1-4) of `year`.
    #[must_use]
    pub fn quarter(year: i32, q: u32) -> Option<Self> {
        if !(1..=4).contains(&q) {
            return None;
        }
        let first_month = (q - 1) * 3 + 1;
        Some(Self::new(
            NaiveDate::from_ymd_opt(year, first_month, 1)?,
            last_day_of_month(year, first_month + 2)?,
        ))
    }

    /// The full calendar month `month` (1-12) of `year`.
    #[must_use]
    pub fn for_month(year: i32, month: u32) -> Option<Self> {
        Some(Self::new(
            NaiveDate::from_ymd_opt(year, month, 1)?,
            last_day_of_month(year, month)?,
        ))
    }

    /// Returns true if the given date falls within this period.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }
}

/// Last day of the given month; month lengths and leap years handled by
/// the calendar, not by a lookup table.
#[must_use]
pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    if !(1..=12).contains(&month) {
        return None;
    }
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}

/// Income, expense and profit totals for a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodSummary {
    /// Sum of income amounts, rounded to cents.
    pub total_income: Decimal,
    /// Sum of expense amounts, rounded to cents.
    pub total_expense: Decimal,
    /// Profit (or loss when negative): income minus expense.
    pub net: Decimal,
}
