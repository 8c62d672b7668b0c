//! Property-based tests for period aggregation.

use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::service::ReportService;
use super::types::Period;
use crate::billing::round2;
use crate::ledger::types::fixtures::entry;
use crate::ledger::{AccountingEntry, EntryType};

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (2020i32..=2030, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

fn entry_type() -> impl Strategy<Value = EntryType> {
    prop_oneof![Just(EntryType::Income), Just(EntryType::Expense)]
}

fn any_entry() -> impl Strategy<Value = AccountingEntry> {
    (entry_type(), any_date(), 0i64..=10_000_000)
        .prop_map(|(entry_type, date, cents)| entry(entry_type, date, Decimal::new(cents, 2)))
}

fn any_period() -> impl Strategy<Value = Period> {
    (any_date(), any_date()).prop_map(|(a, b)| Period::new(a.min(b), a.max(b)))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Filtering partitions the input exactly: kept entries lie inside the
    /// period, dropped entries lie outside it.
    #[test]
    fn prop_filter_partitions_by_containment(
        entries in prop::collection::vec(any_entry(), 0..40),
        period in any_period(),
    ) {
        let filtered = ReportService::filter_by_period(&entries, &period);
        prop_assert!(filtered.iter().all(|e| period.contains(e.date)));

        let kept = filtered.len();
        let contained = entries.iter().filter(|e| period.contains(e.date)).count();
        prop_assert_eq!(kept, contained);
    }

    /// Period bounds themselves are always contained.
    #[test]
    fn prop_period_bounds_are_inclusive(period in any_period()) {
        prop_assert!(period.contains(period.from));
        prop_assert!(period.contains(period.to));
    }

    /// The profit figure is exactly the rounded difference of the rounded
    /// totals, and the totals are the rounded raw sums.
    #[test]
    fn prop_summary_totals_are_consistent(entries in prop::collection::vec(any_entry(), 0..40)) {
        let raw_income: Decimal = entries
            .iter()
            .filter(|e| e.entry_type == EntryType::Income)
            .map(|e| e.amount)
            .sum();
        let raw_expense: Decimal = entries
            .iter()
            .filter(|e| e.entry_type == EntryType::Expense)
            .map(|e| e.amount)
            .sum();

        let summary = ReportService::summarize(entries.iter());
        prop_assert_eq!(summary.total_income, round2(raw_income));
        prop_assert_eq!(summary.total_expense, round2(raw_expense));
        prop_assert_eq!(summary.net, round2(summary.total_income - summary.total_expense));
    }

    /// With non-negative amounts, widening the period never shrinks the
    /// income total.
    #[test]
    fn prop_wider_period_never_loses_income(
        entries in prop::collection::vec(any_entry(), 0..40),
        period in any_period(),
    ) {
        let narrow = ReportService::summarize(ReportService::filter_by_period(&entries, &period));
        let all = ReportService::summarize(entries.iter());
        prop_assert!(all.total_income >= narrow.total_income);
        prop_assert!(all.total_expense >= narrow.total_expense);
    }

    /// A label is derived for every well-formed period and never renders a
    /// missing-bound placeholder.
    #[test]
    fn prop_label_never_empty_for_full_bounds(period in any_period(), year in 2020i32..=2030) {
        let label = ReportService::range_label(&period, year);
        prop_assert!(!label.is_empty());
        prop_assert!(!label.contains('?'));
    }
}
