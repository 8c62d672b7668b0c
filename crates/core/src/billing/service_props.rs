//! Property-based tests for billing math and the position codec.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::codec::{decode_items, encode_items};
use super::service::{grand_total, item_total, round2};
use super::types::LineItem;

/// Quantities with up to three decimal places.
fn quantity() -> impl Strategy<Value = Decimal> {
    (0i64..=1_000_000).prop_map(|thousandths| Decimal::new(thousandths, 3))
}

/// Prices in whole cents, up to 100,000.00.
fn price() -> impl Strategy<Value = Decimal> {
    (0i64..=10_000_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn line_item() -> impl Strategy<Value = LineItem> {
    (
        "[A-Za-z ]{0,24}",
        quantity(),
        prop_oneof![
            Just("Stunde".to_string()),
            Just("Tag".to_string()),
            Just("pauschal".to_string()),
            Just("Stück".to_string()),
        ],
        price(),
    )
        .prop_map(|(title, quantity, unit, unit_price)| {
            LineItem::new(title, quantity, unit, unit_price)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Rounding to cents is idempotent.
    #[test]
    fn prop_round2_is_idempotent(quantity in quantity(), price in price()) {
        let total = item_total(quantity, price);
        prop_assert_eq!(round2(total), total);
    }

    /// A position total never carries sub-cent precision.
    #[test]
    fn prop_item_total_has_cent_scale(quantity in quantity(), price in price()) {
        prop_assert!(item_total(quantity, price).scale() <= 2);
    }

    /// The factors are not interchangeable in meaning, but the arithmetic
    /// does not care which one is which.
    #[test]
    fn prop_item_total_is_numerically_symmetric(a in quantity(), b in quantity()) {
        prop_assert_eq!(item_total(a, b), item_total(b, a));
    }

    /// For positions whose stored totals are clean two-decimal values, the
    /// grand total equals the plain rounded sum.
    #[test]
    fn prop_grand_total_matches_rounded_sum(items in prop::collection::vec(line_item(), 0..12)) {
        let plain_sum: Decimal = items.iter().map(|item| item.total).sum();
        prop_assert_eq!(grand_total(&items), round2(plain_sum));
    }

    /// Position order never changes the grand total.
    #[test]
    fn prop_grand_total_is_order_independent(items in prop::collection::vec(line_item(), 0..12)) {
        let mut reversed = items.clone();
        reversed.reverse();
        prop_assert_eq!(grand_total(&items), grand_total(&reversed));
    }

    /// The store codec is lossless for every valid position list.
    #[test]
    fn prop_codec_round_trips(items in prop::collection::vec(line_item(), 0..12)) {
        let encoded = encode_items(&items).unwrap();
        prop_assert_eq!(decode_items(&encoded), items);
    }
}
