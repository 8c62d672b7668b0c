//! Position and document total calculations.

use rust_decimal::{Decimal, RoundingStrategy};

use super::types::LineItem;

/// Rounds to two decimal places, half away from zero.
///
/// This is the cent-granularity policy every money figure in the system
/// goes through: `3 × 0.005` rounds to `0.02`, not the `0.01` that
/// banker's rounding would give.
#[must_use]
pub fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Total of a single position: `round2(quantity × unit_price)`.
///
/// Negative quantities or prices propagate algebraically; keeping them out
/// of documents is the edit form's job, not this function's.
#[must_use]
pub fn item_total(quantity: Decimal, unit_price: Decimal) -> Decimal {
    round2(quantity * unit_price)
}

/// Grand total of a document: the stored per-position totals summed and
/// rounded again.
///
/// The stored totals are authoritative — a total produced by another write
/// path is summed as-is, not recomputed from quantity and price. On clean
/// two-decimal inputs the outer rounding is a no-op.
#[must_use]
pub fn grand_total(items: &[LineItem]) -> Decimal {
    round2(items.iter().map(|item| item.total).sum::<Decimal>())
}
