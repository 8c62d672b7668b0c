//! Bookkeeping entry types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use kontor_shared::types::{EntryId, InvoiceId};

/// Cash-basis entry kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    /// Money received.
    Income,
    /// Money spent.
    Expense,
}

impl EntryType {
    /// German display label, also used in the CSV export.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Income => "Einnahme",
            Self::Expense => "Ausgabe",
        }
    }

    /// Signed contribution to the profit figure: income counts positive,
    /// expense negative.
    #[must_use]
    pub fn signed(self, amount: Decimal) -> Decimal {
        match self {
            Self::Income => amount,
            Self::Expense => -amount,
        }
    }
}

/// Expense categories offered by the entry form.
pub const EXPENSE_CATEGORIES: [&str; 10] = [
    "Büromaterial",
    "Software & Lizenzen",
    "Hosting",
    "Reisekosten",
    "Fahrzeug",
    "Bewirtung",
    "Versicherung",
    "Telefon & Internet",
    "Fortbildung",
    "Sonstiges",
];

/// A dated income or expense record.
///
/// Aggregation input only: the report and export layers read these, they
/// never mutate them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountingEntry {
    /// Unique identifier.
    pub id: EntryId,
    /// Income or expense.
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    /// Booking date.
    pub date: NaiveDate,
    /// Amount in euros, non-negative by form validation.
    pub amount: Decimal,
    /// Category from [`EXPENSE_CATEGORIES`], or free text for income.
    pub category: String,
    /// Short description.
    pub description: String,
    /// Receipt reference (e.g. `BE-2026-001`).
    pub reference_number: String,
    /// Free-form notes.
    pub notes: String,
    /// Invoice this entry settles, if any.
    pub invoice: Option<InvoiceId>,
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// Builds a minimal entry for aggregation tests.
    pub(crate) fn entry(entry_type: EntryType, date: NaiveDate, amount: Decimal) -> AccountingEntry {
        AccountingEntry {
            id: EntryId::new(),
            entry_type,
            date,
            amount,
            category: String::new(),
            description: String::new(),
            reference_number: String::new(),
            notes: String::new(),
            invoice: None,
        }
    }
}
