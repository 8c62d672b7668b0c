//! Offer and invoice domain types.

use chrono::{Days, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use kontor_shared::types::{ContactId, InvoiceId, OfferId, OrganizationId};

use super::service::{grand_total, item_total};
use crate::records::Product;

/// Footer printed on documents when the owner has not overridden it.
pub const FOOTER_NOTE_DEFAULT: &str = "Gemäß § 19 UStG wird keine Umsatzsteuer berechnet.";

/// Payment target applied when an invoice is issued without an explicit
/// due date.
pub const DEFAULT_PAYMENT_TERM_DAYS: u64 = 14;

/// A single quoted or invoiced position.
///
/// Never persisted on its own — always embedded in the ordered position
/// list of an offer or invoice. Invariant: `total` equals
/// `round2(quantity × unit_price)` as long as edits go through
/// [`LineItem::recalculate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Position description shown on the document.
    pub title: String,
    /// Quantity in `unit`s.
    #[serde(rename = "qty")]
    pub quantity: Decimal,
    /// Unit of measure ("Stunde", "Tag", "pauschal", ...).
    pub unit: String,
    /// Price per unit.
    pub unit_price: Decimal,
    /// Stored position total, already rounded to cents.
    pub total: Decimal,
}

impl LineItem {
    /// Builds a position; the total is computed, never caller-supplied.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        quantity: Decimal,
        unit: impl Into<String>,
        unit_price: Decimal,
    ) -> Self {
        Self {
            title: title.into(),
            quantity,
            unit: unit.into(),
            unit_price,
            total: item_total(quantity, unit_price),
        }
    }

    /// Imports a catalog product as a flat-rate position.
    #[must_use]
    pub fn from_product(product: &Product, quantity: Decimal) -> Self {
        Self::new(product.name.clone(), quantity, "pauschal", product.price)
    }

    /// Recomputes the stored total from quantity and unit price.
    pub fn recalculate(&mut self) {
        self.total = item_total(self.quantity, self.unit_price);
    }
}

/// Offer status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OfferStatus {
    /// Being drafted, not yet sent.
    Draft,
    /// Sent to the customer.
    Sent,
    /// Accepted by the customer.
    Accepted,
    /// Rejected by the customer.
    Rejected,
    /// Validity date passed without a decision.
    Expired,
}

impl OfferStatus {
    /// German display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Draft => "Entwurf",
            Self::Sent => "Gesendet",
            Self::Accepted => "Angenommen",
            Self::Rejected => "Abgelehnt",
            Self::Expired => "Abgelaufen",
        }
    }
}

/// Invoice status lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    /// Issued, payment outstanding.
    Open,
    /// Paid in full.
    Paid,
    /// Cancelled before payment.
    Cancelled,
}

impl InvoiceStatus {
    /// German display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Open => "Offen",
            Self::Paid => "Bezahlt",
            Self::Cancelled => "Storniert",
        }
    }
}

/// An offer (Angebot) document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    /// Unique identifier.
    pub id: OfferId,
    /// Organization the offer is addressed to.
    pub organization: OrganizationId,
    /// Optional contact person at that organization.
    pub contact: Option<ContactId>,
    /// Offer title.
    pub title: String,
    /// Formatted document number (`A-2026-042`). Assigned once at creation
    /// and immutable afterwards.
    pub number: String,
    /// Current status.
    pub status: OfferStatus,
    /// Issue date.
    pub date: NaiveDate,
    /// Last day the offer can be accepted.
    pub valid_until: Option<NaiveDate>,
    /// Ordered position list.
    pub items: Vec<LineItem>,
    /// Grand total over the positions, rounded to cents.
    pub total: Decimal,
    /// Free-form internal notes.
    pub notes: String,
    /// Footer text printed under the position table.
    pub footer_note: String,
}

impl Offer {
    /// Creates an empty draft offer carrying its freshly assigned number.
    #[must_use]
    pub fn new(
        organization: OrganizationId,
        contact: Option<ContactId>,
        title: impl Into<String>,
        number: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: OfferId::new(),
            organization,
            contact,
            title: title.into(),
            number: number.into(),
            status: OfferStatus::Draft,
            date,
            valid_until: None,
            items: Vec::new(),
            total: Decimal::ZERO,
            notes: String::new(),
            footer_note: FOOTER_NOTE_DEFAULT.to_string(),
        }
    }

    /// Re-establishes the money invariants after position edits: every
    /// position total and then the grand total.
    pub fn recalculate(&mut self) {
        for item in &mut self.items {
            item.recalculate();
        }
        self.total = grand_total(&self.items);
    }

    /// Whether the validity window has passed.
    #[must_use]
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.valid_until.is_some_and(|until| today > until)
    }
}

/// An invoice (Rechnung) document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique identifier.
    pub id: InvoiceId,
    /// Organization being billed.
    pub organization: OrganizationId,
    /// Optional contact person at that organization.
    pub contact: Option<ContactId>,
    /// Invoice title.
    pub title: String,
    /// Formatted document number (`R-2026-001`). Assigned once at creation
    /// and immutable afterwards.
    pub number: String,
    /// Current status.
    pub status: InvoiceStatus,
    /// Issue date.
    pub date: NaiveDate,
    /// Payment due date.
    pub due_date: Option<NaiveDate>,
    /// Ordered position list.
    pub items: Vec<LineItem>,
    /// Grand total over the positions, rounded to cents.
    pub total: Decimal,
    /// Free-form internal notes.
    pub notes: String,
    /// Footer text printed under the position table.
    pub footer_note: String,
}

impl Invoice {
    /// Creates an open invoice with the default payment term.
    #[must_use]
    pub fn new(
        organization: OrganizationId,
        contact: Option<ContactId>,
        title: impl Into<String>,
        number: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: InvoiceId::new(),
            organization,
            contact,
            title: title.into(),
            number: number.into(),
            status: InvoiceStatus::Open,
            date,
            due_date: Some(default_due_date(date)),
            items: Vec::new(),
            total: Decimal::ZERO,
            notes: String::new(),
            footer_note: FOOTER_NOTE_DEFAULT.to_string(),
        }
    }

    /// Re-establishes the money invariants after position edits.
    pub fn recalculate(&mut self) {
        for item in &mut self.items {
            item.recalculate();
        }
        self.total = grand_total(&self.items);
    }

    /// Whether payment is outstanding past the due date.
    #[must_use]
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        self.status == InvoiceStatus::Open && self.due_date.is_some_and(|due| today > due)
    }

    /// Days until the due date; negative once overdue.
    #[must_use]
    pub fn days_until_due(&self, today: NaiveDate) -> Option<i64> {
        self.due_date.map(|due| (due - today).num_days())
    }
}

/// Due date applied to a freshly issued invoice.
#[must_use]
pub fn default_due_date(issued: NaiveDate) -> NaiveDate {
    issued + Days::new(DEFAULT_PAYMENT_TERM_DAYS)
}
