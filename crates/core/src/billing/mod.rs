//! Line items, document totals and the offer/invoice domain types.
//!
//! This module implements the billing math shared by offers and invoices:
//! - Per-position totals and the document grand total
//! - The fixed 2-decimal rounding policy (half away from zero)
//! - Offer and invoice documents with their status lifecycles
//! - The codec for the store's flat-text position field

pub mod codec;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use codec::{decode_items, encode_items};
pub use service::{grand_total, item_total, round2};
pub use types::{
    DEFAULT_PAYMENT_TERM_DAYS, FOOTER_NOTE_DEFAULT, Invoice, InvoiceStatus, LineItem, Offer,
    OfferStatus, default_due_date,
};
