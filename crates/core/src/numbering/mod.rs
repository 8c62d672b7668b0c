//! Sequence numbers for offer and invoice documents.
//!
//! Each document series is numbered `{prefix}-{year}-{counter}` and the
//! counter restarts when the calendar year changes. The "source of truth"
//! for the last issued number is the record store, queried by the caller;
//! the generator itself is pure and never reads a clock.

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::ParseNumberError;
pub use service::{NumberingService, next_number};
pub use types::{DocumentNumber, DocumentSeries};
