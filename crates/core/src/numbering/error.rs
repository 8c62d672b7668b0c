//! Numbering error types.

use thiserror::Error;

/// Errors raised when parsing a formatted document number.
///
/// The generator treats any parse failure as "series empty for this year",
/// so these never propagate out of number generation; they exist for
/// callers that parse stored numbers directly (sorting, display).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseNumberError {
    /// The string does not have the `{prefix}-{year}-{counter}` shape.
    #[error("number does not match the {{prefix}}-{{year}}-{{counter}} pattern")]
    Malformed,

    /// The prefix letter does not name a known document series.
    #[error("unrecognized document series prefix")]
    UnknownPrefix,
}
