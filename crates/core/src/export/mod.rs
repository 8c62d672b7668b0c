//! Export encodings fed by the bookkeeping report.
//!
//! Only the byte-level encoding lives here; offering the result as a
//! browser download (or writing it anywhere) is the caller's concern.

pub mod csv;

#[cfg(test)]
mod tests;

pub use csv::{entries_csv, export_file_name};
