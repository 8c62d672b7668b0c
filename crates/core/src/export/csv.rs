//! CSV encoding of bookkeeping entries (Einnahmenüberschussrechnung).
//!
//! The format is fixed by what spreadsheet imports expect from a German
//! locale: semicolon-delimited, every field double-quoted, CRLF records,
//! a UTF-8 byte-order mark so Excel detects the encoding, and amounts
//! with a decimal comma.

use csv::{QuoteStyle, Terminator, WriterBuilder};
use rust_decimal::Decimal;

use kontor_shared::{AppError, AppResult};

use crate::billing::round2;
use crate::ledger::AccountingEntry;

/// Column headers, in export order.
const HEADER: [&str; 7] = [
    "Datum",
    "Typ",
    "Betrag (€)",
    "Kategorie",
    "Beschreibung",
    "Belegnummer",
    "Notiz",
];

/// UTF-8 byte-order mark.
const BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Renders entries as CSV bytes, ready to be offered as a download.
///
/// Entries are written in the order given; the caller decides sorting and
/// period filtering beforehand.
pub fn entries_csv(entries: &[AccountingEntry]) -> AppResult<Vec<u8>> {
    let mut out = BOM.to_vec();
    {
        let mut writer = WriterBuilder::new()
            .delimiter(b';')
            .quote_style(QuoteStyle::Always)
            .terminator(Terminator::CRLF)
            .from_writer(&mut out);

        writer
            .write_record(HEADER)
            .map_err(|err| AppError::Serialization(err.to_string()))?;

        for entry in entries {
            writer
                .write_record([
                    entry.date.to_string(),
                    entry.entry_type.label().to_string(),
                    amount_field(entry.amount),
                    entry.category.clone(),
                    entry.description.clone(),
                    entry.reference_number.clone(),
                    entry.notes.clone(),
                ])
                .map_err(|err| AppError::Serialization(err.to_string()))?;
        }

        writer
            .flush()
            .map_err(|err| AppError::Serialization(err.to_string()))?;
    }
    Ok(out)
}

/// File name for an export of the labeled period
/// (`"Q2 2026"` → `"EUeR_Q2_2026.csv"`).
#[must_use]
pub fn export_file_name(label: &str) -> String {
    let safe: String = label
        .chars()
        .map(|c| if c.is_whitespace() || c == '/' { '_' } else { c })
        .collect();
    format!("EUeR_{safe}.csv")
}

/// Two-decimal amount with the German decimal comma.
fn amount_field(amount: Decimal) -> String {
    format!("{:.2}", round2(amount)).replace('.', ",")
}
