//! Unit tests for the CSV export encoding.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use kontor_shared::types::EntryId;

use super::csv::{entries_csv, export_file_name};
use crate::ledger::{AccountingEntry, EntryType};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn entry(
    entry_type: EntryType,
    day: NaiveDate,
    amount: Decimal,
    category: &str,
    description: &str,
    reference_number: &str,
) -> AccountingEntry {
    AccountingEntry {
        id: EntryId::new(),
        entry_type,
        date: day,
        amount,
        category: category.to_string(),
        description: description.to_string(),
        reference_number: reference_number.to_string(),
        notes: String::new(),
        invoice: None,
    }
}

fn body(bytes: &[u8]) -> String {
    assert_eq!(bytes[..3], [0xEF, 0xBB, 0xBF], "missing UTF-8 BOM");
    String::from_utf8(bytes[3..].to_vec()).unwrap()
}

#[test]
fn test_empty_export_is_header_only() {
    let bytes = entries_csv(&[]).unwrap();
    assert_eq!(
        body(&bytes),
        "\"Datum\";\"Typ\";\"Betrag (€)\";\"Kategorie\";\"Beschreibung\";\"Belegnummer\";\"Notiz\"\r\n"
    );
}

#[test]
fn test_rows_use_german_labels_and_decimal_comma() {
    let entries = vec![
        entry(
            EntryType::Income,
            date(2026, 1, 5),
            dec!(1234.5),
            "",
            "Projektzahlung",
            "BE-2026-001",
        ),
        entry(
            EntryType::Expense,
            date(2026, 1, 10),
            dec!(30),
            "Hosting",
            "Server Januar",
            "",
        ),
    ];
    let text = body(&entries_csv(&entries).unwrap());
    let lines: Vec<&str> = text.split("\r\n").collect();
    assert_eq!(
        lines[1],
        "\"2026-01-05\";\"Einnahme\";\"1234,50\";\"\";\"Projektzahlung\";\"BE-2026-001\";\"\""
    );
    assert_eq!(
        lines[2],
        "\"2026-01-10\";\"Ausgabe\";\"30,00\";\"Hosting\";\"Server Januar\";\"\";\"\""
    );
    // Trailing CRLF after the last record.
    assert_eq!(lines[3], "");
}

#[test]
fn test_embedded_quotes_and_separators_are_escaped() {
    let entries = vec![entry(
        EntryType::Expense,
        date(2026, 2, 2),
        dec!(19.99),
        "Software & Lizenzen",
        "Lizenz \"Pro\"; jährlich",
        "",
    )];
    let text = body(&entries_csv(&entries).unwrap());
    assert!(text.contains("\"Lizenz \"\"Pro\"\"; jährlich\""));
}

#[test]
fn test_amounts_are_re_rounded_for_display() {
    let entries = vec![entry(
        EntryType::Income,
        date(2026, 3, 1),
        dec!(10.005),
        "",
        "",
        "",
    )];
    let text = body(&entries_csv(&entries).unwrap());
    assert!(text.contains("\"10,01\""));
}

#[test]
fn test_export_file_name_replaces_unsafe_characters() {
    assert_eq!(export_file_name("2026"), "EUeR_2026.csv");
    assert_eq!(export_file_name("Q2 2026"), "EUeR_Q2_2026.csv");
    assert_eq!(
        export_file_name("05.03.2026 – 20.03.2026"),
        "EUeR_05.03.2026_–_20.03.2026.csv"
    );
    assert_eq!(export_file_name("2026/03"), "EUeR_2026_03.csv");
}
