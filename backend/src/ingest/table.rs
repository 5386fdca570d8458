//! Tokenizes an uploaded CSV into raw rows keyed by record field.

use crate::error::{RowError, UploadError};
use crate::ingest::profile::{Column, Presence, Profile};
use csv::{ReaderBuilder, StringRecord, Trim};
use log::warn;
use std::collections::HashMap;
use std::fmt;

/// The cells of one CSV line, keyed by the record field they feed.
///
/// A field is absent when the line was shorter than the header or the column
/// is an optional one the file does not carry.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    pub line: u64,
    cells: HashMap<&'static str, String>,
}

impl RawRow {
    pub fn new(line: u64, cells: HashMap<&'static str, String>) -> Self {
        RawRow { line, cells }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.cells.get(field).map(String::as_str)
    }

    /// Cell text, or an empty string when the cell is absent.
    pub fn text(&self, field: &str) -> String {
        self.get(field).unwrap_or_default().to_string()
    }

    /// Cell text, `None` when absent or blank.
    pub fn optional(&self, field: &str) -> Option<String> {
        self.get(field)
            .filter(|v| !v.trim().is_empty())
            .map(str::to_string)
    }
}

/// A row-level failure tied to its CSV line.
#[derive(Debug, Clone, PartialEq)]
pub struct LineError {
    pub line: u64,
    pub error: RowError,
}

impl fmt::Display for LineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Row {}: {}", self.line, self.error)
    }
}

pub type ParsedRow = Result<RawRow, LineError>;

/// Positions of the profile's columns in the uploaded header.
struct ColumnMap {
    positions: Vec<(usize, &'static Column)>,
}

impl ColumnMap {
    fn resolve(headers: &StringRecord, profile: &'static Profile) -> Result<Self, UploadError> {
        let index: HashMap<&str, usize> = headers
            .iter()
            .enumerate()
            .map(|(i, h)| (clean_header(h), i))
            .collect();

        let mut positions = Vec::with_capacity(profile.columns.len());
        let mut missing = Vec::new();
        for column in profile.columns {
            match index.get(column.header) {
                Some(&i) => positions.push((i, column)),
                None if column.presence == Presence::Optional => {}
                None => missing.push(column.header.to_string()),
            }
        }
        if !missing.is_empty() {
            return Err(UploadError::MissingColumns(missing));
        }

        let unknown: Vec<&str> = index
            .keys()
            .filter(|h| !h.is_empty() && profile.columns.iter().all(|c| c.header != **h))
            .copied()
            .collect();
        if !unknown.is_empty() {
            warn!(
                "{} upload has unknown columns, ignoring: {}",
                profile.kind,
                unknown.join(", ")
            );
        }

        Ok(ColumnMap { positions })
    }

    fn row(&self, record: &StringRecord, line: u64) -> RawRow {
        let cells = self
            .positions
            .iter()
            .filter_map(|(i, column)| record.get(*i).map(|v| (column.field, v.to_string())))
            .collect();
        RawRow::new(line, cells)
    }
}

fn clean_header(header: &str) -> &str {
    header.trim_start_matches('\u{feff}').trim()
}

/// Splits `text` into rows using the profile's delimiter and column table.
///
/// Fails when the header lacks a required column or when no data row exists.
/// A line the tokenizer cannot read becomes a failed row instead of failing
/// the whole table.
pub fn parse_table(text: &str, profile: &'static Profile) -> Result<Vec<ParsedRow>, UploadError> {
    let mut reader = ReaderBuilder::new()
        .delimiter(profile.delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(Trim::Headers)
        .from_reader(text.as_bytes());

    let headers = reader
        .headers()
        .map_err(|_| UploadError::EmptyOrMalformedTable)?
        .clone();
    if headers.iter().all(|h| clean_header(h).is_empty()) {
        return Err(UploadError::EmptyOrMalformedTable);
    }
    let map = ColumnMap::resolve(&headers, profile)?;

    let mut rows = Vec::new();
    for (i, result) in reader.records().enumerate() {
        let fallback_line = i as u64 + 2; // header is line 1
        match result {
            Ok(record) => {
                let line = record
                    .position()
                    .map(|p| p.line())
                    .unwrap_or(fallback_line);
                rows.push(Ok(map.row(&record, line)));
            }
            Err(e) => rows.push(Err(LineError {
                line: e.position().map(|p| p.line()).unwrap_or(fallback_line),
                error: RowError::Malformed(e.to_string()),
            })),
        }
    }

    if rows.is_empty() {
        return Err(UploadError::EmptyOrMalformedTable);
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::profile::profile;
    use common::model::kind::UploadKind;

    const TANK_HEADER: &str =
        "TankID;TankName;KraftstoffTyp;MaxKapazitaet;AktuellerBestand;Datum;Zeit;Verkaufsmenge;Nachfuellung";

    #[test]
    fn maps_cells_to_fields() {
        let text = format!("{TANK_HEADER}\nT1;Tank 1;Diesel;10000;8000,5;01.03.2024;08:00;150,25;0\n");
        let rows = parse_table(&text, profile(UploadKind::TankReading)).unwrap();

        assert_eq!(rows.len(), 1);
        let row = rows[0].as_ref().unwrap();
        assert_eq!(row.line, 2);
        assert_eq!(row.get("tankId"), Some("T1"));
        assert_eq!(row.get("currentLevel"), Some("8000,5"));
        assert_eq!(row.get("date"), Some("01.03.2024"));
    }

    #[test]
    fn column_order_does_not_matter() {
        let text = "Nachfuellung;Zeit;Datum;TankID;TankName;KraftstoffTyp;MaxKapazitaet;AktuellerBestand;Verkaufsmenge\n\
                    5;09:00;02.03.2024;T2;Tank 2;Super;5000;100;1\n";
        let rows = parse_table(text, profile(UploadKind::TankReading)).unwrap();
        let row = rows[0].as_ref().unwrap();
        assert_eq!(row.get("tankId"), Some("T2"));
        assert_eq!(row.get("refillAmount"), Some("5"));
    }

    #[test]
    fn missing_columns_fail_fast() {
        let text = "TankID;TankName;Datum\nT1;Tank 1;01.03.2024\n";
        let err = parse_table(text, profile(UploadKind::TankReading)).unwrap_err();
        match err {
            UploadError::MissingColumns(missing) => {
                assert!(missing.contains(&"KraftstoffTyp".to_string()));
                assert!(missing.contains(&"Zeit".to_string()));
                assert!(!missing.contains(&"TankID".to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn optional_columns_may_be_absent() {
        let text = "date,totalSales,totalProfit,malfunctions,diesel,adBlue,superE5,superE10,cleaning\n\
                    2024-03-01,1,2,3,4,5,6,7,8\n";
        assert!(parse_table(text, profile(UploadKind::SummarySales)).is_ok());
    }

    #[test]
    fn header_only_is_empty() {
        let err = parse_table(TANK_HEADER, profile(UploadKind::TankReading)).unwrap_err();
        assert!(matches!(err, UploadError::EmptyOrMalformedTable));
    }

    #[test]
    fn empty_text_is_malformed() {
        let err = parse_table("", profile(UploadKind::TankReading)).unwrap_err();
        assert!(matches!(err, UploadError::EmptyOrMalformedTable));
    }

    #[test]
    fn short_rows_leave_fields_absent() {
        let text = format!("{TANK_HEADER}\nT1;Tank 1\n");
        let rows = parse_table(&text, profile(UploadKind::TankReading)).unwrap();
        let row = rows[0].as_ref().unwrap();
        assert_eq!(row.get("tankName"), Some("Tank 1"));
        assert_eq!(row.get("fuelType"), None);
        assert_eq!(row.text("fuelType"), "");
    }

    #[test]
    fn blank_lines_are_skipped() {
        let text = format!("{TANK_HEADER}\n\nT1;A;D;1;1;01.03.2024;08:00;0;0\n\n");
        let rows = parse_table(&text, profile(UploadKind::TankReading)).unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn byte_order_mark_is_ignored_in_header() {
        let text = format!("\u{feff}{TANK_HEADER}\nT1;A;D;1;1;01.03.2024;08:00;0;0\n");
        assert!(parse_table(&text, profile(UploadKind::TankReading)).is_ok());
    }

    #[test]
    fn optional_cells_treat_blank_as_absent() {
        let row = RawRow::new(
            2,
            HashMap::from([("cardNumber", " ".to_string()), ("customerNumber", "C1".to_string())]),
        );
        assert_eq!(row.optional("cardNumber"), None);
        assert_eq!(row.optional("customerNumber"), Some("C1".to_string()));
        assert_eq!(row.optional("driverNumber"), None);
    }
}
