//! Conversion of raw cell text into typed values.
//!
//! Dates are strict: a row whose date cannot be read is rejected. Numbers are
//! best effort: the leading number of a cell is used and trailing text ignored
//! ("8000,5 L" is 8000.5); a cell without one becomes zero and never rejects a row.

use crate::error::RowError;
use crate::ingest::profile::DateFormat;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

pub fn parse_date(raw: &str, format: DateFormat) -> Result<NaiveDate, RowError> {
    match format {
        DateFormat::European => european_date(raw),
        DateFormat::Iso => iso_date(raw),
    }
}

/// Parses `DD.MM.YYYY`.
pub fn european_date(raw: &str) -> Result<NaiveDate, RowError> {
    let parts: Vec<&str> = raw.trim().split('.').collect();
    if parts.len() != 3 {
        return Err(RowError::InvalidDateFormat(raw.to_string()));
    }
    let invalid = || RowError::InvalidDate(raw.to_string());

    let day: u32 = parts[0].trim().parse().map_err(|_| invalid())?;
    let month: u32 = parts[1].trim().parse().map_err(|_| invalid())?;
    let year: i32 = parts[2].trim().parse().map_err(|_| invalid())?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(invalid)
}

/// Parses an ISO 8601 date or date-time and keeps the calendar day.
pub fn iso_date(raw: &str) -> Result<NaiveDate, RowError> {
    let value = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|dt| dt.date())
        .map_err(|_| RowError::InvalidDate(raw.to_string()))
}

fn digits_from(bytes: &[u8], start: usize) -> usize {
    bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count()
}

fn sign_len(bytes: &[u8]) -> usize {
    usize::from(matches!(bytes.first(), Some(b'+' | b'-')))
}

/// Longest leading decimal literal: sign, digits, one `.`, optional exponent.
fn decimal_prefix(value: &str) -> &str {
    let bytes = value.as_bytes();
    let mut end = sign_len(bytes);
    let whole = digits_from(bytes, end);
    end += whole;

    let mut digits = whole;
    if bytes.get(end) == Some(&b'.') {
        let fraction = digits_from(bytes, end + 1);
        if whole > 0 || fraction > 0 {
            digits += fraction;
            end += 1 + fraction;
        }
    }
    if digits == 0 {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_digits = digits_from(bytes, exp);
        if exp_digits > 0 {
            end = exp + exp_digits;
        }
    }
    &value[..end]
}

/// Leading decimal with `,` or `.` as separator; `0.0` when there is none.
///
/// Only the first `,` is a separator: "1,2,3" reads as 1.2.
pub fn decimal(raw: Option<&str>) -> f64 {
    raw.map(|v| v.trim().replacen(',', ".", 1))
        .and_then(|v| decimal_prefix(&v).parse::<f64>().ok())
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Leading whole number, cut at the first non-digit; `0` when there is none.
pub fn integer(raw: Option<&str>) -> i64 {
    raw.map(str::trim)
        .and_then(|v| {
            let bytes = v.as_bytes();
            let end = sign_len(bytes) + digits_from(bytes, sign_len(bytes));
            v[..end].parse::<i64>().ok()
        })
        .unwrap_or(0)
}
