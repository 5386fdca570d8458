//! Row-by-row normalization and the bulk-then-per-row persistence policy.

use crate::error::StoreError;
use crate::ingest::profile::Profile;
use crate::ingest::records::Normalize;
use crate::ingest::table::{LineError, ParsedRow};
use crate::ingest::validate::validate_row;
use crate::store::{Gateway, InsertMode, StoredRecord};
use log::{debug, error, warn};

/// Records that survived validation and messages for the rows that did not.
#[derive(Debug)]
pub struct Batch<R> {
    pub records: Vec<R>,
    pub rejected: Vec<String>,
}

/// Validates and coerces every row independently. A bad row only adds a message.
pub fn normalize_rows<R: Normalize>(rows: Vec<ParsedRow>, profile: &Profile) -> Batch<R> {
    let mut records = Vec::with_capacity(rows.len());
    let mut rejected = Vec::new();

    for parsed in rows {
        let result = parsed.and_then(|row| {
            validate_row(&row, profile.columns)
                .and_then(|_| R::normalize(&row, profile))
                .map_err(|error| LineError {
                    line: row.line,
                    error,
                })
        });
        match result {
            Ok(record) => records.push(record),
            Err(e) => {
                debug!("{} row rejected: {}", profile.kind, e);
                rejected.push(e.to_string());
            }
        }
    }

    Batch { records, rejected }
}

#[derive(Debug, Default, PartialEq)]
pub struct Persisted {
    pub inserted: usize,
    /// One message per record that could not be stored.
    pub failed: Vec<String>,
    pub fell_back: bool,
}

/// Stores `records` with one bulk call, retrying them one by one if it fails.
///
/// During the retry a failing record is reported and the rest continue. Only
/// an unusable store (poisoned lock) aborts.
pub fn persist<R, G>(
    gateway: &G,
    records: &[R],
    mode: InsertMode,
    upload_id: &str,
) -> Result<Persisted, StoreError>
where
    R: StoredRecord,
    G: Gateway,
{
    match gateway.insert_many(records, mode, upload_id) {
        Ok(inserted) => {
            return Ok(Persisted {
                inserted,
                ..Persisted::default()
            })
        }
        Err(StoreError::Poisoned) => return Err(StoreError::Poisoned),
        Err(e) => warn!(
            "[{}] Bulk insert failed, trying individual inserts: {}",
            upload_id, e
        ),
    }

    let mut persisted = Persisted {
        fell_back: true,
        ..Persisted::default()
    };
    for record in records {
        match gateway.insert_one(record, mode, upload_id) {
            Ok(written) => persisted.inserted += written,
            Err(StoreError::Poisoned) => return Err(StoreError::Poisoned),
            Err(e) => {
                let id = record.natural_id();
                error!("[{}] Error inserting item {}: {}", upload_id, id, e);
                persisted
                    .failed
                    .push(format!("Failed to insert item {}: {}", id, e));
            }
        }
    }
    Ok(persisted)
}
