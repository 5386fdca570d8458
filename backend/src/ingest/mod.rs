//! # CSV ingestion pipeline
//!
//! One pipeline serves every upload kind; the kind only selects a `Profile`
//! (delimiter, date format, duplicate policy, column table) and the record type.
//!
//! ## Flow
//!
//! 1.  **Tokenize** (`table`): the text is split with the profile's delimiter and
//!     the header row is matched against the column table. Missing columns or a
//!     table without data rows end the upload here.
//! 2.  **Validate and coerce** (`validate`, `coerce`, `records`): each row is
//!     checked for its required cells and converted into a typed record. A row
//!     that fails leaves a `Row <line>: ...` message and processing continues.
//! 3.  **Persist** (`batch`): all valid records go to the gateway in one bulk call.
//!     If that fails they are retried one at a time; a record that still fails is
//!     reported with its natural identifier while the others are kept.
//! 4.  **Outcome**: `Stored` when every valid record was written, `Partial` when the
//!     per-record retry left some behind. A file without a single valid row is
//!     `UploadError::NoValidData` and nothing is written.

pub mod batch;
pub mod coerce;
pub mod profile;
pub mod records;
pub mod table;
pub mod validate;

use crate::error::UploadError;
use crate::ingest::batch::{normalize_rows, persist, Batch};
use crate::ingest::profile::profile;
use crate::ingest::records::Normalize;
use crate::ingest::table::parse_table;
use crate::store::Gateway;
use common::model::kind::UploadKind;
use common::model::sales::SalesRecord;
use common::model::summary::DailySales;
use common::model::tank::TankReading;
use log::info;

/// Result of an upload that got as far as the database.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// Every valid record was written. `skipped` holds the messages of rows
    /// rejected during validation.
    Stored {
        inserted: usize,
        skipped: Vec<String>,
    },
    /// Some valid records could not be written; `failed` names them.
    Partial {
        inserted: usize,
        failed: Vec<String>,
        skipped: Vec<String>,
    },
}

/// Runs the pipeline for the record type selected by `kind`.
pub fn ingest_kind<G: Gateway>(
    kind: UploadKind,
    gateway: &G,
    text: &str,
    upload_id: &str,
) -> Result<Outcome, UploadError> {
    match kind {
        UploadKind::SalesLedger => ingest::<SalesRecord, G>(gateway, text, upload_id),
        UploadKind::SummarySales => ingest::<DailySales, G>(gateway, text, upload_id),
        UploadKind::TankReading => ingest::<TankReading, G>(gateway, text, upload_id),
    }
}

pub fn ingest<R, G>(gateway: &G, text: &str, upload_id: &str) -> Result<Outcome, UploadError>
where
    R: Normalize,
    G: Gateway,
{
    let profile = profile(R::KIND);
    let rows = parse_table(text, profile)?;
    let row_count = rows.len();

    let Batch { records, rejected } = normalize_rows::<R>(rows, profile);
    info!(
        "[{}] {} upload: {} rows, {} valid, {} rejected",
        upload_id,
        R::KIND,
        row_count,
        records.len(),
        rejected.len()
    );
    if records.is_empty() {
        return Err(UploadError::NoValidData(rejected));
    }

    let persisted = persist(gateway, &records, profile.insert_mode, upload_id)?;
    info!(
        "[{}] {} of {} records stored{}",
        upload_id,
        persisted.inserted,
        records.len(),
        if persisted.fell_back {
            " after per-record retry"
        } else {
            ""
        }
    );

    if persisted.failed.is_empty() {
        Ok(Outcome::Stored {
            inserted: persisted.inserted,
            skipped: rejected,
        })
    } else {
        Ok(Outcome::Partial {
            inserted: persisted.inserted,
            failed: persisted.failed,
            skipped: rejected,
        })
    }
}
