//! CSV upload endpoints.
//!
//! Workflow of every upload:
//! 1. The multipart `file` field is read into memory, bounded by the configured
//!    upload limit, and decoded as UTF-8 (a leading BOM is dropped).
//! 2. A fresh upload id tags the request in logs and in every stored row.
//! 3. The ingest pipeline for the route's kind runs on the blocking pool.
//! 4. `report` turns the pipeline outcome into the JSON envelope.
//!
//! Routes:
//! - `POST /api/file/upload`: daily summary sales.
//! - `POST /api/file/upload/sales-upload`: sales ledger.
//! - `POST /api/file/upload/tank-upload`: tank readings.
//! - `POST /api/file/upload/kind/{kind}`: any kind by name
//!   (`sales-ledger`, `summary-sales`, `tank-reading`).

use actix_web::web::{post, scope};
use actix_web::Scope;

mod report;
mod upload;

const API_PATH: &str = "/api/file/upload";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", post().to(upload::summary_sales))
        .route("/sales-upload", post().to(upload::sales_ledger))
        .route("/tank-upload", post().to(upload::tank_reading))
        .route("/kind/{kind}", post().to(upload::by_kind))
}
