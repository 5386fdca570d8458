//! Response reporting: maps pipeline results to HTTP status and JSON body.
//!
//! | result                         | status | body                                   |
//! |--------------------------------|--------|----------------------------------------|
//! | every record stored            | 200    | `success`, `message`, `skipped`?       |
//! | some fallback inserts failed   | 207    | `error`, `details`, `skipped`?         |
//! | bad upload (`is_bad_input`)    | 400    | `error`, `details` for invalid rows    |
//! | store or task failure          | 500    | generic `error`, cause logged only     |

use crate::error::UploadError;
use crate::ingest::profile::profile;
use crate::ingest::Outcome;
use actix_web::http::StatusCode;
use actix_web::HttpResponse;
use common::model::kind::UploadKind;
use common::responses::UploadResponse;
use log::{error, warn};

const PARTIAL_ERROR: &str = "Some records failed to insert";
const INTERNAL_ERROR: &str = "Failed to upload CSV file";

pub fn outcome(kind: UploadKind, upload_id: &str, result: Outcome) -> HttpResponse {
    match result {
        Outcome::Stored { skipped, .. } => {
            HttpResponse::Ok().json(UploadResponse::success(profile(kind).success_message, skipped))
        }
        Outcome::Partial {
            inserted,
            failed,
            skipped,
        } => {
            warn!(
                "[{}] {} of {} records could not be inserted",
                upload_id,
                failed.len(),
                inserted + failed.len()
            );
            let mut body = UploadResponse::failure(PARTIAL_ERROR, Some(failed));
            body.skipped = (!skipped.is_empty()).then_some(skipped);
            HttpResponse::build(StatusCode::MULTI_STATUS).json(body)
        }
    }
}

pub fn failure(upload_id: &str, err: UploadError) -> HttpResponse {
    if !err.is_bad_input() {
        error!("[{}] CSV upload failed: {}", upload_id, err);
        return HttpResponse::InternalServerError()
            .json(UploadResponse::failure(INTERNAL_ERROR, None));
    }

    warn!("[{}] CSV upload rejected: {}", upload_id, err);
    let message = err.to_string();
    let details = match err {
        UploadError::NoValidData(rows) => Some(rows),
        _ => None,
    };
    HttpResponse::BadRequest().json(UploadResponse::failure(message, details))
}

pub fn unknown_kind(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(UploadResponse::failure(message, None))
}
