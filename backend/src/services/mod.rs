//! HTTP surface of the backend.
//!
//! Each submodule exposes a `configure_routes()` returning its actix `Scope`;
//! `main` mounts them all on one `App`.

pub mod dashboard;
pub mod records;
pub mod uploads;

use crate::error::StoreError;
use crate::store::{Store, StoredRecord};
use actix_web::HttpResponse;
use common::model::stored::Stored;
use common::responses::ErrorResponse;
use log::error;

/// Loads every stored record of one kind off the async executor.
pub(crate) async fn load_records<R>(store: &Store) -> Result<Vec<Stored<R>>, StoreError>
where
    R: StoredRecord + Send + 'static,
{
    let store = store.clone();
    tokio::task::spawn_blocking(move || store.load_all::<R>())
        .await
        .map_err(|e| StoreError::Task(e.to_string()))?
}

/// 500 with an `ErrorResponse` body; the cause is only logged.
pub(crate) fn internal_error(what: &str, err: impl std::fmt::Display) -> HttpResponse {
    error!("Failed to fetch {}: {}", what, err);
    HttpResponse::InternalServerError().json(ErrorResponse {
        error: format!("Failed to fetch {}", what),
    })
}
