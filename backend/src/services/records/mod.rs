//! Read-back of stored records, newest first.
//!
//! - `GET /api/file/read`: sales ledger rows.
//! - `GET /api/file/read/tank-data`: tank readings.
//! - `GET /api/file/read/summary`: daily summaries.
//!
//! Every row carries its `id`, `uploadId`, `createdAt` and `updatedAt` next to
//! the record fields.

use actix_web::web::{get, scope};
use actix_web::Scope;

mod read;

const API_PATH: &str = "/api/file/read";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(read::sales_ledger))
        .route("/tank-data", get().to(read::tank_readings))
        .route("/summary", get().to(read::summary_sales))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Gateway, InsertMode, Store};
    use actix_web::{test, web, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn tank_data_is_newest_first() {
        let store = Store::open_in_memory().unwrap();
        let readings = [
            crate::store::tests::tank("T1", 1, "08:00"),
            crate::store::tests::tank("T1", 2, "08:00"),
        ];
        store
            .insert_many(&readings, InsertMode::Strict, "u1")
            .unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .service(configure_routes()),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/file/read/tank-data")
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        let rows = body.as_array().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["date"], "2024-03-02");
        assert_eq!(rows[0]["tankId"], "T1");
        assert_eq!(rows[0]["uploadId"], "u1");
        assert!(rows[0]["id"].is_i64());
        assert!(rows[0]["createdAt"].is_string());
    }

    #[actix_web::test]
    async fn empty_tables_read_as_empty_lists() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Store::open_in_memory().unwrap()))
                .service(configure_routes()),
        )
        .await;

        for uri in ["/api/file/read", "/api/file/read/summary"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(body, serde_json::json!([]), "{uri}");
        }
    }
}
