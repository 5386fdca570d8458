use crate::services::{internal_error, load_records};
use crate::store::{Store, StoredRecord};
use actix_web::{web, HttpResponse, Responder};
use common::model::sales::SalesRecord;
use common::model::summary::DailySales;
use common::model::tank::TankReading;
use serde::Serialize;

pub async fn sales_ledger(store: web::Data<Store>) -> impl Responder {
    process::<SalesRecord>(&store, "sales data").await
}

pub async fn tank_readings(store: web::Data<Store>) -> impl Responder {
    process::<TankReading>(&store, "tank data").await
}

pub async fn summary_sales(store: web::Data<Store>) -> impl Responder {
    process::<DailySales>(&store, "summary data").await
}

async fn process<R>(store: &Store, what: &str) -> HttpResponse
where
    R: StoredRecord + Serialize + Send + 'static,
{
    match load_records::<R>(store).await {
        Ok(rows) => HttpResponse::Ok().json(rows),
        Err(e) => internal_error(what, e),
    }
}
