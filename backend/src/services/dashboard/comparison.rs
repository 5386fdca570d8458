use crate::analytics::comparison::value_comparison;
use crate::config::Settings;
use crate::services::{internal_error, load_records};
use crate::store::Store;
use actix_web::{web, HttpResponse, Responder};
use common::model::summary::DailySales;

pub async fn process(store: web::Data<Store>, settings: web::Data<Settings>) -> impl Responder {
    match load_records::<DailySales>(&store).await {
        Ok(rows) => {
            let days: Vec<DailySales> = rows.into_iter().map(|row| row.record).collect();
            HttpResponse::Ok().json(value_comparison(&days, &settings.fuel_prices))
        }
        Err(e) => internal_error("comparison data", e),
    }
}
