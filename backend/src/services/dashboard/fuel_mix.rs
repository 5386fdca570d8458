use crate::analytics::volumes::fuel_mix;
use crate::services::{internal_error, load_records};
use crate::store::Store;
use actix_web::{web, HttpResponse, Responder};
use common::model::summary::DailySales;
use common::requests::FuelMixQuery;

pub async fn process(store: web::Data<Store>, query: web::Query<FuelMixQuery>) -> impl Responder {
    match load_records::<DailySales>(&store).await {
        Ok(rows) => {
            let days: Vec<DailySales> = rows.into_iter().map(|row| row.record).collect();
            HttpResponse::Ok().json(fuel_mix(&days, query.month.as_deref()))
        }
        Err(e) => internal_error("fuel mix", e),
    }
}
