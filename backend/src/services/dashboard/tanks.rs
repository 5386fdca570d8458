use crate::analytics::tanks::tank_gauges;
use crate::services::{internal_error, load_records};
use crate::store::Store;
use actix_web::{web, HttpResponse, Responder};
use common::model::tank::TankReading;

pub async fn process(store: web::Data<Store>) -> impl Responder {
    let readings = match load_records::<TankReading>(&store).await {
        Ok(readings) => readings,
        Err(e) => return internal_error("tank data", e),
    };
    match tank_gauges(&readings) {
        Ok(gauges) => HttpResponse::Ok().json(gauges),
        Err(e) => internal_error("tank data", e),
    }
}
