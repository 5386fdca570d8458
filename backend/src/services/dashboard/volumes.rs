use crate::analytics::volumes::volume_series;
use crate::services::{internal_error, load_records};
use crate::store::Store;
use actix_web::{web, HttpResponse, Responder};
use common::model::summary::DailySales;
use common::requests::VolumesQuery;

pub async fn process(store: web::Data<Store>, query: web::Query<VolumesQuery>) -> impl Responder {
    match load_records::<DailySales>(&store).await {
        Ok(rows) => {
            let days: Vec<DailySales> = rows.into_iter().map(|row| row.record).collect();
            HttpResponse::Ok().json(volume_series(&days, query.period))
        }
        Err(e) => internal_error("volume data", e),
    }
}
