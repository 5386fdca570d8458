use crate::analytics::ledger::sales_overview;
use crate::services::{internal_error, load_records};
use crate::store::Store;
use actix_web::{web, HttpResponse, Responder};
use common::model::sales::SalesRecord;
use common::requests::SalesOverviewQuery;

pub async fn process(
    store: web::Data<Store>,
    query: web::Query<SalesOverviewQuery>,
) -> impl Responder {
    match load_records::<SalesRecord>(&store).await {
        Ok(rows) => {
            let records: Vec<SalesRecord> = rows.into_iter().map(|row| row.record).collect();
            HttpResponse::Ok().json(sales_overview(&records, query.date))
        }
        Err(e) => internal_error("sales overview", e),
    }
}
