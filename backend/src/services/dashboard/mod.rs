//! Dashboard endpoints. Each one loads the stored records it needs and hands
//! them to `analytics`; nothing is cached between requests.
//!
//! - `GET /api/dashboard/sales-overview?date=YYYY-MM-DD`: ledger totals, profit,
//!   malfunctions and hourly chart for one day against the previous one.
//! - `GET /api/dashboard/volumes?period=daily|weekly|monthly`: volume chart
//!   points and per-fuel trends from the daily summaries.
//! - `GET /api/dashboard/fuel-mix?month=YYYY-MM`: share of each fuel in a month.
//! - `GET /api/dashboard/comparison`: value and profit of the latest summary day
//!   against the day before, at the configured prices.
//! - `GET /api/dashboard/tanks`: latest reading of every tank.

use actix_web::web::{get, scope};
use actix_web::Scope;

mod comparison;
mod fuel_mix;
mod sales_overview;
mod tanks;
mod volumes;

const API_PATH: &str = "/api/dashboard";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("/sales-overview", get().to(sales_overview::process))
        .route("/volumes", get().to(volumes::process))
        .route("/fuel-mix", get().to(fuel_mix::process))
        .route("/comparison", get().to(comparison::process))
        .route("/tanks", get().to(tanks::process))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::store::{Gateway, InsertMode, Store};
    use actix_web::{test, web, App};
    use chrono::NaiveDate;
    use common::model::summary::DailySales;
    use serde_json::Value;

    fn day(d: u32, diesel: f64) -> DailySales {
        DailySales {
            date: NaiveDate::from_ymd_opt(2024, 3, d).unwrap(),
            total_sales: 0.0,
            total_profit: 0.0,
            malfunctions: 0,
            diesel,
            ad_blue: 0.0,
            super_e5: 0.0,
            super_e10: 0.0,
            cleaning: 0.0,
        }
    }

    async fn get_json(store: Store, uri: &str) -> (u16, Value) {
        let settings = Settings {
            fuel_prices: common::model::prices::FuelPrices {
                diesel: 2.0,
                ..Default::default()
            },
            ..Settings::default()
        };
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(store))
                .app_data(web::Data::new(settings))
                .service(configure_routes()),
        )
        .await;
        let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
        let status = resp.status().as_u16();
        let body = test::read_body(resp).await;
        (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
    }

    fn store_with_days() -> Store {
        let store = Store::open_in_memory().unwrap();
        store
            .insert_many(
                &[day(1, 100.0), day(2, 150.0)],
                InsertMode::SkipDuplicates,
                "u1",
            )
            .unwrap();
        store
    }

    #[actix_web::test]
    async fn comparison_uses_configured_prices() {
        let (status, body) = get_json(store_with_days(), "/api/dashboard/comparison").await;

        assert_eq!(status, 200);
        assert_eq!(body["todayTotalValue"], 300.0);
        assert_eq!(body["yesterdayTotalValue"], 200.0);
        assert_eq!(body["percentageChange"], 50.0);
        assert_eq!(body["isIncrease"], true);
    }

    #[actix_web::test]
    async fn volumes_default_to_weekly() {
        let (status, body) = get_json(store_with_days(), "/api/dashboard/volumes").await;

        assert_eq!(status, 200);
        assert_eq!(body["period"], "weekly");
        assert_eq!(body["points"].as_array().unwrap().len(), 2);
        assert_eq!(body["points"][1]["diesel"], 150.0);
        assert_eq!(body["trends"][0]["percentage"], 50);
    }

    #[actix_web::test]
    async fn unknown_period_is_a_bad_request() {
        let (status, _) = get_json(store_with_days(), "/api/dashboard/volumes?period=hourly").await;
        assert_eq!(status, 400);
    }

    #[actix_web::test]
    async fn fuel_mix_for_latest_month() {
        let (status, body) = get_json(store_with_days(), "/api/dashboard/fuel-mix").await;

        assert_eq!(status, 200);
        assert_eq!(body["month"], "2024-03");
        assert_eq!(body["shares"][0]["name"], "Diesel");
        assert_eq!(body["shares"][0]["percentage"], 100.0);
    }

    #[actix_web::test]
    async fn sales_overview_of_empty_ledger() {
        let (status, body) =
            get_json(Store::open_in_memory().unwrap(), "/api/dashboard/sales-overview").await;

        assert_eq!(status, 200);
        assert_eq!(body["date"], Value::Null);
        assert_eq!(body["totalSales"], 0.0);
        assert_eq!(body["hourly"].as_array().unwrap().len(), 24);
    }

    #[actix_web::test]
    async fn tanks_show_latest_levels() {
        let store = Store::open_in_memory().unwrap();
        store
            .insert_one(
                &crate::store::tests::tank("T1", 1, "08:00"),
                InsertMode::Strict,
                "u1",
            )
            .unwrap();

        let (status, body) = get_json(store, "/api/dashboard/tanks").await;

        assert_eq!(status, 200);
        assert_eq!(body[0]["tankId"], "T1");
        assert_eq!(body[0]["currentLevel"], 8000.5);
        assert!(body[0]["fillPercent"].as_f64().unwrap() > 80.0);
    }
}
