use crate::model::dashboard::Period;
use chrono::NaiveDate;
use serde::Deserialize;

/// Query of `GET /api/dashboard/sales-overview`.
/// Without a date the latest ledger day is used.
#[derive(Debug, Default, Deserialize)]
pub struct SalesOverviewQuery {
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Default, Deserialize)]
pub struct VolumesQuery {
    #[serde(default)]
    pub period: Period,
}

/// Query of `GET /api/dashboard/fuel-mix`; `month` is `YYYY-MM`.
#[derive(Debug, Default, Deserialize)]
pub struct FuelMixQuery {
    pub month: Option<String>,
}
