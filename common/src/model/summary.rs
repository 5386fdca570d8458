use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily totals for the whole station with litres sold per fuel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailySales {
    pub date: NaiveDate,
    pub total_sales: f64,
    pub total_profit: f64,
    pub malfunctions: i64,
    pub diesel: f64,
    pub ad_blue: f64,
    pub super_e5: f64,
    pub super_e10: f64,
    pub cleaning: f64,
}
