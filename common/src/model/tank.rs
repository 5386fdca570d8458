use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TankReading {
    pub tank_id: String,
    pub tank_name: String,
    pub fuel_type: String,
    pub max_capacity: f64,
    pub current_level: f64,
    pub date: NaiveDate,
    pub time: String,
    pub sales_amount: f64,
    pub refill_amount: f64,
}
