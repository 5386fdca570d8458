use serde::{Deserialize, Serialize};

/// Price per litre (or unit) for every product tracked in the daily summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FuelPrices {
    pub diesel: f64,
    pub ad_blue: f64,
    pub super_e5: f64,
    pub super_e10: f64,
    pub cleaning: f64,
}

impl Default for FuelPrices {
    fn default() -> Self {
        FuelPrices {
            diesel: 0.0,
            ad_blue: 50.0,
            super_e5: 0.0,
            super_e10: 0.0,
            cleaning: 35.0,
        }
    }
}
