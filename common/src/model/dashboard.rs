//! Response shapes for the dashboard endpoints.
//!
//! These are the server-side equivalents of the station charts: hourly
//! sales/profit/malfunction series for a ledger day, per-fuel volume series,
//! the monthly fuel mix, the day-over-day value comparison and the tank gauges.

use crate::model::sales::SalesRecord;
use crate::model::summary::DailySales;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Products tracked in the daily summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Fuel {
    Diesel,
    AdBlue,
    SuperE5,
    SuperE10,
    Cleaning,
}

impl Fuel {
    pub const ALL: [Fuel; 5] = [
        Fuel::Diesel,
        Fuel::AdBlue,
        Fuel::SuperE5,
        Fuel::SuperE10,
        Fuel::Cleaning,
    ];

    /// Human readable product name.
    pub fn label(&self) -> &'static str {
        match self {
            Fuel::Diesel => "Diesel",
            Fuel::AdBlue => "Ad Blue",
            Fuel::SuperE5 => "Super E5",
            Fuel::SuperE10 => "Super E10",
            Fuel::Cleaning => "Cleaning",
        }
    }
}

/// Bucket width of a volume series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Daily,
    #[default]
    Weekly,
    Monthly,
}

/// Litres per product.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelVolumes {
    pub diesel: f64,
    pub ad_blue: f64,
    pub super_e5: f64,
    pub super_e10: f64,
    pub cleaning: f64,
}

impl FuelVolumes {
    pub fn get(&self, fuel: Fuel) -> f64 {
        match fuel {
            Fuel::Diesel => self.diesel,
            Fuel::AdBlue => self.ad_blue,
            Fuel::SuperE5 => self.super_e5,
            Fuel::SuperE10 => self.super_e10,
            Fuel::Cleaning => self.cleaning,
        }
    }

    /// Applies `f` to every product volume.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> FuelVolumes {
        FuelVolumes {
            diesel: f(self.diesel),
            ad_blue: f(self.ad_blue),
            super_e5: f(self.super_e5),
            super_e10: f(self.super_e10),
            cleaning: f(self.cleaning),
        }
    }

    pub fn add(&mut self, other: &FuelVolumes) {
        self.diesel += other.diesel;
        self.ad_blue += other.ad_blue;
        self.super_e5 += other.super_e5;
        self.super_e10 += other.super_e10;
        self.cleaning += other.cleaning;
    }

    pub fn total(&self) -> f64 {
        Fuel::ALL.iter().map(|fuel| self.get(*fuel)).sum()
    }
}

impl From<&DailySales> for FuelVolumes {
    fn from(day: &DailySales) -> Self {
        FuelVolumes {
            diesel: day.diesel,
            ad_blue: day.ad_blue,
            super_e5: day.super_e5,
            super_e10: day.super_e10,
            cleaning: day.cleaning,
        }
    }
}

/// One hour of a ledger day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HourlyPoint {
    pub hour: u32,
    pub label: String,
    pub sales: f64,
    pub profit: f64,
    pub malfunctions: u32,
}

/// Totals of one ledger day compared against the previous day present in the data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesOverview {
    pub date: Option<NaiveDate>,
    pub previous_date: Option<NaiveDate>,
    pub total_sales: f64,
    pub previous_total_sales: f64,
    pub sales_change_percent: f64,
    pub total_profit: f64,
    pub previous_total_profit: f64,
    pub profit_change_percent: f64,
    pub malfunction_count: usize,
    pub previous_malfunction_count: usize,
    pub malfunction_change_percent: f64,
    pub malfunctions: Vec<SalesRecord>,
    pub hourly: Vec<HourlyPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumePoint {
    pub name: String,
    #[serde(flatten)]
    pub volumes: FuelVolumes,
}

/// Whole-number percentage change of one product between the two latest days.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelTrend {
    pub fuel: Fuel,
    pub name: String,
    pub percentage: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeSeries {
    pub period: Period,
    pub points: Vec<VolumePoint>,
    pub trends: Vec<FuelTrend>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelShare {
    pub fuel: Fuel,
    pub name: String,
    pub value: f64,
    pub percentage: f64,
}

/// Product split of one calendar month (`YYYY-MM`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FuelMix {
    pub month: Option<String>,
    pub available_months: Vec<String>,
    pub shares: Vec<FuelShare>,
}

/// Latest summary day against the one before it, valued at the configured prices.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValueComparison {
    pub today_total_value: f64,
    pub yesterday_total_value: f64,
    pub difference: f64,
    pub percentage_change: f64,
    pub is_increase: bool,
    pub today_total_profit: f64,
    pub yesterday_total_profit: f64,
    pub profit_difference: f64,
    pub profit_percentage_change: f64,
    pub is_profit_increase: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TankGauge {
    pub tank_id: String,
    pub tank_name: String,
    pub fuel_type: String,
    pub current_level: f64,
    pub max_capacity: f64,
    pub fill_percent: f64,
    pub updated_at: DateTime<Utc>,
}
