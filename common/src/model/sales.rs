use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One line of the cash register export, normalized.
///
/// Numeric fields are already coerced (unparsable cells became `0.0`) and the
/// date is a calendar day. The trailing identifiers are only present when the
/// export carried a value for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRecord {
    pub transaction_number: String,
    pub date: NaiveDate,
    pub time: String,
    pub article_number: String,
    pub product_description: String,
    pub quantity: f64,
    pub unit_price: f64,
    pub gross_amount: f64,
    pub unit: String,
    pub vat_percent: f64,
    pub vat_identifier: String,
    pub currency_code: String,
    pub vat_amount: f64,
    pub payment_method_id: String,
    pub payment_location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub person_card: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub driver_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_pump_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub station_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_center: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cash_register_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terminal_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon_number: Option<String>,
}
