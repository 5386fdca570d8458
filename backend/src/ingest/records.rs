use crate::error::RowError;
use crate::ingest::coerce::{decimal, integer, parse_date};
use crate::ingest::profile::Profile;
use crate::ingest::table::RawRow;
use crate::store::StoredRecord;
use common::model::kind::UploadKind;
use common::model::sales::SalesRecord;
use common::model::summary::DailySales;
use common::model::tank::TankReading;

/// A record kind that can be built from a validated CSV row.
pub trait Normalize: StoredRecord {
    const KIND: UploadKind;

    fn normalize(row: &RawRow, profile: &Profile) -> Result<Self, RowError>;
}

fn date_of(row: &RawRow, profile: &Profile) -> Result<chrono::NaiveDate, RowError> {
    parse_date(row.get("date").unwrap_or_default(), profile.date_format)
}

impl Normalize for SalesRecord {
    const KIND: UploadKind = UploadKind::SalesLedger;

    fn normalize(row: &RawRow, profile: &Profile) -> Result<Self, RowError> {
        Ok(SalesRecord {
            transaction_number: row.text("transactionNumber"),
            date: date_of(row, profile)?,
            time: row.text("time"),
            article_number: row.text("articleNumber"),
            product_description: row.text("productDescription"),
            quantity: decimal(row.get("quantity")),
            unit_price: decimal(row.get("unitPrice")),
            gross_amount: decimal(row.get("grossAmount")),
            unit: row.text("unit"),
            vat_percent: decimal(row.get("vatPercent")),
            vat_identifier: row.text("vatIdentifier"),
            currency_code: row.text("currencyCode"),
            vat_amount: decimal(row.get("vatAmount")),
            payment_method_id: row.text("paymentMethodId"),
            payment_location: row.text("paymentLocation"),
            card_number: row.optional("cardNumber"),
            customer_number: row.optional("customerNumber"),
            person_card: row.optional("personCard"),
            driver_number: row.optional("driverNumber"),
            fuel_pump_number: row.optional("fuelPumpNumber"),
            station_number: row.optional("stationNumber"),
            cost_center: row.optional("costCenter"),
            cash_register_number: row.optional("cashRegisterNumber"),
            extra_field: row.optional("extraField"),
            terminal_id: row.optional("terminalId"),
            coupon_number: row.optional("couponNumber"),
        })
    }
}

impl Normalize for DailySales {
    const KIND: UploadKind = UploadKind::SummarySales;

    fn normalize(row: &RawRow, profile: &Profile) -> Result<Self, RowError> {
        Ok(DailySales {
            date: date_of(row, profile)?,
            total_sales: decimal(row.get("totalSales")),
            total_profit: decimal(row.get("totalProfit")),
            malfunctions: integer(row.get("malfunctions")),
            diesel: decimal(row.get("diesel")),
            ad_blue: decimal(row.get("adBlue")),
            super_e5: decimal(row.get("superE5")),
            super_e10: decimal(row.get("superE10")),
            cleaning: decimal(row.get("cleaning")),
        })
    }
}

impl Normalize for TankReading {
    const KIND: UploadKind = UploadKind::TankReading;

    fn normalize(row: &RawRow, profile: &Profile) -> Result<Self, RowError> {
        Ok(TankReading {
            tank_id: row.text("tankId"),
            tank_name: row.text("tankName"),
            fuel_type: row.text("fuelType"),
            max_capacity: decimal(row.get("maxCapacity")),
            current_level: decimal(row.get("currentLevel")),
            date: date_of(row, profile)?,
            time: row.text("time"),
            sales_amount: decimal(row.get("salesAmount")),
            refill_amount: decimal(row.get("refillAmount")),
        })
    }
}
