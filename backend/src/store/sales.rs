use super::{insert_sql, select_sql, stored, InsertMode, StoredRecord};
use chrono::{DateTime, Utc};
use common::model::sales::SalesRecord;
use common::model::stored::Stored;
use rusqlite::{params, Connection};

const TABLE_NAME: &str = "sales_ledger";
const COLUMNS: &str = "transaction_number, date, time, article_number, product_description, \
    quantity, unit_price, gross_amount, unit, vat_percent, vat_identifier, currency_code, \
    vat_amount, payment_method_id, payment_location, card_number, customer_number, person_card, \
    driver_number, fuel_pump_number, station_number, cost_center, cash_register_number, \
    extra_field, terminal_id, coupon_number";

impl StoredRecord for SalesRecord {
    const TABLE: &'static str = TABLE_NAME;

    fn natural_id(&self) -> String {
        self.transaction_number.clone()
    }

    fn insert(
        &self,
        conn: &Connection,
        mode: InsertMode,
        upload_id: &str,
        now: DateTime<Utc>,
    ) -> rusqlite::Result<usize> {
        let mut stmt = conn.prepare_cached(&insert_sql(mode, TABLE_NAME, COLUMNS))?;
        stmt.execute(params![
            upload_id,
            now,
            now,
            self.transaction_number,
            self.date,
            self.time,
            self.article_number,
            self.product_description,
            self.quantity,
            self.unit_price,
            self.gross_amount,
            self.unit,
            self.vat_percent,
            self.vat_identifier,
            self.currency_code,
            self.vat_amount,
            self.payment_method_id,
            self.payment_location,
            self.card_number,
            self.customer_number,
            self.person_card,
            self.driver_number,
            self.fuel_pump_number,
            self.station_number,
            self.cost_center,
            self.cash_register_number,
            self.extra_field,
            self.terminal_id,
            self.coupon_number,
        ])
    }

    fn load_all(conn: &Connection) -> rusqlite::Result<Vec<Stored<Self>>> {
        let mut stmt = conn.prepare(&select_sql(TABLE_NAME, COLUMNS, "date DESC, time DESC, id"))?;
        let rows = stmt.query_map([], |row| {
            let record = SalesRecord {
                transaction_number: row.get("transaction_number")?,
                date: row.get("date")?,
                time: row.get("time")?,
                article_number: row.get("article_number")?,
                product_description: row.get("product_description")?,
                quantity: row.get("quantity")?,
                unit_price: row.get("unit_price")?,
                gross_amount: row.get("gross_amount")?,
                unit: row.get("unit")?,
                vat_percent: row.get("vat_percent")?,
                vat_identifier: row.get("vat_identifier")?,
                currency_code: row.get("currency_code")?,
                vat_amount: row.get("vat_amount")?,
                payment_method_id: row.get("payment_method_id")?,
                payment_location: row.get("payment_location")?,
                card_number: row.get("card_number")?,
                customer_number: row.get("customer_number")?,
                person_card: row.get("person_card")?,
                driver_number: row.get("driver_number")?,
                fuel_pump_number: row.get("fuel_pump_number")?,
                station_number: row.get("station_number")?,
                cost_center: row.get("cost_center")?,
                cash_register_number: row.get("cash_register_number")?,
                extra_field: row.get("extra_field")?,
                terminal_id: row.get("terminal_id")?,
                coupon_number: row.get("coupon_number")?,
            };
            stored(row, record)
        })?;
        rows.collect()
    }
}
