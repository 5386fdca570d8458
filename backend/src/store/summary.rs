use super::{insert_sql, select_sql, stored, InsertMode, StoredRecord};
use chrono::{DateTime, Utc};
use common::model::stored::Stored;
use common::model::summary::DailySales;
use rusqlite::{params, Connection};

const TABLE_NAME: &str = "daily_sales";
const COLUMNS: &str = "date, total_sales, total_profit, malfunctions, diesel, ad_blue, \
    super_e5, super_e10, cleaning";

impl StoredRecord for DailySales {
    const TABLE: &'static str = TABLE_NAME;

    fn natural_id(&self) -> String {
        self.date.to_string()
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
            self.date,
            self.total_sales,
            self.total_profit,
            self.malfunctions,
            self.diesel,
            self.ad_blue,
            self.super_e5,
            self.super_e10,
            self.cleaning,
        ])
    }

    fn load_all(conn: &Connection) -> rusqlite::Result<Vec<Stored<Self>>> {
        let mut stmt = conn.prepare(&select_sql(TABLE_NAME, COLUMNS, "date DESC"))?;
        let rows = stmt.query_map([], |row| {
            let record = DailySales {
                date: row.get("date")?,
                total_sales: row.get("total_sales")?,
                total_profit: row.get("total_profit")?,
                malfunctions: row.get("malfunctions")?,
                diesel: row.get("diesel")?,
                ad_blue: row.get("ad_blue")?,
                super_e5: row.get("super_e5")?,
                super_e10: row.get("super_e10")?,
                cleaning: row.get("cleaning")?,
            };
            stored(row, record)
        })?;
        rows.collect()
    }
}
