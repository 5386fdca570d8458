use super::{insert_sql, select_sql, stored, InsertMode, StoredRecord};
use chrono::{DateTime, Utc};
use common::model::stored::Stored;
use common::model::tank::TankReading;
use rusqlite::{params, Connection};

const TABLE_NAME: &str = "tank_readings";
const COLUMNS: &str = "tank_id, tank_name, fuel_type, max_capacity, current_level, date, time, \
    sales_amount, refill_amount";

impl StoredRecord for TankReading {
    const TABLE: &'static str = TABLE_NAME;

    fn natural_id(&self) -> String {
        self.tank_id.clone()
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
            self.tank_id,
            self.tank_name,
            self.fuel_type,
            self.max_capacity,
            self.current_level,
            self.date,
            self.time,
            self.sales_amount,
            self.refill_amount,
        ])
    }

    fn load_all(conn: &Connection) -> rusqlite::Result<Vec<Stored<Self>>> {
        let mut stmt = conn.prepare(&select_sql(TABLE_NAME, COLUMNS, "date DESC, time DESC, id"))?;
        let rows = stmt.query_map([], |row| {
            let record = TankReading {
                tank_id: row.get("tank_id")?,
                tank_name: row.get("tank_name")?,
                fuel_type: row.get("fuel_type")?,
                max_capacity: row.get("max_capacity")?,
                current_level: row.get("current_level")?,
                date: row.get("date")?,
                time: row.get("time")?,
                sales_amount: row.get("sales_amount")?,
                refill_amount: row.get("refill_amount")?,
            };
            stored(row, record)
        })?;
        rows.collect()
    }
}
