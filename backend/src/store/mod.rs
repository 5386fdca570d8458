//! Persistence gateway backed by SQLite.
//!
//! The ingestion pipeline only needs two calls from storage: insert a whole
//! batch, or insert one record. Both are expressed by the `Gateway` trait so the
//! batch processor can be driven by any backend; `Store` is the SQLite one used
//! by the service. A single `Store` is opened in `main.rs` and shared through
//! `web::Data`; clones share the same connection.

mod sales;
pub mod schema;
mod summary;
mod tanks;

use crate::error::StoreError;
use chrono::{DateTime, Utc};
use common::model::stored::Stored;
use log::debug;
use rusqlite::{Connection, Row};
use std::sync::{Arc, Mutex, MutexGuard};

/// How an insert treats rows that collide with a uniqueness constraint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertMode {
    /// A duplicate is an error.
    Strict,
    /// A duplicate is silently left out.
    SkipDuplicates,
}

impl InsertMode {
    fn verb(&self) -> &'static str {
        match self {
            InsertMode::Strict => "INSERT",
            InsertMode::SkipDuplicates => "INSERT OR IGNORE",
        }
    }
}

/// A normalized record kind that owns a table.
pub trait StoredRecord: Sized {
    const TABLE: &'static str;

    /// Identifier used in operator logs and per-row error messages.
    fn natural_id(&self) -> String;

    /// Inserts the record, returning the number of rows written (0 for a skipped duplicate).
    fn insert(
        &self,
        conn: &Connection,
        mode: InsertMode,
        upload_id: &str,
        now: DateTime<Utc>,
    ) -> rusqlite::Result<usize>;

    /// Every stored record of this kind, newest date first.
    fn load_all(conn: &Connection) -> rusqlite::Result<Vec<Stored<Self>>>;
}

/// The two write operations the batch processor relies on.
pub trait Gateway {
    /// Inserts all records or none of them.
    fn insert_many<R: StoredRecord>(
        &self,
        records: &[R],
        mode: InsertMode,
        upload_id: &str,
    ) -> Result<usize, StoreError>;

    fn insert_one<R: StoredRecord>(
        &self,
        record: &R,
        mode: InsertMode,
        upload_id: &str,
    ) -> Result<usize, StoreError>;
}

#[derive(Clone)]
pub struct Store {
    conn: Arc<Mutex<Connection>>,
}

impl Store {
    /// Opens (or creates) the database file and makes sure the tables exist.
    pub fn open(path: &str) -> Result<Self, StoreError> {
        Self::init(Connection::open(path)?)
    }

    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self, StoreError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, StoreError> {
        conn.execute_batch(schema::SCHEMA)?;
        Ok(Store {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }

    pub fn load_all<R: StoredRecord>(&self) -> Result<Vec<Stored<R>>, StoreError> {
        let conn = self.lock()?;
        Ok(R::load_all(&conn)?)
    }
}

impl Gateway for Store {
    fn insert_many<R: StoredRecord>(
        &self,
        records: &[R],
        mode: InsertMode,
        upload_id: &str,
    ) -> Result<usize, StoreError> {
        let mut conn = self.lock()?;
        let now = Utc::now();
        let bulk_error = |source: rusqlite::Error| StoreError::BulkInsert {
            count: records.len(),
            source,
        };

        // Dropping the transaction without commit rolls every row back.
        let tx = conn.transaction().map_err(bulk_error)?;
        let mut written = 0;
        for record in records {
            written += record
                .insert(&tx, mode, upload_id, now)
                .map_err(bulk_error)?;
        }
        tx.commit().map_err(bulk_error)?;

        debug!(
            "[{}] {} of {} records written to {}",
            upload_id,
            written,
            records.len(),
            R::TABLE
        );
        Ok(written)
    }

    fn insert_one<R: StoredRecord>(
        &self,
        record: &R,
        mode: InsertMode,
        upload_id: &str,
    ) -> Result<usize, StoreError> {
        let conn = self.lock()?;
        record
            .insert(&conn, mode, upload_id, Utc::now())
            .map_err(|source| StoreError::SingleInsert {
                id: record.natural_id(),
                source,
            })
    }
}

/// `?1, ?2, ..., ?n`
fn placeholders(n: usize) -> String {
    (1..=n)
        .map(|i| format!("?{}", i))
        .collect::<Vec<_>>()
        .join(", ")
}

fn insert_sql(mode: InsertMode, table: &str, columns: &str) -> String {
    let count = columns.split(',').count() + 3;
    format!(
        "{} INTO {} (upload_id, created_at, updated_at, {}) VALUES ({})",
        mode.verb(),
        table,
        columns,
        placeholders(count)
    )
}

fn select_sql(table: &str, columns: &str, order: &str) -> String {
    format!(
        "SELECT id, upload_id, created_at, updated_at, {} FROM {} ORDER BY {}",
        columns, table, order
    )
}

fn stored<R>(row: &Row<'_>, record: R) -> rusqlite::Result<Stored<R>> {
    Ok(Stored {
        id: row.get("id")?,
        upload_id: row.get("upload_id")?,
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
        record,
    })
}
