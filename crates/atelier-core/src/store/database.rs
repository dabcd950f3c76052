//! SQLite-backed key-value slots.
//!
//! The wizard persists its whole order as one JSON document under a string
//! key, the same shape a browser's local storage offers. SQLite gives the slot
//! atomic replacement and survives process restarts.

use std::path::Path;

use jiff::Timestamp;
use rusqlite::{params, types::Type, Connection, OptionalExtension};

use crate::error::{DatabaseResultExt, Result};

const SELECT_SLOT_SQL: &str = "SELECT key, value, updated_at FROM slots WHERE key = ?1";
const UPSERT_SLOT_SQL: &str = "INSERT INTO slots (key, value, updated_at) VALUES (?1, ?2, ?3) \
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";

/// A stored slot value with its write time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub key: String,
    pub value: String,
    pub updated_at: Timestamp,
}

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (or creates) the database file and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Opens a private in-memory database.
    pub fn open_in_memory() -> Result<Self> {
        let connection =
            Connection::open_in_memory().db_context("Failed to open in-memory database")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    fn initialize_schema(&self) -> Result<()> {
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")
    }

    /// Helper function to construct a Slot from a database row
    fn build_slot_from_row(row: &rusqlite::Row) -> rusqlite::Result<Slot> {
        Ok(Slot {
            key: row.get(0)?,
            value: row.get(1)?,
            updated_at: row.get::<_, String>(2)?.parse::<Timestamp>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(2, Type::Text, Box::new(e))
            })?,
        })
    }

    /// Reads a slot, returning `None` when the key has never been written.
    pub fn get_slot(&self, key: &str) -> Result<Option<Slot>> {
        self.connection
            .query_row(SELECT_SLOT_SQL, params![key], Self::build_slot_from_row)
            .optional()
            .db_context("Failed to read slot")
    }

    /// Writes a slot, replacing any previous value.
    pub fn put_slot(&self, key: &str, value: &str) -> Result<Timestamp> {
        let now = Timestamp::now();
        self.connection
            .execute(UPSERT_SLOT_SQL, params![key, value, now.to_string()])
            .db_context("Failed to write slot")?;
        Ok(now)
    }
}
