// SQLite slot storage
// Slots live in a single key/value table

use std::path::Path;

use anyhow::{Context, Result};
use chrono::Local;
use rusqlite::{params, Connection, OptionalExtension};

use super::SlotStorage;

pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Open (or create) the database file and make sure the slots table exists.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open database at {}", path.display()))?;
        Self::from_connection(conn)
    }

    /// In-memory database, mainly for tests.
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("Failed to open in-memory database")?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        let storage = Self { conn };
        storage.initialize_schema()?;
        Ok(storage)
    }

    /// Creates the slots table if it doesn't exist
    fn initialize_schema(&self) -> Result<()> {
        self.conn
            .execute(
                "CREATE TABLE IF NOT EXISTS slots (
                    name TEXT PRIMARY KEY,
                    data TEXT NOT NULL,
                    updated_at TEXT NOT NULL
                )",
                [],
            )
            .context("Failed to create slots table")?;
        Ok(())
    }

    /// Get a reference to the database connection
    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl SlotStorage for SqliteStorage {
    fn read(&self, slot: &str) -> Result<Option<String>> {
        self.conn
            .query_row("SELECT data FROM slots WHERE name = ?1", [slot], |row| {
                row.get(0)
            })
            .optional()
            .with_context(|| format!("Failed to read slot '{}'", slot))
    }

    fn write(&mut self, slot: &str, data: &str) -> Result<()> {
        self.conn
            .execute(
                "INSERT INTO slots (name, data, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(name) DO UPDATE SET
                    data = excluded.data,
                    updated_at = excluded.updated_at",
                params![slot, data, Local::now().to_rfc3339()],
            )
            .with_context(|| format!("Failed to write slot '{}'", slot))?;
        Ok(())
    }
}
