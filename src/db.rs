use crate::error::Result;
use crate::models::Coordinate;
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use tracing::{debug, info};

/// Whole-value store for the last saved coordinate.
pub trait CoordinateStore {
    fn save(&self, coordinate: Coordinate) -> Result<()>;
    fn load(&self) -> Result<Option<Coordinate>>;
}

/// SQLite-backed store. Every save appends a row; `load` reads the newest.
pub struct SqliteCoordinateStore {
    conn: Connection,
}

impl SqliteCoordinateStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::with_connection(Connection::open(path)?)
    }

    pub fn open_in_memory() -> Result<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS user_location (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                latitude REAL NOT NULL,
                longitude REAL NOT NULL,
                saved_at TEXT NOT NULL
            )",
            [],
        )?;
        Ok(Self { conn })
    }
}

impl CoordinateStore for SqliteCoordinateStore {
    fn save(&self, coordinate: Coordinate) -> Result<()> {
        self.conn.execute(
            "INSERT INTO user_location (latitude, longitude, saved_at) VALUES (?, ?, ?)",
            params![coordinate.latitude, coordinate.longitude, Utc::now().to_rfc3339()],
        )?;
        info!(
            "Saved location ({}, {})",
            coordinate.latitude, coordinate.longitude
        );
        Ok(())
    }

    fn load(&self) -> Result<Option<Coordinate>> {
        let coordinate = self
            .conn
            .query_row(
                "SELECT latitude, longitude FROM user_location ORDER BY id DESC LIMIT 1",
                [],
                |row| Ok(Coordinate::new(row.get(0)?, row.get(1)?)),
            )
            .optional()?;
        debug!("Loaded location {:?}", coordinate);
        Ok(coordinate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn empty_store_loads_nothing() {
        let store = SqliteCoordinateStore::open_in_memory().unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn load_returns_latest_save() {
        let store = SqliteCoordinateStore::open_in_memory().unwrap();
        store.save(Coordinate::new(14.586716, 121.062449)).unwrap();
        store.save(Coordinate::new(37.7749, -122.4194)).unwrap();

        assert_eq!(store.load().unwrap(), Some(Coordinate::new(37.7749, -122.4194)));
    }

    #[test]
    fn survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("places.db");

        SqliteCoordinateStore::open(&path)
            .unwrap()
            .save(Coordinate::new(-33.8688, 151.2093))
            .unwrap();
        let reopened = SqliteCoordinateStore::open(&path).unwrap();

        assert_eq!(reopened.load().unwrap(), Some(Coordinate::new(-33.8688, 151.2093)));
    }
}
