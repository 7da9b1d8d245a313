//! SQLite connection handle and table DDL.

use crate::error::AppError;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

/// Association table. `city_id` keeps TEXT affinity; the reference to
/// `cities(id)` is advisory since foreign keys are never switched on.
pub const USERS_CITIES_DDL: &str = "CREATE TABLE IF NOT EXISTS users_cities (
    user_id INTEGER,
    city_id TEXT,
    FOREIGN KEY(city_id) REFERENCES cities(id)
)";

/// Coordinate table. Normally provided by whoever ships the database;
/// only the import path creates it.
pub const CITIES_DDL: &str = "CREATE TABLE IF NOT EXISTS cities (
    id INTEGER PRIMARY KEY,
    city TEXT NOT NULL,
    lat REAL NOT NULL,
    lng REAL NOT NULL
)";

/// Location of the database file. Holds no open connection.
#[derive(Debug, Clone)]
pub struct CityDb {
    path: PathBuf,
}

impl CityDb {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a fresh connection for one operation. The connection closes when
    /// the returned value is dropped.
    pub fn connect(&self) -> Result<Connection, AppError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)
                    .map_err(|e| AppError::Db(format!("create {:?}: {}", parent, e)))?;
            }
        }
        log::debug!("Opening SQLite connection: {:?}", self.path);
        Connection::open(&self.path).map_err(|e| AppError::Db(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connect_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let db = CityDb::new(dir.path().join("nested/deeper/cities.db"));
        let conn = db.connect().unwrap();
        conn.execute(CITIES_DDL, []).unwrap();
        drop(conn);
        assert!(db.path().exists());
    }

    #[test]
    fn ddl_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let db = CityDb::new(dir.path().join("cities.db"));
        let conn = db.connect().unwrap();
        for _ in 0..2 {
            conn.execute(CITIES_DDL, []).unwrap();
            conn.execute(USERS_CITIES_DDL, []).unwrap();
        }
    }
}
