//! Export / Import use cases: both stores to and from JSON.

use crate::domain::{CityId, Coordinates};
use crate::error::AppError;
use crate::infra::db::{CITIES_DDL, USERS_CITIES_DDL};
use crate::infra::CityDb;
use chrono::Utc;
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};

const SCHEMA_VERSION: i32 = 1;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRoot {
    pub schema_version: i32,
    pub exported_at: String,
    pub cities: Vec<ExportCity>,
    pub associations: Vec<ExportAssociation>,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportCity {
    pub id: CityId,
    pub city: String,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportAssociation {
    pub user_id: i64,
    pub city_id: CityId,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    pub cities: usize,
    pub associations: usize,
    pub skipped_duplicates: usize,
}

/// Insert or replace a single row in `cities`, creating the table if needed.
pub fn upsert_city(
    db: &CityDb,
    id: CityId,
    name: &str,
    coords: Coordinates,
) -> Result<(), AppError> {
    let conn = db.connect()?;
    conn.execute(CITIES_DDL, [])
        .map_err(|e| AppError::Db(e.to_string()))?;
    conn.execute(
        "INSERT OR REPLACE INTO cities (id, city, lat, lng) VALUES (?1, ?2, ?3, ?4)",
        params![id, name, coords.lat, coords.lng],
    )
    .map_err(|e| AppError::Db(e.to_string()))?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> Result<bool, AppError> {
    let count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
            [name],
            |r| r.get(0),
        )
        .map_err(|e| AppError::Db(e.to_string()))?;
    Ok(count > 0)
}

fn read_cities(conn: &Connection) -> Result<Vec<ExportCity>, AppError> {
    if !table_exists(conn, "cities")? {
        return Ok(Vec::new());
    }
    let mut stmt = conn
        .prepare("SELECT id, city, lat, lng FROM cities ORDER BY id")
        .map_err(|e| AppError::Db(e.to_string()))?;
    let rows = stmt.query_map([], |r| {
        Ok(ExportCity {
            id: r.get(0)?,
            city: r.get(1)?,
            lat: r.get(2)?,
            lng: r.get(3)?,
        })
    })?;
    let mut cities = Vec::new();
    for r in rows {
        cities.push(r.map_err(|e| AppError::Db(e.to_string()))?);
    }
    Ok(cities)
}

fn read_associations(conn: &Connection) -> Result<Vec<ExportAssociation>, AppError> {
    if !table_exists(conn, "users_cities")? {
        return Ok(Vec::new());
    }
    // city_id is stored with TEXT affinity
    let mut stmt = conn
        .prepare("SELECT user_id, CAST(city_id AS INTEGER) FROM users_cities ORDER BY rowid")
        .map_err(|e| AppError::Db(e.to_string()))?;
    let rows = stmt.query_map([], |r| {
        Ok(ExportAssociation {
            user_id: r.get(0)?,
            city_id: r.get(1)?,
        })
    })?;
    let mut associations = Vec::new();
    for r in rows {
        associations.push(r.map_err(|e| AppError::Db(e.to_string()))?);
    }
    Ok(associations)
}

/// Export all cities and associations as a JSON string.
///
/// Read-only: a table that does not exist exports as an empty list.
pub fn export_json_string(db: &CityDb) -> Result<String, AppError> {
    let conn = db.connect()?;
    let cities = read_cities(&conn)?;
    let associations = read_associations(&conn)?;

    let export_root = ExportRoot {
        schema_version: SCHEMA_VERSION,
        exported_at: Utc::now().to_rfc3339(),
        cities,
        associations,
    };

    serde_json::to_string_pretty(&export_root)
        .map_err(|e| AppError::Db(format!("JSON serialization failed: {}", e)))
}

/// Import from JSON. Cities with an existing id are skipped; associations
/// are always appended.
pub fn import_json_string(db: &CityDb, json: &str) -> Result<ImportResult, AppError> {
    let root: ExportRoot = serde_json::from_str(json)
        .map_err(|e| AppError::Validation(format!("Invalid JSON: {}", e)))?;

    if root.schema_version != SCHEMA_VERSION {
        return Err(AppError::Validation(format!(
            "Unsupported schema version: {} (expected {})",
            root.schema_version, SCHEMA_VERSION
        )));
    }

    let mut conn = db.connect()?;
    let tx = conn
        .transaction()
        .map_err(|e| AppError::Db(e.to_string()))?;
    tx.execute(CITIES_DDL, [])
        .map_err(|e| AppError::Db(e.to_string()))?;
    tx.execute(USERS_CITIES_DDL, [])
        .map_err(|e| AppError::Db(e.to_string()))?;

    let mut skipped = 0usize;
    let mut cities_count = 0usize;
    for c in &root.cities {
        let changed = tx
            .execute(
                "INSERT OR IGNORE INTO cities (id, city, lat, lng) VALUES (?1, ?2, ?3, ?4)",
                params![c.id, c.city, c.lat, c.lng],
            )
            .map_err(|e| AppError::Db(e.to_string()))?;
        if changed > 0 {
            cities_count += 1;
        } else {
            skipped += 1;
        }
    }

    for a in &root.associations {
        tx.execute(
            "INSERT INTO users_cities (user_id, city_id) VALUES (?1, ?2)",
            params![a.user_id, a.city_id],
        )
        .map_err(|e| AppError::Db(e.to_string()))?;
    }

    tx.commit().map_err(|e| AppError::Db(e.to_string()))?;
    log::info!(
        "Imported {} cities ({} skipped), {} associations",
        cities_count,
        skipped,
        root.associations.len()
    );

    Ok(ImportResult {
        cities: cities_count,
        associations: root.associations.len(),
        skipped_duplicates: skipped,
    })
}
