//! User-to-city association use cases.

use crate::domain::{CityId, Coordinates, Lookup};
use crate::error::AppError;
use crate::infra::db::USERS_CITIES_DDL;
use crate::infra::CityDb;
use rusqlite::{params, OptionalExtension};

/// Create `users_cities` if it does not exist yet.
pub fn ensure_table(db: &CityDb) -> Result<(), AppError> {
    let conn = db.connect()?;
    conn.execute(USERS_CITIES_DDL, [])
        .map_err(|e| AppError::Db(e.to_string()))?;
    Ok(())
}

/// Link `user_id` to the city called `city_name`.
///
/// Returns the id of the linked city, or `NotFound` with nothing inserted
/// when no such city exists. Duplicate links are allowed.
pub fn add_association(
    db: &CityDb,
    user_id: i64,
    city_name: &str,
) -> Result<Lookup<CityId>, AppError> {
    let conn = db.connect()?;
    let city_id: Option<CityId> = conn
        .query_row(
            "SELECT id FROM cities WHERE city = ?1",
            [city_name],
            |r| r.get(0),
        )
        .optional()
        .map_err(|e| AppError::Db(e.to_string()))?;

    let Some(city_id) = city_id else {
        log::debug!("add_association: no city named {:?}", city_name);
        return Ok(Lookup::NotFound);
    };

    conn.execute(
        "INSERT INTO users_cities (user_id, city_id) VALUES (?1, ?2)",
        params![user_id, city_id],
    )
    .map_err(|e| AppError::Db(e.to_string()))?;
    log::debug!("add_association: user {} -> city {}", user_id, city_id);

    Ok(Lookup::Found(city_id))
}

/// Names of every city linked to `user_id`, one entry per association.
pub fn list_cities(db: &CityDb, user_id: i64) -> Result<Vec<String>, AppError> {
    let conn = db.connect()?;
    let mut stmt = conn
        .prepare(
            "SELECT cities.city
             FROM users_cities
             JOIN cities ON users_cities.city_id = cities.id
             WHERE users_cities.user_id = ?1",
        )
        .map_err(|e| AppError::Db(e.to_string()))?;
    let rows = stmt.query_map([user_id], |r| r.get::<_, String>(0))?;
    let mut out = Vec::new();
    for r in rows {
        out.push(r.map_err(|e| AppError::Db(e.to_string()))?);
    }
    Ok(out)
}

pub fn get_coordinates(db: &CityDb, city_name: &str) -> Result<Lookup<Coordinates>, AppError> {
    let conn = db.connect()?;
    let coords = conn
        .query_row(
            "SELECT lat, lng FROM cities WHERE city = ?1",
            [city_name],
            |r| Ok(Coordinates::new(r.get(0)?, r.get(1)?)),
        )
        .optional()
        .map_err(|e| AppError::Db(e.to_string()))?;
    Ok(coords.into())
}
