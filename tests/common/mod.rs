//! Shared fixtures: a throwaway database file with a seeded `cities` table.

#![allow(dead_code)]

use app_lib::app::{ensure_table, upsert_city};
use app_lib::domain::Coordinates;
use app_lib::infra::CityDb;
use app_lib::render::RenderOptions;
use tempfile::TempDir;

pub const SOCHI: Coordinates = Coordinates { lat: 43.6, lng: 39.7 };
pub const MOSCOW: Coordinates = Coordinates { lat: 55.75, lng: 37.6 };
pub const PARIS: Coordinates = Coordinates { lat: 48.8566, lng: 2.3522 };

pub struct TestDb {
    pub dir: TempDir,
    pub db: CityDb,
}

impl TestDb {
    /// Small canvas writing into the temp dir, so tests stay fast and isolated.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            width: 360,
            height: 180,
            output_dir: self.dir.path().to_path_buf(),
            font_path: None,
        }
    }
}

/// Fresh database with Sochi, Moscow and Paris and an empty `users_cities`.
pub fn init_test_db() -> TestDb {
    let dir = tempfile::tempdir().unwrap();
    let db = CityDb::new(dir.path().join("cities.db"));
    upsert_city(&db, 1, "Sochi", SOCHI).unwrap();
    upsert_city(&db, 2, "Moscow", MOSCOW).unwrap();
    upsert_city(&db, 3, "Paris", PARIS).unwrap();
    ensure_table(&db).unwrap();
    TestDb { dir, db }
}
