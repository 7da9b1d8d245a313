//! Binary demo run (`app_lib::run`) integration tests

mod common;

use app_lib::app::upsert_city;
use app_lib::config::Config;
use app_lib::infra::CityDb;
use app_lib::render::DISTANCE_MAP_FILE;
use common::{init_test_db, SOCHI};
use std::path::Path;

fn is_png(path: &Path) -> bool {
    std::fs::read(path)
        .map(|b| b.starts_with(b"\x89PNG\r\n\x1a\n"))
        .unwrap_or(false)
}

/// Writes a config file pointing at `database` with output under `dir/out`.
fn write_config(dir: &Path, database: &Path) -> Config {
    let json = serde_json::json!({
        "database": database,
        "output_dir": dir.join("out"),
        "width": 360,
        "height": 180,
    });
    let path = dir.join("config.json");
    std::fs::write(&path, json.to_string()).unwrap();
    Config::load_from_path(&path).unwrap()
}

// ══════════════════════════════════════════════════════════
//  run
// ══════════════════════════════════════════════════════════

#[test]
fn run_writes_city_and_distance_maps() {
    let t = init_test_db();
    let config = write_config(t.dir.path(), t.db.path());

    app_lib::run(&config).unwrap();

    let out = t.dir.path().join("out");
    assert!(is_png(&out.join("img.png")));
    assert!(is_png(&out.join(DISTANCE_MAP_FILE)));
}

#[test]
fn run_aborts_when_demo_city_is_missing() {
    let dir = tempfile::tempdir().unwrap();
    let db = CityDb::new(dir.path().join("cities.db"));
    upsert_city(&db, 1, "Sochi", SOCHI).unwrap();
    let config = write_config(dir.path(), db.path());

    let err = app_lib::run(&config).unwrap_err();
    assert_eq!(err.code(), "NOT_FOUND");
    assert!(err.to_string().contains("Moscow"));

    let out = dir.path().join("out");
    assert!(!out.join("img.png").exists());
    assert!(!out.join(DISTANCE_MAP_FILE).exists());
}

#[test]
fn run_without_cities_table_is_db_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path(), &dir.path().join("empty.db"));

    let err = app_lib::run(&config).unwrap_err();
    assert_eq!(err.code(), "DB_ERROR");
}
