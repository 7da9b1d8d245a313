//! Association store integration tests

mod common;

use app_lib::app::{add_association, ensure_table, get_coordinates, list_cities};
use app_lib::domain::Lookup;
use app_lib::infra::CityDb;
use common::{init_test_db, MOSCOW, SOCHI};

fn association_rows(db: &CityDb) -> i64 {
    let conn = db.connect().unwrap();
    conn.query_row("SELECT COUNT(*) FROM users_cities", [], |r| r.get(0))
        .unwrap()
}

// ══════════════════════════════════════════════════════════
//  ensure_table
// ══════════════════════════════════════════════════════════

#[test]
fn ensure_table_is_idempotent() {
    let t = init_test_db();
    ensure_table(&t.db).unwrap();
    ensure_table(&t.db).unwrap();
    assert_eq!(association_rows(&t.db), 0);
}

#[test]
fn ensure_table_keeps_existing_rows() {
    let t = init_test_db();
    add_association(&t.db, 7, "Sochi").unwrap();
    ensure_table(&t.db).unwrap();
    assert_eq!(association_rows(&t.db), 1);
}

#[test]
fn ensure_table_on_fresh_file() {
    let dir = tempfile::tempdir().unwrap();
    let db = CityDb::new(dir.path().join("fresh.db"));
    ensure_table(&db).unwrap();
    assert_eq!(association_rows(&db), 0);
}

// ══════════════════════════════════════════════════════════
//  add_association
// ══════════════════════════════════════════════════════════

#[test]
fn add_known_city_succeeds_and_is_listed() {
    let t = init_test_db();
    let result = add_association(&t.db, 42, "Moscow").unwrap();
    assert_eq!(result, Lookup::Found(2));
    assert_eq!(list_cities(&t.db, 42).unwrap(), vec!["Moscow".to_string()]);
}

#[test]
fn add_unknown_city_returns_not_found_without_insert() {
    let t = init_test_db();
    let result = add_association(&t.db, 42, "Atlantis").unwrap();
    assert_eq!(result, Lookup::NotFound);
    assert!(!result.is_found());
    assert_eq!(association_rows(&t.db), 0);
    assert!(list_cities(&t.db, 42).unwrap().is_empty());
}

#[test]
fn add_is_case_sensitive() {
    let t = init_test_db();
    assert_eq!(add_association(&t.db, 1, "moscow").unwrap(), Lookup::NotFound);
}

#[test]
fn duplicate_associations_are_kept() {
    let t = init_test_db();
    add_association(&t.db, 5, "Sochi").unwrap();
    add_association(&t.db, 5, "Sochi").unwrap();
    assert_eq!(association_rows(&t.db), 2);
    assert_eq!(list_cities(&t.db, 5).unwrap(), vec!["Sochi", "Sochi"]);
}

#[test]
fn add_without_cities_table_is_db_error() {
    let dir = tempfile::tempdir().unwrap();
    let db = CityDb::new(dir.path().join("empty.db"));
    ensure_table(&db).unwrap();
    let err = add_association(&db, 1, "Sochi").unwrap_err();
    assert_eq!(err.code(), "DB_ERROR");
}

// ══════════════════════════════════════════════════════════
//  list_cities
// ══════════════════════════════════════════════════════════

#[test]
fn list_unknown_user_is_empty() {
    let t = init_test_db();
    add_association(&t.db, 1, "Paris").unwrap();
    assert!(list_cities(&t.db, 999).unwrap().is_empty());
}

#[test]
fn list_only_returns_own_cities() {
    let t = init_test_db();
    add_association(&t.db, 1, "Paris").unwrap();
    add_association(&t.db, 1, "Sochi").unwrap();
    add_association(&t.db, 2, "Moscow").unwrap();

    let mut mine = list_cities(&t.db, 1).unwrap();
    mine.sort();
    assert_eq!(mine, vec!["Paris", "Sochi"]);
    assert_eq!(list_cities(&t.db, 2).unwrap(), vec!["Moscow"]);
}

#[test]
fn association_stores_city_id_as_text_and_still_joins() {
    let t = init_test_db();
    add_association(&t.db, 3, "Moscow").unwrap();
    let conn = t.db.connect().unwrap();
    let kind: String = conn
        .query_row("SELECT typeof(city_id) FROM users_cities", [], |r| r.get(0))
        .unwrap();
    assert_eq!(kind, "text");
    drop(conn);
    assert_eq!(list_cities(&t.db, 3).unwrap(), vec!["Moscow"]);
}

// ══════════════════════════════════════════════════════════
//  get_coordinates
// ══════════════════════════════════════════════════════════

#[test]
fn coordinates_of_known_city_are_exact() {
    let t = init_test_db();
    assert_eq!(get_coordinates(&t.db, "Sochi").unwrap(), Lookup::Found(SOCHI));
    assert_eq!(get_coordinates(&t.db, "Moscow").unwrap(), Lookup::Found(MOSCOW));
}

#[test]
fn coordinates_of_unknown_city_not_found() {
    let t = init_test_db();
    let result = get_coordinates(&t.db, "Atlantis").unwrap();
    assert_eq!(result, Lookup::NotFound);
    let err = result.found_or_not_found("city Atlantis").unwrap_err();
    assert_eq!(err.code(), "NOT_FOUND");
}
