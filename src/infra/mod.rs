//! Infrastructure: SQLite connection handle and table DDL.

pub mod db;

pub use db::CityDb;
