//! Domain types: coordinates, distances, lookup outcomes.

pub mod geo;
pub mod lookup;

pub use geo::{geodesic_km, haversine_km, midpoint, Coordinates};
pub use lookup::Lookup;

/// Surrogate key of a row in `cities`.
pub type CityId = i64;
