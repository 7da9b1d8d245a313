//! Map rendering use cases: city markers and two-city distance.

use super::association::get_coordinates;
use crate::domain::{geodesic_km, midpoint, Coordinates, Lookup};
use crate::error::AppError;
use crate::infra::CityDb;
use crate::render::{parse_color, Align, MapCanvas, RenderOptions};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tiny_skia::Color;

/// City labels sit this many degrees west of and below their marker.
const LABEL_OFFSET_LNG: f64 = -3.0;
const LABEL_OFFSET_LAT: f64 = -12.0;

/// Where a city's right-aligned label baseline ends.
fn label_anchor(city: Coordinates) -> Coordinates {
    Coordinates::new(city.lat + LABEL_OFFSET_LAT, city.lng + LABEL_OFFSET_LNG)
}

/// What `plot_cities` does with a name that is not in `cities`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingCity {
    /// Fail the whole call with `NOT_FOUND`; no image is written.
    #[default]
    Abort,
    /// Leave the city off the map and keep going.
    Skip,
}

#[derive(Debug, Serialize)]
pub struct PlotReport {
    pub output: PathBuf,
    pub plotted: Vec<String>,
    pub skipped: Vec<String>,
}

#[derive(Debug, PartialEq, Serialize)]
pub struct DistanceReport {
    pub from: String,
    pub to: String,
    pub kilometers: f64,
    pub output: PathBuf,
}

/// Draw a marker and label for each city, in input order, and write the map
/// to `output`.
pub fn plot_cities(
    db: &CityDb,
    opts: &RenderOptions,
    output: &Path,
    cities: &[&str],
    marker_color: &str,
    policy: MissingCity,
) -> Result<PlotReport, AppError> {
    let marker = parse_color(marker_color)?;

    // Resolve everything before drawing so an abort leaves no half-written file.
    let mut resolved: Vec<(&str, Coordinates)> = Vec::with_capacity(cities.len());
    let mut skipped = Vec::new();
    for &name in cities {
        match get_coordinates(db, name)? {
            Lookup::Found(coords) => resolved.push((name, coords)),
            Lookup::NotFound => match policy {
                MissingCity::Abort => {
                    return Err(AppError::NotFound(format!("city {}", name)));
                }
                MissingCity::Skip => {
                    log::warn!("plot_cities: skipping unknown city {:?}", name);
                    skipped.push(name.to_string());
                }
            },
        }
    }

    let mut canvas = MapCanvas::new(opts)?;
    for &(name, coords) in &resolved {
        canvas.marker(coords, marker);
        canvas.label(label_anchor(coords), name, Align::Right);
    }
    canvas.save_png(output)?;

    Ok(PlotReport {
        output: output.to_path_buf(),
        plotted: resolved.into_iter().map(|(name, _)| name.to_string()).collect(),
        skipped,
    })
}

/// Draw the two cities joined by a line labelled with their geodesic
/// distance, written to `distance_map.png` in the output directory.
///
/// Returns `NotFound` and writes nothing if either city is unknown.
pub fn plot_distance(
    db: &CityDb,
    opts: &RenderOptions,
    city1: &str,
    city2: &str,
) -> Result<Lookup<DistanceReport>, AppError> {
    let (from, to) = match (get_coordinates(db, city1)?, get_coordinates(db, city2)?) {
        (Lookup::Found(a), Lookup::Found(b)) => (a, b),
        _ => {
            log::debug!("plot_distance: {:?} or {:?} not found", city1, city2);
            return Ok(Lookup::NotFound);
        }
    };

    let kilometers = geodesic_km(from, to);
    log::info!("Distance between {} and {}: {:.2} km", city1, city2, kilometers);

    let mut canvas = MapCanvas::new(opts)?;
    canvas.line(from, to, Color::from_rgba8(255, 0, 0, 255));
    canvas.label(midpoint(from, to), &format!("{:.2} km", kilometers), Align::Center);
    canvas.title(&format!(
        "Distance between {} and {}: {:.2} km",
        city1, city2, kilometers
    ));

    let output = opts.distance_map_path();
    canvas.save_png(&output)?;

    Ok(Lookup::Found(DistanceReport {
        from: city1.to_string(),
        to: city2.to_string(),
        kilometers,
        output,
    }))
}
