pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod infra;
pub mod render;

use app::{ensure_table, plot_cities, plot_distance, MissingCity};
use config::Config;
use domain::Lookup;
use error::AppError;

/// Demo run of the binary: the Sochi/Moscow marker map and distance map.
pub fn run(config: &Config) -> Result<(), AppError> {
    let db = config.db();
    log::info!("DB path: {:?}", db.path());
    ensure_table(&db)?;

    let opts = config.render_options();
    let cities_map = opts.output_dir.join("img.png");
    plot_cities(
        &db,
        &opts,
        &cities_map,
        &["Sochi", "Moscow"],
        "red",
        MissingCity::Abort,
    )?;

    match plot_distance(&db, &opts, "Sochi", "Moscow")? {
        Lookup::Found(report) => {
            log::info!("{:.2} km, written to {:?}", report.kilometers, report.output)
        }
        Lookup::NotFound => log::warn!("Distance map skipped: city not found"),
    }
    Ok(())
}
