//! Application use cases.

mod association;
mod data_transfer;
mod map;

pub use association::{add_association, ensure_table, get_coordinates, list_cities};
pub use data_transfer::{
    export_json_string, import_json_string, upsert_city, ExportAssociation, ExportCity,
    ExportRoot, ImportResult,
};
pub use map::{plot_cities, plot_distance, DistanceReport, MissingCity, PlotReport};
