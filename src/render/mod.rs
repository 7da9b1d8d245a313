//! Map rendering on tiny-skia.

pub mod canvas;
pub mod color;
pub mod land;
pub mod projection;
pub mod text;

use std::path::PathBuf;

pub use canvas::MapCanvas;
pub use color::parse_color;
pub use projection::Projection;
pub use text::{find_system_font, Align};

/// File name used by the distance map.
pub const DISTANCE_MAP_FILE: &str = "distance_map.png";

#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub width: u32,
    pub height: u32,
    /// Directory for images written under a fixed name.
    pub output_dir: PathBuf,
    /// TrueType/OpenType font for labels; system fonts are searched if unset.
    pub font_path: Option<PathBuf>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 640,
            output_dir: PathBuf::from("."),
            font_path: None,
        }
    }
}

impl RenderOptions {
    pub fn distance_map_path(&self) -> PathBuf {
        self.output_dir.join(DISTANCE_MAP_FILE)
    }
}
