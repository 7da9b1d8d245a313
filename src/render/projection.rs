//! Plate Carrée projection of the whole globe onto a pixel canvas.

use crate::domain::Coordinates;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub width: f32,
    pub height: f32,
}

impl Projection {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as f32,
            height: height as f32,
        }
    }

    /// Longitude -180..180 maps to x 0..width, latitude 90..-90 to y 0..height.
    pub fn to_pixel(&self, lat: f64, lng: f64) -> (f32, f32) {
        let x = (lng + 180.0) / 360.0 * self.width as f64;
        let y = (90.0 - lat) / 180.0 * self.height as f64;
        (x as f32, y as f32)
    }

    pub fn project(&self, point: Coordinates) -> (f32, f32) {
        self.to_pixel(point.lat, point.lng)
    }
}
