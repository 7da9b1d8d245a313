//! Marker color names.

use crate::error::AppError;
use tiny_skia::Color;

pub fn ocean() -> Color {
    Color::from_rgba8(173, 216, 230, 255) // lightblue
}

pub fn land() -> Color {
    Color::from_rgba8(144, 238, 144, 255) // lightgreen
}

pub fn coastline() -> Color {
    Color::from_rgba8(90, 120, 90, 255)
}

pub fn text() -> Color {
    Color::from_rgba8(0, 0, 0, 255)
}

/// Parse a named color (`"red"`, `"lightblue"`) or `#rrggbb`.
pub fn parse_color(name: &str) -> Result<Color, AppError> {
    let trimmed = name.trim();
    if let Some(hex) = trimmed.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| AppError::Validation(format!("bad color: {}", name)));
    }
    let rgb = match trimmed.to_ascii_lowercase().as_str() {
        "blue" => (0, 0, 255),
        "red" => (255, 0, 0),
        "green" => (0, 128, 0),
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "orange" => (255, 165, 0),
        "purple" => (128, 0, 128),
        "yellow" => (255, 255, 0),
        "gray" | "grey" => (128, 128, 128),
        "lightblue" => (173, 216, 230),
        "lightgreen" => (144, 238, 144),
        _ => return Err(AppError::Validation(format!("unknown color: {}", name))),
    };
    Ok(Color::from_rgba8(rgb.0, rgb.1, rgb.2, 255))
}

fn parse_hex(hex: &str) -> Option<Color> {
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(Color::from_rgba8(channel(0)?, channel(2)?, channel(4)?, 255))
}
