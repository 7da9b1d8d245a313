//! Label rasterization with ab_glyph onto a tiny-skia pixmap.

use crate::error::AppError;
use ab_glyph::{point, Font, FontVec, GlyphId, PxScale, ScaleFont};
use std::path::{Path, PathBuf};
use tiny_skia::{Color, Pixmap, PremultipliedColorU8};

/// Places searched when no font is configured.
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Horizontal alignment of a label relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
    Right,
}

/// First system font file that exists, if any.
pub fn find_system_font() -> Option<PathBuf> {
    SYSTEM_FONT_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|path| path.is_file())
}

fn read_font(path: &Path) -> Result<FontVec, AppError> {
    let bytes =
        std::fs::read(path).map_err(|e| AppError::Render(format!("font {:?}: {}", path, e)))?;
    FontVec::try_from_vec(bytes).map_err(|e| AppError::Render(format!("font {:?}: {}", path, e)))
}

/// Load the configured font, or the first system font found.
///
/// An explicitly configured path that cannot be loaded is an error; a
/// missing or unreadable system font is not, since labels are optional
/// decoration.
pub fn load_font(configured: Option<&Path>) -> Result<Option<FontVec>, AppError> {
    if let Some(path) = configured {
        return read_font(path).map(Some);
    }

    let Some(path) = find_system_font() else {
        log::warn!("No usable font found; map labels will be omitted");
        return Ok(None);
    };
    match read_font(&path) {
        Ok(font) => {
            log::debug!("Using system font {:?}", path);
            Ok(Some(font))
        }
        Err(e) => {
            log::warn!("{}; map labels will be omitted", e);
            Ok(None)
        }
    }
}

/// Advance width of `text` at `size` pixels.
pub fn text_width(font: &FontVec, text: &str, size: f32) -> f32 {
    let scaled = font.as_scaled(PxScale::from(size));
    let mut width = 0.0;
    let mut previous: Option<GlyphId> = None;
    for c in text.chars() {
        let id = font.glyph_id(c);
        if let Some(prev) = previous {
            width += scaled.kern(prev, id);
        }
        width += scaled.h_advance(id);
        previous = Some(id);
    }
    width
}

/// Draw `text` with its baseline at `y`, aligned on `x`.
#[allow(clippy::too_many_arguments)]
pub fn draw_text(
    pixmap: &mut Pixmap,
    font: &FontVec,
    text: &str,
    x: f32,
    y: f32,
    size: f32,
    color: Color,
    align: Align,
) {
    let scale = PxScale::from(size);
    let scaled = font.as_scaled(scale);
    let width = text_width(font, text, size);
    let mut caret = match align {
        Align::Left => x,
        Align::Center => x - width / 2.0,
        Align::Right => x - width,
    };

    let mut previous: Option<GlyphId> = None;
    for c in text.chars() {
        let id = font.glyph_id(c);
        if let Some(prev) = previous {
            caret += scaled.kern(prev, id);
        }
        let glyph = id.with_scale_and_position(scale, point(caret, y));
        caret += scaled.h_advance(id);
        previous = Some(id);

        let Some(outlined) = font.outline_glyph(glyph) else {
            continue; // whitespace
        };
        let bounds = outlined.px_bounds();
        outlined.draw(|gx, gy, coverage| {
            let px = bounds.min.x as i32 + gx as i32;
            let py = bounds.min.y as i32 + gy as i32;
            blend_pixel(pixmap, px, py, color, coverage);
        });
    }
}

/// Source-over blend of `color` at `coverage` onto one premultiplied pixel.
fn blend_pixel(pixmap: &mut Pixmap, x: i32, y: i32, color: Color, coverage: f32) {
    if x < 0 || y < 0 || x >= pixmap.width() as i32 || y >= pixmap.height() as i32 {
        return;
    }
    let alpha = (coverage.clamp(0.0, 1.0) * color.alpha()).clamp(0.0, 1.0);
    if alpha <= 0.0 {
        return;
    }
    let idx = y as usize * pixmap.width() as usize + x as usize;
    let dst = pixmap.pixels()[idx];
    let inv = 1.0 - alpha;
    let mix = |src: f32, dst: u8| (src * alpha * 255.0 + dst as f32 * inv).round() as u8;
    let a = (alpha * 255.0 + dst.alpha() as f32 * inv).round() as u8;
    let r = mix(color.red(), dst.red()).min(a);
    let g = mix(color.green(), dst.green()).min(a);
    let b = mix(color.blue(), dst.blue()).min(a);
    if let Some(out) = PremultipliedColorU8::from_rgba(r, g, b, a) {
        pixmap.pixels_mut()[idx] = out;
    }
}
