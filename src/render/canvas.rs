//! World map canvas: background, land, markers, lines and labels.

use super::color;
use super::land::LAND_RINGS;
use super::projection::Projection;
use super::text::{draw_text, load_font, Align};
use super::RenderOptions;
use crate::domain::Coordinates;
use crate::error::AppError;
use ab_glyph::FontVec;
use std::path::Path;
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

const MARKER_RADIUS: f32 = 5.0;
const LINE_WIDTH: f32 = 2.0;
const COASTLINE_WIDTH: f32 = 0.6;

pub struct MapCanvas {
    pixmap: Pixmap,
    projection: Projection,
    font: Option<FontVec>,
    font_size: f32,
}

impl MapCanvas {
    /// Blank world map: ocean fill with land rings on top.
    pub fn new(opts: &RenderOptions) -> Result<Self, AppError> {
        let mut pixmap = Pixmap::new(opts.width, opts.height).ok_or_else(|| {
            AppError::Render(format!("invalid canvas size {}x{}", opts.width, opts.height))
        })?;
        pixmap.fill(color::ocean());

        let projection = Projection::new(opts.width, opts.height);
        let font = load_font(opts.font_path.as_deref())?;
        let font_size = (opts.height as f32 / 40.0).max(10.0);

        let mut canvas = Self {
            pixmap,
            projection,
            font,
            font_size,
        };
        canvas.draw_land();
        Ok(canvas)
    }

    fn draw_land(&mut self) {
        let mut fill = Paint::default();
        fill.set_color(color::land());
        fill.anti_alias = true;
        let mut edge = Paint::default();
        edge.set_color(color::coastline());
        edge.anti_alias = true;
        let stroke = Stroke {
            width: COASTLINE_WIDTH,
            ..Stroke::default()
        };

        for ring in LAND_RINGS {
            let mut pb = PathBuilder::new();
            for (i, &(lng, lat)) in ring.iter().enumerate() {
                let (x, y) = self.projection.to_pixel(lat, lng);
                if i == 0 {
                    pb.move_to(x, y);
                } else {
                    pb.line_to(x, y);
                }
            }
            pb.close();
            if let Some(path) = pb.finish() {
                self.pixmap
                    .fill_path(&path, &fill, FillRule::Winding, Transform::identity(), None);
                self.pixmap
                    .stroke_path(&path, &edge, &stroke, Transform::identity(), None);
            }
        }
    }

    /// Filled circle at `at`.
    pub fn marker(&mut self, at: Coordinates, color: Color) {
        let (x, y) = self.projection.project(at);
        if let Some(path) = PathBuilder::from_circle(x, y, MARKER_RADIUS) {
            let mut paint = Paint::default();
            paint.set_color(color);
            paint.anti_alias = true;
            self.pixmap
                .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        }
    }

    /// Straight segment in map coordinates.
    pub fn line(&mut self, from: Coordinates, to: Coordinates, color: Color) {
        let (x1, y1) = self.projection.project(from);
        let (x2, y2) = self.projection.project(to);
        let mut pb = PathBuilder::new();
        pb.move_to(x1, y1);
        pb.line_to(x2, y2);
        if let Some(path) = pb.finish() {
            let mut paint = Paint::default();
            paint.set_color(color);
            paint.anti_alias = true;
            let stroke = Stroke {
                width: LINE_WIDTH,
                ..Stroke::default()
            };
            self.pixmap
                .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
        }
    }

    /// Text with its baseline anchored at a map position.
    pub fn label(&mut self, at: Coordinates, text: &str, align: Align) {
        let Some(font) = self.font.as_ref() else {
            return;
        };
        let (x, y) = self.projection.project(at);
        draw_text(
            &mut self.pixmap,
            font,
            text,
            x,
            y,
            self.font_size,
            color::text(),
            align,
        );
    }

    /// Centered heading along the top edge.
    pub fn title(&mut self, text: &str) {
        let Some(font) = self.font.as_ref() else {
            return;
        };
        let size = self.font_size * 1.3;
        let x = self.projection.width / 2.0;
        draw_text(&mut self.pixmap, font, text, x, size * 1.2, size, color::text(), Align::Center);
    }

    #[cfg(test)]
    fn pixel(&self, at: Coordinates) -> Option<Color> {
        let (x, y) = self.projection.project(at);
        self.pixmap
            .pixel(x as u32, y as u32)
            .map(|p| p.demultiply())
            .map(|c| Color::from_rgba8(c.red(), c.green(), c.blue(), c.alpha()))
    }

    pub fn save_png(&self, path: &Path) -> Result<(), AppError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        self.pixmap
            .save_png(path)
            .map_err(|e| AppError::Render(format!("write {:?}: {}", path, e)))?;
        log::info!("Map written to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_opts() -> RenderOptions {
        RenderOptions {
            width: 360,
            height: 180,
            ..RenderOptions::default()
        }
    }

    #[test]
    fn zero_size_is_render_error() {
        let opts = RenderOptions {
            width: 0,
            ..RenderOptions::default()
        };
        let err = MapCanvas::new(&opts).err().unwrap();
        assert_eq!(err.code(), "RENDER_ERROR");
    }

    #[test]
    fn ocean_and_land_are_filled() {
        let canvas = MapCanvas::new(&small_opts()).unwrap();
        // mid Pacific
        assert_eq!(canvas.pixel(Coordinates::new(0.0, -150.0)), Some(color::ocean()));
        // central Africa
        assert_eq!(canvas.pixel(Coordinates::new(5.0, 22.0)), Some(color::land()));
    }

    #[test]
    fn marker_paints_its_center() {
        let mut canvas = MapCanvas::new(&small_opts()).unwrap();
        let spot = Coordinates::new(-30.0, -30.0); // South Atlantic
        canvas.marker(spot, Color::from_rgba8(255, 0, 0, 255));
        assert_eq!(canvas.pixel(spot), Some(Color::from_rgba8(255, 0, 0, 255)));
    }

    fn font_opts() -> Option<RenderOptions> {
        let font = crate::render::find_system_font()?;
        Some(RenderOptions {
            font_path: Some(font),
            ..small_opts()
        })
    }

    /// Pixels that differ between two same-sized pixmaps inside a box.
    fn changed_in(a: &Pixmap, b: &Pixmap, (x0, y0): (i32, i32), (x1, y1): (i32, i32)) -> usize {
        let w = a.width() as i32;
        let h = a.height() as i32;
        let mut n = 0;
        for y in y0.max(0)..y1.min(h) {
            for x in x0.max(0)..x1.min(w) {
                let i = (y * w + x) as usize;
                if a.pixels()[i] != b.pixels()[i] {
                    n += 1;
                }
            }
        }
        n
    }

    #[test]
    fn label_draws_left_of_right_aligned_anchor() {
        let Some(opts) = font_opts() else {
            return;
        };
        let blank = MapCanvas::new(&opts).unwrap();
        let mut canvas = MapCanvas::new(&opts).unwrap();
        let anchor = Coordinates::new(-30.0, -20.0); // South Atlantic
        canvas.label(anchor, "Atlantic", Align::Right);

        let (x, y) = canvas.projection.project(anchor);
        let (x, y) = (x as i32, y as i32);
        let size = canvas.font_size as i32;
        let near = changed_in(
            &blank.pixmap,
            &canvas.pixmap,
            (x - 8 * size, y - size),
            (x + 2, y + 4),
        );
        assert!(near > 0);
        let total = changed_in(&blank.pixmap, &canvas.pixmap, (0, 0), (i32::MAX, i32::MAX));
        assert_eq!(near, total, "label ink outside its anchor box");
    }

    #[test]
    fn title_draws_along_top_edge() {
        let Some(opts) = font_opts() else {
            return;
        };
        let blank = MapCanvas::new(&opts).unwrap();
        let mut canvas = MapCanvas::new(&opts).unwrap();
        canvas.title("Distance");

        let band = (canvas.font_size * 2.0) as i32;
        let top = changed_in(&blank.pixmap, &canvas.pixmap, (0, 0), (i32::MAX, band));
        assert!(top > 0);
        let below = changed_in(&blank.pixmap, &canvas.pixmap, (0, band), (i32::MAX, i32::MAX));
        assert_eq!(below, 0);
    }

    #[test]
    fn label_without_font_is_noop() {
        let blank = MapCanvas::new(&small_opts()).unwrap();
        let mut canvas = MapCanvas::new(&small_opts()).unwrap();
        canvas.font = None;
        canvas.label(Coordinates::new(-30.0, -20.0), "Atlantic", Align::Right);
        canvas.title("Distance");
        assert!(blank.pixmap.pixels() == canvas.pixmap.pixels());
    }

    #[test]
    fn save_png_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("sub/map.png");
        let canvas = MapCanvas::new(&small_opts()).unwrap();
        canvas.save_png(&out).unwrap();
        let bytes = std::fs::read(&out).unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }
}
