use std::io::Cursor;

use egui::emath::Rot2;
use egui::epaint::text::{FontDefinitions, Fonts};
use egui::epaint::ImageData;
use egui::{Color32, FontId, Pos2, Vec2};
use image::{Rgba, RgbaImage};

use super::{ExportError, Surface};

/// Side length the font atlas is allowed to grow to.
const ATLAS_MAX_SIDE: usize = 2048;

/// Offscreen surface drawing into an RGBA image, used for PNG export.
///
/// Lines and circles are rasterized directly with signed-distance coverage;
/// glyphs come out of the same epaint fonts the live view uses, so an export
/// shows the stickers exactly as drawn on screen.
pub struct RasterSurface {
    image: RgbaImage,
    fonts: Fonts,
    atlas_size: [usize; 2],
    atlas: Vec<f32>,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::new(width, height),
            fonts: Fonts::new(1.0, ATLAS_MAX_SIDE, FontDefinitions::default()),
            atlas_size: [0, 0],
            atlas: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Pixel at (x, y); out-of-range coordinates panic like the backing image.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba<u8> {
        *self.image.get_pixel(x, y)
    }

    /// Encode the current pixels as a PNG byte stream.
    pub fn encode_png(&self) -> Result<Vec<u8>, ExportError> {
        let mut bytes = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)?;
        Ok(bytes)
    }

    /// Source-over blend of `color` into one pixel at fractional coverage.
    fn blend(&mut self, x: i32, y: i32, color: Color32, coverage: f32) {
        if coverage <= 0.0
            || x < 0
            || y < 0
            || x as u32 >= self.image.width()
            || y as u32 >= self.image.height()
        {
            return;
        }
        let a = coverage.min(1.0) * color.a() as f32 / 255.0;
        let pixel = self.image.get_pixel_mut(x as u32, y as u32);
        if a >= 1.0 {
            *pixel = Rgba([color.r(), color.g(), color.b(), 255]);
            return;
        }
        let src = [color.r() as f32, color.g() as f32, color.b() as f32, 255.0];
        for channel in 0..4 {
            let dst = pixel.0[channel] as f32;
            pixel.0[channel] = (src[channel] * a + dst * (1.0 - a)).round() as u8;
        }
    }

    /// Pull pending font-texture changes into the local atlas copy. The
    /// first delta after construction carries the whole image; later ones
    /// patch sub-regions.
    fn sync_fonts(&mut self) {
        while let Some(delta) = self.fonts.font_image_delta() {
            let ImageData::Font(font_image) = delta.image else {
                continue;
            };
            match delta.pos {
                None => {
                    self.atlas_size = font_image.size;
                    self.atlas = font_image.pixels;
                }
                Some([x, y]) => {
                    let [dw, dh] = font_image.size;
                    for row in 0..dh {
                        for col in 0..dw {
                            let (dx, dy) = (x + col, y + row);
                            if dx < self.atlas_size[0] && dy < self.atlas_size[1] {
                                self.atlas[dy * self.atlas_size[0] + dx] =
                                    font_image.pixels[row * dw + col];
                            }
                        }
                    }
                }
            }
        }
    }

    fn atlas_coverage(&self, x: usize, y: usize) -> f32 {
        if x < self.atlas_size[0] && y < self.atlas_size[1] {
            self.atlas[y * self.atlas_size[0] + x]
        } else {
            0.0
        }
    }
}

impl Surface for RasterSurface {
    fn clear(&mut self, background: Color32) {
        let fill = Rgba([
            background.r(),
            background.g(),
            background.b(),
            background.a(),
        ]);
        for pixel in self.image.pixels_mut() {
            *pixel = fill;
        }
    }

    fn stroke_polyline(&mut self, points: &[Pos2], width: f32, color: Color32) {
        let half = (width / 2.0).max(0.5);
        for segment in points.windows(2) {
            let (a, b) = (segment[0], segment[1]);
            let x0 = (a.x.min(b.x) - half - 1.0).floor() as i32;
            let x1 = (a.x.max(b.x) + half + 1.0).ceil() as i32;
            let y0 = (a.y.min(b.y) - half - 1.0).floor() as i32;
            let y1 = (a.y.max(b.y) + half + 1.0).ceil() as i32;
            for y in y0..=y1 {
                for x in x0..=x1 {
                    let p = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
                    let coverage = (half + 0.5 - distance_to_segment(p, a, b)).clamp(0.0, 1.0);
                    self.blend(x, y, color, coverage);
                }
            }
        }
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        if radius <= 0.0 {
            return;
        }
        let x0 = (center.x - radius - 1.0).floor() as i32;
        let x1 = (center.x + radius + 1.0).ceil() as i32;
        let y0 = (center.y - radius - 1.0).floor() as i32;
        let y1 = (center.y + radius + 1.0).ceil() as i32;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let p = Pos2::new(x as f32 + 0.5, y as f32 + 0.5);
                let coverage = (radius + 0.5 - center.distance(p)).clamp(0.0, 1.0);
                self.blend(x, y, color, coverage);
            }
        }
    }

    fn fill_glyph(&mut self, glyph: &str, center: Pos2, size: f32, angle: f32, color: Color32) {
        let galley =
            self.fonts
                .layout_no_wrap(glyph.to_owned(), FontId::proportional(size), color);
        self.sync_fonts();

        let rot = Rot2::from_angle(angle);
        let inv = Rot2::from_angle(-angle);
        let half = galley.size() / 2.0;

        for row in &galley.rows {
            for placed in &row.glyphs {
                let uv = placed.uv_rect;
                if uv.size == Vec2::ZERO {
                    continue;
                }
                // Glyph quad in galley-local points, origin at the galley
                // center so rotation pivots where the sticker was placed.
                let local_min = placed.pos.to_vec2() + uv.offset - half;
                let local_size = uv.size;

                // Pixel bounds of the rotated quad.
                let mut min = Vec2::splat(f32::INFINITY);
                let mut max = Vec2::splat(f32::NEG_INFINITY);
                for corner in [
                    local_min,
                    local_min + Vec2::new(local_size.x, 0.0),
                    local_min + Vec2::new(0.0, local_size.y),
                    local_min + local_size,
                ] {
                    let rotated = rot * corner;
                    min = min.min(rotated);
                    max = max.max(rotated);
                }
                let x0 = (center.x + min.x).floor() as i32;
                let x1 = (center.x + max.x).ceil() as i32;
                let y0 = (center.y + min.y).floor() as i32;
                let y1 = (center.y + max.y).ceil() as i32;

                for y in y0..=y1 {
                    for x in x0..=x1 {
                        // Map the pixel center back into unrotated glyph
                        // space, then sample the atlas.
                        let offset =
                            Vec2::new(x as f32 + 0.5 - center.x, y as f32 + 0.5 - center.y);
                        let local = inv * offset;
                        let tx = (local.x - local_min.x) / local_size.x;
                        let ty = (local.y - local_min.y) / local_size.y;
                        if !(0.0..1.0).contains(&tx) || !(0.0..1.0).contains(&ty) {
                            continue;
                        }
                        let u = uv.min[0] as usize
                            + (tx * (uv.max[0] - uv.min[0]) as f32) as usize;
                        let v = uv.min[1] as usize
                            + (ty * (uv.max[1] - uv.min[1]) as f32) as usize;
                        self.blend(x, y, color, self.atlas_coverage(u, v));
                    }
                }
            }
        }
    }
}

/// Distance from `point` to the segment `a`..`b`.
fn distance_to_segment(point: Pos2, a: Pos2, b: Pos2) -> f32 {
    let line = b - a;
    let to_point = point - a;

    let len = line.length();
    if len == 0.0 {
        return to_point.length();
    }

    let t = ((to_point.x * line.x + to_point.y * line.y) / len).clamp(0.0, len);
    let projection = a + line * (t / len);
    (point - projection).length()
}
