use egui::emath::Rot2;
use egui::epaint::TextShape;
use egui::{Color32, FontId, Painter, Pos2, Rect};

/// Drawing-surface capability consumed by drawables and the renderer.
///
/// Coordinates are canvas-space points with the origin at the canvas
/// top-left; implementations map them onto their own backing store.
pub trait Surface {
    /// Wipe the whole surface to a background color.
    fn clear(&mut self, background: Color32);

    /// Stroke a connected polyline of at least two points.
    fn stroke_polyline(&mut self, points: &[Pos2], width: f32, color: Color32);

    /// Fill a circle, used for the marker preview.
    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32);

    /// Draw a text glyph centered on `center`, rotated by `angle` radians
    /// about that center.
    fn fill_glyph(&mut self, glyph: &str, center: Pos2, size: f32, angle: f32, color: Color32);
}

/// Live surface over an egui painter, offset into the canvas rect.
pub struct PainterSurface<'a> {
    painter: &'a Painter,
    rect: Rect,
}

impl<'a> PainterSurface<'a> {
    pub fn new(painter: &'a Painter, rect: Rect) -> Self {
        Self { painter, rect }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        self.rect.min + pos.to_vec2()
    }
}

impl Surface for PainterSurface<'_> {
    fn clear(&mut self, background: Color32) {
        self.painter.rect_filled(self.rect, 0.0, background);
    }

    fn stroke_polyline(&mut self, points: &[Pos2], width: f32, color: Color32) {
        let points: Vec<Pos2> = points.iter().map(|p| self.to_screen(*p)).collect();
        self.painter
            .add(egui::Shape::line(points, egui::Stroke::new(width, color)));
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.painter
            .circle_filled(self.to_screen(center), radius, color);
    }

    fn fill_glyph(&mut self, glyph: &str, center: Pos2, size: f32, angle: f32, color: Color32) {
        let galley =
            self.painter
                .layout_no_wrap(glyph.to_owned(), FontId::proportional(size), color);
        // TextShape rotates about the galley origin; place the origin so the
        // glyph spins about its own center instead.
        let center = self.to_screen(center);
        let origin = center - Rot2::from_angle(angle) * (galley.size() / 2.0);
        let mut text = TextShape::new(origin, galley, color);
        text.angle = angle;
        self.painter.add(text);
    }
}

/// Uniform scale transform in front of another surface.
///
/// The export path replays the log through this wrapper so the
/// high-resolution output keeps exactly the live geometry, multiplied.
pub struct ScaledSurface<'a> {
    inner: &'a mut dyn Surface,
    factor: f32,
}

impl<'a> ScaledSurface<'a> {
    pub fn new(inner: &'a mut dyn Surface, factor: f32) -> Self {
        Self { inner, factor }
    }

    fn scale(&self, pos: Pos2) -> Pos2 {
        (self.factor * pos.to_vec2()).to_pos2()
    }
}

impl Surface for ScaledSurface<'_> {
    fn clear(&mut self, background: Color32) {
        self.inner.clear(background);
    }

    fn stroke_polyline(&mut self, points: &[Pos2], width: f32, color: Color32) {
        let points: Vec<Pos2> = points.iter().map(|p| self.scale(*p)).collect();
        self.inner
            .stroke_polyline(&points, width * self.factor, color);
    }

    fn fill_circle(&mut self, center: Pos2, radius: f32, color: Color32) {
        self.inner
            .fill_circle(self.scale(center), radius * self.factor, color);
    }

    fn fill_glyph(&mut self, glyph: &str, center: Pos2, size: f32, angle: f32, color: Color32) {
        self.inner
            .fill_glyph(glyph, self.scale(center), size * self.factor, angle, color);
    }
}
