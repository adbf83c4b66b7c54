use egui::{Color32, Pos2};

use crate::render::Surface;

/// Freehand marker stroke: an ordered run of canvas-space points with the
/// width and color captured when the stroke was opened.
#[derive(Clone, Debug, PartialEq)]
pub struct LineStroke {
    points: Vec<Pos2>,
    width: f32,
    color: Color32,
}

impl LineStroke {
    pub fn new(points: Vec<Pos2>, width: f32, color: Color32) -> Self {
        Self {
            points,
            width,
            color,
        }
    }

    /// Extend the stroke while it is open. Only the input controller's
    /// drawing state reaches this; a frozen stroke has no path here.
    pub(crate) fn push(&mut self, point: Pos2) {
        self.points.push(point);
    }

    pub fn points(&self) -> &[Pos2] {
        &self.points
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn color(&self) -> Color32 {
        self.color
    }

    pub(crate) fn render(&self, surface: &mut dyn Surface) {
        // A single click with no drag leaves no visible mark.
        if self.points.len() < 2 {
            return;
        }
        surface.stroke_polyline(&self.points, self.width, self.color);
    }
}
