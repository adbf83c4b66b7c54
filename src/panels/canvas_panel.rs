use egui::Vec2;

use crate::app::SketchApp;
use crate::render::{PainterSurface, CANVAS_SIZE};

/// The drawing canvas: fixed-size painter area, pointer events in, one
/// render pass out.
pub fn canvas_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        let (response, painter) =
            ui.allocate_painter(Vec2::splat(CANVAS_SIZE), egui::Sense::drag());

        for event in app.canvas_input.events(&response) {
            app.controller.handle_pointer(event);
        }

        // Strokes may run past the edge mid-drag; clip them to the canvas.
        let painter = painter.with_clip_rect(response.rect);
        let mut surface = PainterSurface::new(&painter, response.rect);
        app.renderer.render(
            &mut surface,
            app.controller.drawables(),
            app.controller.preview(),
            app.controller.is_drawing(),
        );
    });
}
