use egui::Color32;

mod raster;
mod surface;

pub use raster::RasterSurface;
pub use surface::{PainterSurface, ScaledSurface, Surface};

use crate::element::{Drawable, Preview};

/// Square canvas edge, in points.
pub const CANVAS_SIZE: f32 = 256.0;
/// Resolution multiplier applied by the PNG export path.
pub const EXPORT_SCALE: u32 = 4;
/// Background the surface is wiped to at the start of every pass.
pub const BACKGROUND: Color32 = Color32::WHITE;

/// Errors from the PNG export path.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("failed to encode png: {0}")]
    Encode(#[from] image::ImageError),
}

/// Replays the command log onto surfaces. A pure reader of controller state;
/// every pass starts from a cleared surface.
#[derive(Debug, Default)]
pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    /// Clear, replay every drawable in commit order, then overlay the
    /// preview. The preview is skipped while a stroke is being drawn so it
    /// never shadows the stroke growing under the cursor.
    pub fn render(
        &self,
        surface: &mut dyn Surface,
        log: &[Drawable],
        preview: Option<&Preview>,
        is_drawing: bool,
    ) {
        surface.clear(BACKGROUND);
        for drawable in log {
            drawable.render(surface);
        }
        if !is_drawing {
            if let Some(preview) = preview {
                preview.render(surface);
            }
        }
    }

    /// Replay the log onto a fresh surface at `scale` times the canvas
    /// resolution and encode it as PNG bytes. The preview never appears in
    /// exports, and the live surface and log are untouched.
    pub fn export_png(&self, log: &[Drawable], scale: u32) -> Result<Vec<u8>, ExportError> {
        let side = CANVAS_SIZE as u32 * scale;
        let mut raster = RasterSurface::new(side, side);
        let mut scaled = ScaledSurface::new(&mut raster, scale as f32);
        self.render(&mut scaled, log, None, false);
        let bytes = raster.encode_png()?;
        log::info!(
            "exported {} drawables at {side}x{side} ({} bytes)",
            log.len(),
            bytes.len()
        );
        Ok(bytes)
    }
}
