use egui::{Color32, Pos2};

mod sticker;
mod stroke;

pub use sticker::{StickerPlacement, STICKER_SIZE};
pub use stroke::LineStroke;

use crate::render::Surface;

/// A committed unit of renderable content, replayable onto any surface.
///
/// Rendering uses only data captured when the drawable was created, so the
/// log can be replayed in commit order against any surface with the same
/// result.
#[derive(Clone, Debug, PartialEq)]
pub enum Drawable {
    Stroke(LineStroke),
    Sticker(StickerPlacement),
}

impl Drawable {
    pub fn render(&self, surface: &mut dyn Surface) {
        match self {
            Drawable::Stroke(stroke) => stroke.render(surface),
            Drawable::Sticker(sticker) => sticker.render(surface),
        }
    }
}

/// The live cursor preview of the active tool. Never enters the command log
/// and never appears in exports.
#[derive(Clone, Debug, PartialEq)]
pub enum Preview {
    Marker { pos: Pos2, width: f32, color: Color32 },
    Sticker { pos: Pos2, glyph: String, rotation: f32 },
}

impl Preview {
    pub fn render(&self, surface: &mut dyn Surface) {
        match self {
            Preview::Marker { pos, width, color } => {
                surface.fill_circle(*pos, width / 2.0, *color);
            }
            Preview::Sticker {
                pos,
                glyph,
                rotation,
            } => {
                surface.fill_glyph(
                    glyph,
                    *pos,
                    STICKER_SIZE,
                    rotation.to_radians(),
                    sticker::STICKER_COLOR,
                );
            }
        }
    }
}
