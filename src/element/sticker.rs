use egui::{Color32, Pos2};

use crate::render::Surface;

/// Point size used for sticker glyphs, live and exported alike.
pub const STICKER_SIZE: f32 = 32.0;

/// Glyphs are tinted like regular text.
pub(crate) const STICKER_COLOR: Color32 = Color32::BLACK;

/// An emoji sticker stamped onto the canvas. Created and frozen atomically
/// at pointer-down; there is no drag phase and no repositioning afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct StickerPlacement {
    glyph: String,
    pos: Pos2,
    rotation: f32,
}

impl StickerPlacement {
    pub fn new(glyph: impl Into<String>, pos: Pos2, rotation: f32) -> Self {
        Self {
            glyph: glyph.into(),
            pos,
            rotation,
        }
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    pub fn pos(&self) -> Pos2 {
        self.pos
    }

    /// Rotation in degrees, as set by the rotation slider at placement time.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub(crate) fn render(&self, surface: &mut dyn Surface) {
        surface.fill_glyph(
            &self.glyph,
            self.pos,
            STICKER_SIZE,
            self.rotation.to_radians(),
            STICKER_COLOR,
        );
    }
}
