use egui::ecolor::Hsva;
use egui::{Color32, Pos2};
use serde::{Deserialize, Serialize};

mod palette;

pub use palette::{StickerPalette, DEFAULT_STICKERS};

use crate::element::Preview;

/// Stroke width of the thin marker preset.
pub const THIN_WIDTH: f32 = 2.0;
/// Stroke width of the thick marker preset.
pub const THICK_WIDTH: f32 = 6.0;
/// Hue a fresh marker starts with, in degrees.
pub const DEFAULT_HUE: f32 = 0.0;

/// Marker color for a hue in degrees, at full saturation and value.
pub fn hue_color(degrees: f32) -> Color32 {
    Color32::from(Hsva::new(degrees / 360.0, 1.0, 1.0, 1.0))
}

/// The active drawing instrument. Exactly one variant is live at a time;
/// selecting a tool replaces the whole state.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ToolState {
    Marker { width: f32, hue: f32 },
    Sticker { glyph: String, rotation: f32 },
}

impl Default for ToolState {
    fn default() -> Self {
        ToolState::Marker {
            width: THIN_WIDTH,
            hue: DEFAULT_HUE,
        }
    }
}

impl ToolState {
    /// Switch to a marker of the given width. The hue survives when a
    /// marker was already active, so width presets don't reset the slider.
    pub fn select_marker(&mut self, width: f32) {
        let hue = match self {
            ToolState::Marker { hue, .. } => *hue,
            _ => DEFAULT_HUE,
        };
        *self = ToolState::Marker { width, hue };
    }

    /// Switch to a sticker. The rotation survives when a sticker was
    /// already active.
    pub fn select_sticker(&mut self, glyph: impl Into<String>) {
        let rotation = match self {
            ToolState::Sticker { rotation, .. } => *rotation,
            _ => 0.0,
        };
        *self = ToolState::Sticker {
            glyph: glyph.into(),
            rotation,
        };
    }

    /// Set the marker hue in degrees. Silently ignored while a sticker is
    /// active.
    pub fn set_hue(&mut self, degrees: f32) {
        if let ToolState::Marker { hue, .. } = self {
            *hue = degrees;
        }
    }

    /// Set the sticker rotation in degrees. Silently ignored while a marker
    /// is active.
    pub fn set_rotation(&mut self, degrees: f32) {
        if let ToolState::Sticker { rotation, .. } = self {
            *rotation = degrees;
        }
    }

    pub fn marker_width(&self) -> Option<f32> {
        match self {
            ToolState::Marker { width, .. } => Some(*width),
            _ => None,
        }
    }

    pub fn hue(&self) -> Option<f32> {
        match self {
            ToolState::Marker { hue, .. } => Some(*hue),
            _ => None,
        }
    }

    pub fn sticker_glyph(&self) -> Option<&str> {
        match self {
            ToolState::Sticker { glyph, .. } => Some(glyph),
            _ => None,
        }
    }

    pub fn rotation(&self) -> Option<f32> {
        match self {
            ToolState::Sticker { rotation, .. } => Some(*rotation),
            _ => None,
        }
    }

    /// Derive the ephemeral cursor preview for this tool.
    pub fn make_preview(&self, pos: Pos2) -> Preview {
        match self {
            ToolState::Marker { width, hue } => Preview::Marker {
                pos,
                width: *width,
                color: hue_color(*hue),
            },
            ToolState::Sticker { glyph, rotation } => Preview::Sticker {
                pos,
                glyph: glyph.clone(),
                rotation: *rotation,
            },
        }
    }
}
