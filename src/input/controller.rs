use egui::{PointerButton, Pos2};
use serde::{Deserialize, Serialize};

use crate::command::CommandLog;
use crate::element::{Drawable, LineStroke, Preview, StickerPlacement};
use crate::tool::{hue_color, StickerPalette, ToolState};

use super::PointerEvent;

/// Phase of the pointer state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum PointerState {
    #[default]
    Idle,
    /// A stroke is open at the tail of the log.
    Drawing,
}

/// Owns all mutable sketch state: the command log, the active tool, the
/// sticker palette and the cursor preview. The UI calls into it, the
/// renderer reads it; nothing else writes.
///
/// Only the tool and palette persist across sessions; the log, preview and
/// pointer state are runtime-only.
#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchController {
    tool: ToolState,
    palette: StickerPalette,
    #[serde(skip)]
    log: CommandLog,
    #[serde(skip)]
    preview: Option<Preview>,
    #[serde(skip)]
    cursor: Option<Pos2>,
    #[serde(skip)]
    pointer: PointerState,
}

impl SketchController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one pointer event through the idle/drawing state machine.
    /// Returns true when the log changed.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        match (self.pointer, event) {
            (PointerState::Idle, PointerEvent::Down { pos, button }) => {
                if button != PointerButton::Primary {
                    return false;
                }
                self.preview = None;
                match &self.tool {
                    ToolState::Marker { width, hue } => {
                        let stroke = LineStroke::new(vec![pos], *width, hue_color(*hue));
                        self.log.commit(Drawable::Stroke(stroke));
                        self.pointer = PointerState::Drawing;
                    }
                    ToolState::Sticker { glyph, rotation } => {
                        // Stickers have no drag phase; commit and stay idle.
                        let sticker = StickerPlacement::new(glyph.clone(), pos, *rotation);
                        self.log.commit(Drawable::Sticker(sticker));
                    }
                }
                true
            }
            (PointerState::Drawing, PointerEvent::Moved { pos }) => {
                self.log.extend_open_stroke(pos);
                true
            }
            (PointerState::Drawing, PointerEvent::Up) => {
                // The stroke at the tail of the log is frozen from here on.
                self.pointer = PointerState::Idle;
                false
            }
            (PointerState::Idle, PointerEvent::Moved { pos }) => {
                self.cursor = Some(pos);
                self.preview = Some(self.tool.make_preview(pos));
                false
            }
            (PointerState::Idle, PointerEvent::Left) => {
                self.cursor = None;
                self.preview = None;
                false
            }
            // Up while idle, leave while drawing, down mid-stroke: ignore.
            _ => false,
        }
    }

    pub fn select_marker(&mut self, width: f32) {
        self.tool.select_marker(width);
        self.refresh_preview();
    }

    pub fn select_sticker(&mut self, glyph: impl Into<String>) {
        self.tool.select_sticker(glyph);
        self.refresh_preview();
    }

    pub fn set_hue(&mut self, degrees: f32) {
        self.tool.set_hue(degrees);
        self.refresh_preview();
    }

    pub fn set_rotation(&mut self, degrees: f32) {
        self.tool.set_rotation(degrees);
        self.refresh_preview();
    }

    /// Add a custom sticker to the palette. Returns false when the input is
    /// rejected (empty after trimming).
    pub fn add_custom_sticker(&mut self, text: &str) -> bool {
        self.palette.add_custom(text).is_some()
    }

    /// Move the last commit to the redo stack. Closes any open stroke.
    pub fn undo(&mut self) -> bool {
        self.pointer = PointerState::Idle;
        let changed = self.log.undo();
        if changed {
            self.preview = None;
            log::info!("undo ({} drawables left)", self.log.drawables().len());
        }
        changed
    }

    /// Restore the most recently undone commit. Closes any open stroke.
    pub fn redo(&mut self) -> bool {
        self.pointer = PointerState::Idle;
        let changed = self.log.redo();
        if changed {
            self.preview = None;
            log::info!("redo ({} drawables)", self.log.drawables().len());
        }
        changed
    }

    /// Wipe the whole drawing, redo history included.
    pub fn clear(&mut self) -> bool {
        self.pointer = PointerState::Idle;
        let changed = self.log.clear();
        if changed {
            self.preview = None;
            log::info!("cleared drawing");
        }
        changed
    }

    /// Re-derive the preview from the active tool at the last known cursor
    /// position, so tool and slider changes show up without a pointer move.
    fn refresh_preview(&mut self) {
        self.preview = match (self.pointer, self.cursor) {
            (PointerState::Idle, Some(pos)) => Some(self.tool.make_preview(pos)),
            _ => None,
        };
    }

    pub fn drawables(&self) -> &[Drawable] {
        self.log.drawables()
    }

    pub fn log(&self) -> &CommandLog {
        &self.log
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn is_drawing(&self) -> bool {
        self.pointer == PointerState::Drawing
    }

    pub fn can_undo(&self) -> bool {
        self.log.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.log.can_redo()
    }

    pub fn tool(&self) -> &ToolState {
        &self.tool
    }

    pub fn palette(&self) -> &StickerPalette {
        &self.palette
    }
}
