use egui::Pos2;

use crate::element::Drawable;

/// Ordered log of committed drawables plus the redo buffer.
///
/// The log itself is the undo stack: undo moves its tail onto the redo
/// stack, redo moves the top back. Undo/redo never reorder surviving
/// entries; replay order is always commit order.
#[derive(Debug, Default)]
pub struct CommandLog {
    committed: Vec<Drawable>,
    undone: Vec<Drawable>,
}

impl CommandLog {
    /// Creates a new empty command log
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a freshly created drawable. Starting a new action invalidates
    /// all redo history.
    pub fn commit(&mut self, drawable: Drawable) {
        self.committed.push(drawable);
        self.undone.clear();
    }

    /// Move the most recent drawable onto the redo stack. Returns false on
    /// an empty log, which is a defined no-op.
    pub fn undo(&mut self) -> bool {
        match self.committed.pop() {
            Some(drawable) => {
                self.undone.push(drawable);
                true
            }
            None => false,
        }
    }

    /// Move the most recently undone drawable back onto the log. Returns
    /// false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        match self.undone.pop() {
            Some(drawable) => {
                self.committed.push(drawable);
                true
            }
            None => false,
        }
    }

    /// Drop everything, including redo history. A clear cannot be undone.
    pub fn clear(&mut self) -> bool {
        let changed = !self.committed.is_empty() || !self.undone.is_empty();
        self.committed.clear();
        self.undone.clear();
        changed
    }

    /// Returns true if there are drawables that can be undone
    pub fn can_undo(&self) -> bool {
        !self.committed.is_empty()
    }

    /// Returns true if there are drawables that can be redone
    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    /// Committed drawables in replay (commit) order.
    pub fn drawables(&self) -> &[Drawable] {
        &self.committed
    }

    /// Drawables removed by undo, the most recently undone last.
    pub fn redo_stack(&self) -> &[Drawable] {
        &self.undone
    }

    /// Extend the stroke opened by the latest pointer-down. Ignored when the
    /// tail of the log is not a stroke, which only happens on malformed
    /// event sequences.
    pub(crate) fn extend_open_stroke(&mut self, point: Pos2) {
        if let Some(Drawable::Stroke(stroke)) = self.committed.last_mut() {
            stroke.push(point);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{LineStroke, StickerPlacement};
    use egui::Color32;

    #[test]
    fn extend_appends_to_stroke_tail() {
        let mut log = CommandLog::new();
        log.commit(Drawable::Stroke(LineStroke::new(
            vec![Pos2::ZERO],
            2.0,
            Color32::RED,
        )));
        log.extend_open_stroke(Pos2::new(3.0, 4.0));

        let Drawable::Stroke(stroke) = &log.drawables()[0] else {
            panic!("expected a stroke");
        };
        assert_eq!(stroke.points(), &[Pos2::ZERO, Pos2::new(3.0, 4.0)]);
    }

    #[test]
    fn extend_ignores_non_stroke_tail() {
        let mut log = CommandLog::new();
        log.commit(Drawable::Sticker(StickerPlacement::new(
            "🌟",
            Pos2::ZERO,
            0.0,
        )));
        log.extend_open_stroke(Pos2::new(1.0, 1.0));

        let Drawable::Sticker(sticker) = &log.drawables()[0] else {
            panic!("expected a sticker");
        };
        assert_eq!(sticker.pos(), Pos2::ZERO);
    }
}
