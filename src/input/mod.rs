use egui::{PointerButton, Pos2, Response};

mod controller;

pub use controller::SketchController;

/// Pointer signal in canvas-space coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// A button went down on the canvas.
    Down { pos: Pos2, button: PointerButton },
    /// The pointer moved, inside the canvas or mid-drag outside it.
    Moved { pos: Pos2 },
    /// The primary button was released, anywhere.
    Up,
    /// The pointer left the canvas.
    Left,
}

/// Adapts egui pointer state on the canvas response into `PointerEvent`s.
/// Hover is tracked across frames so leaving the canvas produces a single
/// `Left` event.
#[derive(Debug, Default)]
pub struct CanvasInput {
    hovered: bool,
}

impl CanvasInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Events for this frame, in the order they should be applied.
    pub fn events(&mut self, response: &Response) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        let rect = response.rect;
        let to_canvas = |pos: Pos2| (pos - rect.min).to_pos2();

        if response.drag_started_by(PointerButton::Primary) {
            if let Some(pos) = response.interact_pointer_pos() {
                events.push(PointerEvent::Down {
                    pos: to_canvas(pos),
                    button: PointerButton::Primary,
                });
            }
        } else if response.dragged_by(PointerButton::Primary) {
            if let Some(pos) = response.interact_pointer_pos() {
                events.push(PointerEvent::Moved {
                    pos: to_canvas(pos),
                });
            }
        }

        if response.drag_stopped_by(PointerButton::Primary) {
            events.push(PointerEvent::Up);
        }

        let hovering = response.hovered();
        if hovering && !response.dragged() {
            if let Some(pos) = response.hover_pos() {
                events.push(PointerEvent::Moved {
                    pos: to_canvas(pos),
                });
            }
        }
        if self.hovered && !hovering && !response.dragged() {
            events.push(PointerEvent::Left);
        }
        self.hovered = hovering;

        events
    }
}
