use egui::{PointerButton, Pos2};
use sketchpad::element::{Drawable, Preview};
use sketchpad::tool::{THICK_WIDTH, THIN_WIDTH};
use sketchpad::{PointerEvent, SketchController};

fn down(x: f32, y: f32) -> PointerEvent {
    PointerEvent::Down {
        pos: Pos2::new(x, y),
        button: PointerButton::Primary,
    }
}

fn moved(x: f32, y: f32) -> PointerEvent {
    PointerEvent::Moved {
        pos: Pos2::new(x, y),
    }
}

fn stroke_points(controller: &SketchController, index: usize) -> usize {
    match &controller.drawables()[index] {
        Drawable::Stroke(stroke) => stroke.points().len(),
        Drawable::Sticker(_) => panic!("expected a stroke"),
    }
}

#[test]
fn marker_drag_commits_one_growing_stroke() {
    let mut controller = SketchController::new();

    controller.handle_pointer(down(0.0, 0.0));
    assert!(controller.is_drawing());
    assert_eq!(controller.drawables().len(), 1);
    assert_eq!(stroke_points(&controller, 0), 1);

    controller.handle_pointer(moved(5.0, 5.0));
    controller.handle_pointer(moved(10.0, 10.0));
    assert_eq!(stroke_points(&controller, 0), 3);

    controller.handle_pointer(PointerEvent::Up);
    assert!(!controller.is_drawing());

    // Idle moves no longer extend the frozen stroke.
    controller.handle_pointer(moved(50.0, 50.0));
    assert_eq!(stroke_points(&controller, 0), 3);
    assert_eq!(controller.drawables().len(), 1);
}

#[test]
fn sticker_placement_has_no_drag_phase() {
    let mut controller = SketchController::new();
    controller.select_sticker("🎈");

    controller.handle_pointer(down(30.0, 40.0));
    assert!(!controller.is_drawing());
    assert_eq!(controller.drawables().len(), 1);

    let Drawable::Sticker(sticker) = &controller.drawables()[0] else {
        panic!("expected a sticker");
    };
    assert_eq!(sticker.glyph(), "🎈");
    assert_eq!(sticker.pos(), Pos2::new(30.0, 40.0));

    // Dragging after placement draws nothing new.
    controller.handle_pointer(moved(60.0, 60.0));
    controller.handle_pointer(PointerEvent::Up);
    assert_eq!(controller.drawables().len(), 1);
}

#[test]
fn non_primary_buttons_are_ignored() {
    let mut controller = SketchController::new();
    let changed = controller.handle_pointer(PointerEvent::Down {
        pos: Pos2::new(10.0, 10.0),
        button: PointerButton::Secondary,
    });
    assert!(!changed);
    assert!(!controller.is_drawing());
    assert!(controller.drawables().is_empty());
}

#[test]
fn malformed_event_sequences_are_no_ops() {
    let mut controller = SketchController::new();
    // Up without a preceding down, then a stray leave.
    assert!(!controller.handle_pointer(PointerEvent::Up));
    assert!(!controller.handle_pointer(PointerEvent::Left));
    assert!(controller.drawables().is_empty());
}

#[test]
fn idle_move_builds_preview_and_leave_clears_it() {
    let mut controller = SketchController::new();

    controller.handle_pointer(moved(20.0, 20.0));
    assert!(matches!(
        controller.preview(),
        Some(Preview::Marker { .. })
    ));

    controller.handle_pointer(PointerEvent::Left);
    assert!(controller.preview().is_none());
}

#[test]
fn tool_switch_updates_preview_without_pointer_move() {
    let mut controller = SketchController::new();
    controller.handle_pointer(moved(20.0, 20.0));
    assert!(matches!(
        controller.preview(),
        Some(Preview::Marker { .. })
    ));

    controller.select_sticker("🌟");
    assert!(matches!(
        controller.preview(),
        Some(Preview::Sticker { .. })
    ));

    controller.select_marker(THICK_WIDTH);
    match controller.preview() {
        Some(Preview::Marker { width, .. }) => assert_eq!(*width, THICK_WIDTH),
        other => panic!("expected marker preview, got {other:?}"),
    }
}

#[test]
fn sliders_only_touch_the_matching_tool_kind() {
    let mut controller = SketchController::new();

    // Marker active: rotation is silently ignored, hue applies.
    controller.set_rotation(90.0);
    assert_eq!(controller.tool().rotation(), None);
    controller.set_hue(120.0);
    assert_eq!(controller.tool().hue(), Some(120.0));

    // Sticker active: hue is silently ignored, the glyph stays put.
    controller.select_sticker("🎈");
    controller.set_hue(200.0);
    assert_eq!(controller.tool().hue(), None);
    assert_eq!(controller.tool().sticker_glyph(), Some("🎈"));
    controller.set_rotation(45.0);
    assert_eq!(controller.tool().rotation(), Some(45.0));

    // Width presets replace the tool but keep the same-kind hue.
    controller.select_marker(THIN_WIDTH);
    controller.set_hue(240.0);
    controller.select_marker(THICK_WIDTH);
    assert_eq!(controller.tool().hue(), Some(240.0));
    assert_eq!(controller.tool().marker_width(), Some(THICK_WIDTH));
}

#[test]
fn custom_sticker_input_is_trimmed_and_validated() {
    let mut controller = SketchController::new();
    let before = controller.palette().glyphs().len();

    assert!(controller.add_custom_sticker("  🦄  "));
    assert_eq!(controller.palette().glyphs().len(), before + 1);
    assert!(controller
        .palette()
        .glyphs()
        .contains(&"🦄".to_string()));

    // Whitespace-only input leaves the palette unchanged.
    assert!(!controller.add_custom_sticker("   "));
    assert!(!controller.add_custom_sticker(""));
    assert_eq!(controller.palette().glyphs().len(), before + 1);
}

#[test]
fn commit_after_undo_discards_redo_history() {
    let mut controller = SketchController::new();

    controller.handle_pointer(down(0.0, 0.0));
    controller.handle_pointer(moved(5.0, 5.0));
    controller.handle_pointer(PointerEvent::Up);
    assert!(controller.undo());
    assert!(controller.can_redo());

    // A fresh stroke invalidates the redo stack.
    controller.handle_pointer(down(1.0, 1.0));
    controller.handle_pointer(PointerEvent::Up);
    assert!(!controller.can_redo());
    assert!(!controller.redo());
}

#[test]
fn log_mutations_discard_the_preview() {
    let mut controller = SketchController::new();

    controller.handle_pointer(down(0.0, 0.0));
    controller.handle_pointer(moved(5.0, 5.0));
    controller.handle_pointer(PointerEvent::Up);

    controller.handle_pointer(moved(20.0, 20.0));
    assert!(controller.preview().is_some());
    assert!(controller.undo());
    assert!(controller.preview().is_none());

    controller.handle_pointer(moved(21.0, 21.0));
    assert!(controller.preview().is_some());
    assert!(controller.redo());
    assert!(controller.preview().is_none());

    controller.handle_pointer(moved(22.0, 22.0));
    assert!(controller.preview().is_some());
    assert!(controller.clear());
    assert!(controller.preview().is_none());
}

#[test]
fn empty_undo_redo_leave_state_untouched() {
    let mut controller = SketchController::new();
    controller.handle_pointer(moved(20.0, 20.0));
    assert!(controller.preview().is_some());

    // No-op mutations keep the preview alive.
    assert!(!controller.undo());
    assert!(!controller.redo());
    assert!(controller.preview().is_some());
}
