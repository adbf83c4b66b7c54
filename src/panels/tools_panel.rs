use crate::app::SketchApp;
use crate::tool::{THICK_WIDTH, THIN_WIDTH};

/// Tool selection, sliders, the sticker palette and the action buttons.
pub fn tools_panel(app: &mut SketchApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            ui.horizontal(|ui| {
                let width = app.controller.tool().marker_width();
                if ui
                    .selectable_label(width == Some(THIN_WIDTH), "Thin marker")
                    .clicked()
                {
                    app.controller.select_marker(THIN_WIDTH);
                }
                if ui
                    .selectable_label(width == Some(THICK_WIDTH), "Thick marker")
                    .clicked()
                {
                    app.controller.select_marker(THICK_WIDTH);
                }
            });

            // The hue slider only drives markers; it stays put (and inert)
            // while a sticker is selected.
            let mut hue = app.controller.tool().hue().unwrap_or_default();
            let marker_active = app.controller.tool().hue().is_some();
            if ui
                .add_enabled(
                    marker_active,
                    egui::Slider::new(&mut hue, 0.0..=360.0).text("Hue"),
                )
                .changed()
            {
                app.controller.set_hue(hue);
            }

            ui.separator();

            ui.label("Stickers");
            ui.horizontal_wrapped(|ui| {
                let selected = app
                    .controller
                    .tool()
                    .sticker_glyph()
                    .map(|glyph| glyph.to_owned());
                let glyphs: Vec<String> = app.controller.palette().glyphs().to_vec();
                for glyph in glyphs {
                    let is_selected = selected.as_deref() == Some(glyph.as_str());
                    if ui.selectable_label(is_selected, glyph.as_str()).clicked() {
                        app.controller.select_sticker(glyph);
                    }
                }
            });

            let mut rotation = app.controller.tool().rotation().unwrap_or_default();
            let sticker_active = app.controller.tool().rotation().is_some();
            if ui
                .add_enabled(
                    sticker_active,
                    egui::Slider::new(&mut rotation, 0.0..=360.0).text("Rotation"),
                )
                .changed()
            {
                app.controller.set_rotation(rotation);
            }

            ui.horizontal(|ui| {
                ui.text_edit_singleline(&mut app.custom_sticker);
                if ui.button("Add sticker").clicked()
                    && app.controller.add_custom_sticker(&app.custom_sticker)
                {
                    app.custom_sticker.clear();
                }
            });

            ui.separator();

            ui.horizontal(|ui| {
                if ui.button("Clear").clicked() {
                    app.controller.clear();
                }
                if ui
                    .add_enabled(app.controller.can_undo(), egui::Button::new("Undo"))
                    .clicked()
                {
                    app.controller.undo();
                }
                if ui
                    .add_enabled(app.controller.can_redo(), egui::Button::new("Redo"))
                    .clicked()
                {
                    app.controller.redo();
                }
            });

            if ui.button("Export PNG").clicked() {
                app.export();
            }
        });
}
