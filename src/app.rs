use crate::input::{CanvasInput, SketchController};
use crate::render::{Renderer, EXPORT_SCALE};

/// File name offered for exported images.
pub const EXPORT_FILE_NAME: &str = "sketchpad.png";

/// Top-level eframe application: owns the controller and the renderer and
/// wires egui input and panel actions into them.
pub struct SketchApp {
    pub(crate) controller: SketchController,
    pub(crate) renderer: Renderer,
    pub(crate) canvas_input: CanvasInput,
    pub(crate) custom_sticker: String,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Restore tool settings and the sticker palette from the previous
        // session; the drawing itself is not persisted.
        let controller = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();

        Self {
            controller,
            renderer: Renderer::new(),
            canvas_input: CanvasInput::new(),
            custom_sticker: String::new(),
        }
    }

    /// Render the log at export resolution and hand the bytes to a save
    /// dialog prefilled with the deterministic artifact name.
    pub(crate) fn export(&self) {
        match self
            .renderer
            .export_png(self.controller.drawables(), EXPORT_SCALE)
        {
            Ok(bytes) => save_png_bytes(bytes),
            Err(err) => log::error!("export failed: {err}"),
        }
    }
}

impl eframe::App for SketchApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.controller);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        crate::panels::tools_panel(self, ctx);
        crate::panels::canvas_panel(self, ctx);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn save_png_bytes(bytes: Vec<u8>) {
    let Some(path) = rfd::FileDialog::new()
        .set_file_name(EXPORT_FILE_NAME)
        .save_file()
    else {
        return;
    };
    if let Err(err) = std::fs::write(&path, &bytes) {
        log::error!("failed to write {}: {err}", path.display());
    }
}

#[cfg(target_arch = "wasm32")]
fn save_png_bytes(bytes: Vec<u8>) {
    wasm_bindgen_futures::spawn_local(async move {
        let Some(handle) = rfd::AsyncFileDialog::new()
            .set_file_name(EXPORT_FILE_NAME)
            .save_file()
            .await
        else {
            return;
        };
        if let Err(err) = handle.write(&bytes).await {
            log::error!("failed to save export: {err}");
        }
    });
}
