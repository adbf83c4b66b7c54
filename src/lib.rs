#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod element;
pub mod input;
pub mod panels;
pub mod render;
pub mod tool;

pub use app::SketchApp;
pub use command::CommandLog;
pub use element::{Drawable, LineStroke, Preview, StickerPlacement};
pub use input::{CanvasInput, PointerEvent, SketchController};
pub use render::{Renderer, Surface, CANVAS_SIZE, EXPORT_SCALE};
pub use tool::{StickerPalette, ToolState};
