use serde::{Deserialize, Serialize};

/// Starting sticker set offered by the tool panel.
pub const DEFAULT_STICKERS: [&str; 3] = ["😀", "🌟", "🎈"];

/// Sticker glyphs available for selection: the defaults plus whatever the
/// user added.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StickerPalette {
    glyphs: Vec<String>,
}

impl Default for StickerPalette {
    fn default() -> Self {
        Self {
            glyphs: DEFAULT_STICKERS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl StickerPalette {
    pub fn glyphs(&self) -> &[String] {
        &self.glyphs
    }

    /// Add a custom sticker and return its normalized glyph. The input is
    /// trimmed; empty or whitespace-only input is rejected and leaves the
    /// palette unchanged. Duplicates are not added twice.
    pub fn add_custom(&mut self, text: &str) -> Option<String> {
        let glyph = text.trim();
        if glyph.is_empty() {
            log::debug!("rejected empty custom sticker");
            return None;
        }
        let glyph = glyph.to_owned();
        if !self.glyphs.contains(&glyph) {
            self.glyphs.push(glyph.clone());
        }
        Some(glyph)
    }
}
