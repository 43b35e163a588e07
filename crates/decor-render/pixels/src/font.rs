use std::path::Path;

use once_cell::sync::OnceCell;
use rusttype::Font;

use crate::RenderError;

/// Pixel height glyphs are rasterized at. Chosen to sit inside the 20px
/// line box used by layout.
pub const TEXT_SIZE: f32 = 16.0;

static FONT: OnceCell<Font<'static>> = OnceCell::new();

/// Loads the TrueType font at `path` and installs it for text drawing.
///
/// Only the first successful load is kept; later calls return the font that
/// is already installed.
pub fn load_font(path: &Path) -> Result<&'static Font<'static>, RenderError> {
    FONT.get_or_try_init(|| {
        let bytes = std::fs::read(path)?;
        let font = Font::try_from_vec(bytes).ok_or_else(|| RenderError::Font {
            path: path.to_path_buf(),
        })?;
        log::info!("loaded font from {}", path.display());
        Ok(font)
    })
}

pub fn installed_font() -> Option<&'static Font<'static>> {
    FONT.get()
}
