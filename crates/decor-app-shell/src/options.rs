use std::path::{Path, PathBuf};

use decor_graphics::Color;
use thiserror::Error;

/// Environment variable holding the initial window size as `WIDTHxHEIGHT`.
pub const SIZE_VAR: &str = "BORDER_DEMO_SIZE";
/// Environment variable holding the path of a TrueType font for glyphs.
pub const FONT_VAR: &str = "BORDER_DEMO_FONT";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid window size {0:?}; expected WIDTHxHEIGHT")]
    InvalidSize(String),
    #[error("font file {} does not exist", .0.display())]
    MissingFont(PathBuf),
}

/// Options used to configure the demo window.
#[derive(Debug, Clone, PartialEq)]
pub struct AppOptions {
    title: String,
    initial_size: (u32, u32),
    background: Color,
    font_path: Option<PathBuf>,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            title: "Border Demo".to_string(),
            initial_size: (800, 600),
            background: Color::WHITE,
            font_path: None,
        }
    }
}

impl AppOptions {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the initial window size in logical pixels.
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.initial_size = (width, height);
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_font_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_path = Some(path.into());
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn initial_size(&self) -> (u32, u32) {
        self.initial_size
    }

    pub fn background(&self) -> Color {
        self.background
    }

    pub fn font_path(&self) -> Option<&Path> {
        self.font_path.as_deref()
    }

    /// Defaults overridden by [`SIZE_VAR`] and [`FONT_VAR`] from the process
    /// environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for [`SIZE_VAR`] and
    /// [`FONT_VAR`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut options = Self::default();
        if let Some(raw) = lookup(SIZE_VAR) {
            let (width, height) = parse_size(&raw)?;
            options = options.with_size(width, height);
        }
        if let Some(raw) = lookup(FONT_VAR).filter(|raw| !raw.trim().is_empty()) {
            let path = PathBuf::from(raw.trim());
            if !path.is_file() {
                return Err(ConfigError::MissingFont(path));
            }
            options = options.with_font_path(path);
        }
        Ok(options)
    }
}

/// Parses `WIDTHxHEIGHT`; both sides must be positive integers.
pub fn parse_size(raw: &str) -> Result<(u32, u32), ConfigError> {
    let invalid = || ConfigError::InvalidSize(raw.to_string());
    let (width, height) = raw.trim().split_once(['x', 'X']).ok_or_else(invalid)?;
    let width: u32 = width.trim().parse().map_err(|_| invalid())?;
    let height: u32 = height.trim().parse().map_err(|_| invalid())?;
    if width == 0 || height == 0 {
        return Err(invalid());
    }
    Ok((width, height))
}

#[cfg(test)]
#[path = "tests/options_tests.rs"]
mod tests;
