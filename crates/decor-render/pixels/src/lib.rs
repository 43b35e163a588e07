//! Rasterizes a [`RecordedRenderScene`](decor_ui::RecordedRenderScene) into
//! an RGBA8 frame buffer, such as the one handed out by `pixels`.

mod error;
mod font;
mod raster;

pub use error::RenderError;
pub use font::{installed_font, load_font, TEXT_SIZE};
pub use raster::{draw_scene, FrameTarget};
