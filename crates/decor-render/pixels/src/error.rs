use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("frame buffer holds {actual} bytes; a {width}x{height} RGBA frame needs {expected}")]
    FrameSize {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("{path} is not a usable TrueType font")]
    Font { path: PathBuf },
    #[error("failed to read font file")]
    Io(#[from] std::io::Error),
}
