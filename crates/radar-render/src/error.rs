//! Error types for the render crate.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    /// No drawing surface could be acquired at this size.
    #[error("drawing surface unavailable: cannot allocate {width}x{height} pixels")]
    SurfaceUnavailable { width: u32, height: u32 },

    #[error("image encoding failed: {0}")]
    Image(#[from] image::ImageError),

    #[error("pixel buffer does not match a {width}x{height} surface")]
    BufferSize { width: u32, height: u32 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
