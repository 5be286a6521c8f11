//! PNG export of a rasterized frame.

use std::io::Cursor;
use std::path::Path;

use image::{ColorType, ImageFormat, RgbaImage};
use tracing::debug;

use crate::error::RenderError;
use crate::raster::PixelSurface;

/// Write the surface to `path` as a PNG, creating parent directories.
pub fn save_png(surface: &PixelSurface, path: &Path) -> Result<(), RenderError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    image::save_buffer_with_format(
        path,
        &surface.to_rgba8(),
        surface.width(),
        surface.height(),
        ColorType::Rgba8,
        ImageFormat::Png,
    )?;
    debug!(path = %path.display(), "frame written");
    Ok(())
}

/// Encode the surface as PNG bytes.
pub fn encode_png(surface: &PixelSurface) -> Result<Vec<u8>, RenderError> {
    let (width, height) = (surface.width(), surface.height());
    let image = RgbaImage::from_raw(width, height, surface.to_rgba8())
        .ok_or(RenderError::BufferSize { width, height })?;

    let mut bytes = Cursor::new(Vec::new());
    image.write_to(&mut bytes, ImageFormat::Png)?;
    Ok(bytes.into_inner())
}
