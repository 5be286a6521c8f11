pub mod command;
pub mod error;
pub mod export;
pub mod raster;
pub mod renderer;
pub mod surface;

pub use command::{DrawCommand, Paint, Rgba, Stroke};
pub use error::RenderError;
pub use export::{encode_png, save_png};
pub use raster::PixelSurface;
pub use renderer::{pulse, RadarLayout, Renderer};
pub use surface::{DrawList, Surface};
