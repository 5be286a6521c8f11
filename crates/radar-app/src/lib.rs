//! Radar application.
//!
//! Binds the simulation to a drawing surface as a `RadarSession`, runs it
//! on a frame loop thread, and exposes both through the `radar` binary.

pub mod cli;
pub mod frame_loop;
pub mod session;

pub use frame_loop::{FrameLoop, FrameLoopCommand, FrameLoopHandle};
pub use session::RadarSession;

pub use radar_core as core;
