//! Simulation engine for the radar sweep.
//!
//! Owns the sweep, spawn timer and ping store, runs the per-tick systems,
//! and produces `RadarSnapshot`s for the renderer.

pub mod clock;
pub mod engine;
pub mod store;
pub mod systems;

pub use clock::{Clock, FrameClock, ManualClock, SystemClock};
pub use engine::{SimConfig, SimulationEngine};
pub use radar_core as core;
pub use store::PingStore;

#[cfg(test)]
mod tests;
