//! Radar state snapshot: the complete visible state handed to the renderer
//! and to the embedding page after each tick.

use serde::{Deserialize, Serialize};

use crate::events::RadarEvent;
use crate::types::{PingId, SimTime};

/// Read-only view of the simulation after one tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RadarSnapshot {
    pub time: SimTime,
    /// Sweep angle in effect for this frame (radians, `[0, 2π)`).
    pub sweep_angle: f64,
    /// Active pings in insertion order.
    pub pings: Vec<PingView>,
    pub active_count: usize,
    pub events: Vec<RadarEvent>,
}

impl RadarSnapshot {
    /// Label shown under the radar for this frame.
    pub fn tracking_label(&self) -> String {
        tracking_label(self.active_count)
    }
}

/// One active ping as seen by the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PingView {
    pub id: PingId,
    pub angle: f64,
    pub distance: f64,
    pub intensity: f64,
    pub age: f64,
    pub max_age: f64,
    /// `(1 - age/max_age) * intensity`.
    pub opacity: f64,
    /// Whether the sweep is within the detection window this frame.
    pub detected: bool,
}

/// `"Tracking 1 Wallet"`, `"Tracking 0 Wallets"`, `"Tracking 5 Wallets"`.
pub fn tracking_label(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("Tracking {count} Wallet{plural}")
}
