//! Snapshot system: builds the read-only `RadarSnapshot` for one frame.
//!
//! This system never modifies simulation state. Detection is evaluated
//! here, per ping per frame, against the sweep angle of the frame.

use radar_core::events::RadarEvent;
use radar_core::state::{PingView, RadarSnapshot};
use radar_core::types::{Ping, SimTime, SweepState};

use crate::store::PingStore;
use crate::systems::detection::{is_detected, normalize_angle};

/// Build a complete snapshot from the current simulation state.
pub fn build_snapshot(
    time: &SimTime,
    sweep: &SweepState,
    store: &PingStore,
    events: Vec<RadarEvent>,
) -> RadarSnapshot {
    let sweep_angle = normalize_angle(sweep.angle);

    RadarSnapshot {
        time: *time,
        sweep_angle,
        pings: store.iter().map(|p| build_ping(p, sweep_angle)).collect(),
        active_count: store.len(),
        events,
    }
}

fn build_ping(ping: &Ping, sweep_angle: f64) -> PingView {
    PingView {
        id: ping.id,
        angle: ping.angle,
        distance: ping.distance,
        intensity: ping.intensity,
        age: ping.age,
        max_age: ping.max_age,
        opacity: ping.opacity(),
        detected: is_detected(ping.angle, sweep_angle),
    }
}
