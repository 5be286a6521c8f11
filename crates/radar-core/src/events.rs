//! Events emitted by the simulation each tick.

use serde::{Deserialize, Serialize};

use crate::types::PingId;

/// Ping lifecycle events, drained into the snapshot of the tick that produced them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RadarEvent {
    /// A new ping was created this tick.
    PingSpawned {
        id: PingId,
        angle: f64,
        distance: f64,
    },
    /// A ping reached its lifetime and was evicted.
    PingExpired { id: PingId, age: f64 },
}
