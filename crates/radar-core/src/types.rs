//! Fundamental simulation types.

use std::f64::consts::TAU;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{ROTATION_SPEED, SPAWN_INTERVAL_MIN_MS};

/// Identifier of a ping, unique for the lifetime of the store that issued it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PingId(pub u64);

impl fmt::Display for PingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Randomized parameters of a ping, drawn by the spawner before the store
/// assigns it an id.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PingParams {
    /// Direction from center (radians, `[0, 2π)`).
    pub angle: f64,
    /// Radial position as a fraction of the radius (`[0.3, 0.8)`).
    pub distance: f64,
    /// Peak opacity multiplier (`[0.5, 1.0)`).
    pub intensity: f64,
    /// Total lifetime (ms, `[3000, 5000)`).
    pub max_age: f64,
}

/// A transient detected-signal marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ping {
    pub id: PingId,
    pub angle: f64,
    pub distance: f64,
    pub intensity: f64,
    /// Elapsed time since creation (ms). Never decreases.
    pub age: f64,
    pub max_age: f64,
}

impl Ping {
    /// A freshly spawned ping at age zero.
    pub fn new(id: PingId, params: PingParams) -> Self {
        Self {
            id,
            angle: params.angle,
            distance: params.distance,
            intensity: params.intensity,
            age: 0.0,
            max_age: params.max_age,
        }
    }

    /// A ping is active while `age < max_age`.
    pub fn is_active(&self) -> bool {
        self.age < self.max_age
    }

    /// Fraction of the lifetime already consumed, clamped to `[0, 1]`.
    pub fn age_ratio(&self) -> f64 {
        if self.max_age <= 0.0 {
            return 1.0;
        }
        (self.age / self.max_age).clamp(0.0, 1.0)
    }

    /// Linear fade: `(1 - age/max_age) * intensity`, reaching 0 at expiry.
    pub fn opacity(&self) -> f64 {
        (1.0 - self.age_ratio()) * self.intensity
    }
}

/// The single rotating sweep pointer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SweepState {
    /// Current angle (radians), kept in `[0, 2π)`.
    pub angle: f64,
}

impl SweepState {
    /// Advance by one tick's worth of rotation.
    pub fn advance(&mut self) {
        self.angle = (self.angle + ROTATION_SPEED).rem_euclid(TAU);
    }
}

/// Scheduling state for ping creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnTimer {
    /// Timestamp of the last spawn, or of the first tick (ms).
    pub last_spawn_time: f64,
    /// Delay before the next spawn becomes eligible (ms, `[2000, 5000)`).
    pub next_interval: f64,
}

impl Default for SpawnTimer {
    fn default() -> Self {
        Self {
            last_spawn_time: 0.0,
            next_interval: SPAWN_INTERVAL_MIN_MS,
        }
    }
}

impl SpawnTimer {
    /// Whether enough time has elapsed since the last spawn.
    pub fn is_due(&self, now: f64) -> bool {
        now - self.last_spawn_time >= self.next_interval
    }
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Index of the current tick (0 for the first).
    pub tick: u64,
    /// Timestamp of the current tick (ms).
    pub now_ms: f64,
    /// Time elapsed since the previous tick (ms). Zero on the first tick.
    pub delta_ms: f64,
}
