//! Ping spawning system: creates at most one ping per tick once the
//! randomized spawn interval has elapsed.

use std::f64::consts::TAU;

use rand::Rng;
use tracing::debug;

use radar_core::constants::*;
use radar_core::events::RadarEvent;
use radar_core::types::{PingId, PingParams, SpawnTimer};

use crate::store::PingStore;

/// Draw the randomized parameters of a new ping.
pub fn draw_params<R: Rng + ?Sized>(rng: &mut R) -> PingParams {
    PingParams {
        angle: rng.gen_range(0.0..TAU),
        distance: rng.gen_range(PING_DISTANCE_MIN..PING_DISTANCE_MAX),
        intensity: rng.gen_range(PING_INTENSITY_MIN..PING_INTENSITY_MAX),
        max_age: rng.gen_range(PING_MAX_AGE_MIN_MS..PING_MAX_AGE_MAX_MS),
    }
}

/// Draw the delay before the next spawn becomes eligible.
pub fn draw_interval<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    rng.gen_range(SPAWN_INTERVAL_MIN_MS..SPAWN_INTERVAL_MAX_MS)
}

/// Start a fresh interval measured from `now`.
pub fn arm<R: Rng + ?Sized>(rng: &mut R, now: f64) -> SpawnTimer {
    SpawnTimer {
        last_spawn_time: now,
        next_interval: draw_interval(rng),
    }
}

/// Spawn one ping if the timer is due, then re-arm the timer from `now`.
///
/// No catch-up: however long the gap since the last tick, a single call
/// creates at most one ping.
pub fn run<R: Rng + ?Sized>(
    store: &mut PingStore,
    timer: &mut SpawnTimer,
    rng: &mut R,
    now: f64,
    events: &mut Vec<RadarEvent>,
) -> Option<PingId> {
    if !timer.is_due(now) {
        return None;
    }

    let params = draw_params(rng);
    let id = store.insert(params);
    *timer = arm(rng, now);

    debug!(
        %id,
        angle = params.angle,
        distance = params.distance,
        max_age = params.max_age,
        next_interval = timer.next_interval,
        "ping spawned"
    );
    events.push(RadarEvent::PingSpawned {
        id,
        angle: params.angle,
        distance: params.distance,
    });

    Some(id)
}
