//! Aging system: advances ping ages and evicts expired pings.
//! Uses a pre-allocated buffer to avoid per-tick allocation.

use tracing::debug;

use radar_core::events::RadarEvent;
use radar_core::types::Ping;

use crate::store::PingStore;

/// Age the store by `delta_ms`, evict expired pings and report each
/// eviction as an event. Returns the active count.
pub fn run(
    store: &mut PingStore,
    delta_ms: f64,
    expired_buffer: &mut Vec<Ping>,
    events: &mut Vec<RadarEvent>,
) -> usize {
    expired_buffer.clear();

    let active = store.update(delta_ms, expired_buffer);

    for ping in expired_buffer.drain(..) {
        debug!(id = %ping.id, age = ping.age, max_age = ping.max_age, "ping expired");
        events.push(RadarEvent::PingExpired {
            id: ping.id,
            age: ping.age,
        });
    }

    active
}
