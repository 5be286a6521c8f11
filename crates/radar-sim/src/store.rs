//! Ping store: owns the active pings, ages them and evicts expired ones.
//!
//! Stored in `SimulationEngine`, NOT shared. The renderer only ever sees
//! the snapshot built from it.

use radar_core::types::{Ping, PingId, PingParams};

/// The active set of pings, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct PingStore {
    pings: Vec<Ping>,
    /// Pings before this index existed at the last update. Later ones were
    /// inserted since and start aging on the next update.
    settled: usize,
    next_id: u64,
}

impl PingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a ping at age zero and return its id. Ids come from a counter
    /// and are never reused.
    pub fn insert(&mut self, params: PingParams) -> PingId {
        let id = PingId(self.next_id);
        self.next_id += 1;
        self.pings.push(Ping::new(id, params));
        id
    }

    /// Age every settled ping by `delta_ms`, then evict those whose
    /// `age >= max_age`. Evicted pings are appended to `expired` in
    /// insertion order. Returns the active count.
    ///
    /// Negative deltas are treated as zero.
    pub fn update(&mut self, delta_ms: f64, expired: &mut Vec<Ping>) -> usize {
        let delta = delta_ms.max(0.0);
        for ping in &mut self.pings[..self.settled] {
            ping.age += delta;
        }

        self.pings.retain(|ping| {
            if ping.is_active() {
                true
            } else {
                expired.push(*ping);
                false
            }
        });

        self.settled = self.pings.len();
        self.pings.len()
    }

    pub fn pings(&self) -> &[Ping] {
        &self.pings
    }

    pub fn iter(&self) -> impl Iterator<Item = &Ping> {
        self.pings.iter()
    }

    pub fn get(&self, id: PingId) -> Option<&Ping> {
        self.pings.iter().find(|p| p.id == id)
    }

    pub fn len(&self) -> usize {
        self.pings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pings.is_empty()
    }
}
