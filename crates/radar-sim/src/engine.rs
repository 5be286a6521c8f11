//! Simulation engine: the single owner of the radar state.
//!
//! `SimulationEngine` owns the sweep, the spawn timer, the ping store and
//! the random source, runs the per-tick systems, and produces
//! `RadarSnapshot`s. Completely headless, enabling deterministic testing.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use radar_core::events::RadarEvent;
use radar_core::state::RadarSnapshot;
use radar_core::types::{Ping, SimTime, SpawnTimer, SweepState};

use crate::clock::FrameClock;
use crate::store::PingStore;
use crate::systems;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone, Copy)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed and same tick times = same simulation.
    pub seed: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self { seed: 42 }
    }
}

/// The simulation engine. Generic over the random source so tests can
/// inject a fixed or scripted generator.
pub struct SimulationEngine<R = ChaCha8Rng> {
    time: SimTime,
    frame_clock: FrameClock,
    sweep: SweepState,
    spawn_timer: SpawnTimer,
    store: PingStore,
    rng: R,
    expired_buffer: Vec<Ping>,
    events: Vec<RadarEvent>,
}

impl SimulationEngine<ChaCha8Rng> {
    /// Create a new engine seeded from the config.
    pub fn new(config: SimConfig) -> Self {
        debug!(seed = config.seed, "simulation engine created");
        Self::with_rng(ChaCha8Rng::seed_from_u64(config.seed))
    }
}

impl<R: Rng> SimulationEngine<R> {
    /// Create a new engine drawing from the given generator.
    pub fn with_rng(rng: R) -> Self {
        Self {
            time: SimTime::default(),
            frame_clock: FrameClock::default(),
            sweep: SweepState::default(),
            spawn_timer: SpawnTimer::default(),
            store: PingStore::new(),
            rng,
            expired_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Advance the simulation to `now` (ms) and return the frame snapshot.
    pub fn tick(&mut self, now: f64) -> RadarSnapshot {
        self.update(now);
        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(&self.time, &self.sweep, &self.store, events)
    }

    /// Advance the simulation to `now` (ms) without building a snapshot.
    ///
    /// Order within a tick: rotate the sweep past the previous frame, maybe
    /// spawn, then age and evict. A ping spawned here is visible at age 0
    /// in this tick's snapshot.
    pub fn update(&mut self, now: f64) {
        self.events.clear();

        let first_frame = self.frame_clock.is_first();
        let delta = self.frame_clock.tick(now);

        if first_frame {
            self.spawn_timer = systems::spawner::arm(&mut self.rng, now);
        } else {
            self.sweep.advance();
            self.time.tick += 1;
        }
        self.time.now_ms = now;
        self.time.delta_ms = delta;

        // 1. Spawning
        systems::spawner::run(
            &mut self.store,
            &mut self.spawn_timer,
            &mut self.rng,
            now,
            &mut self.events,
        );
        // 2. Aging + eviction
        systems::aging::run(
            &mut self.store,
            delta,
            &mut self.expired_buffer,
            &mut self.events,
        );
    }

    /// Snapshot of the current state without advancing it. Carries no events.
    pub fn snapshot(&self) -> RadarSnapshot {
        systems::snapshot::build_snapshot(&self.time, &self.sweep, &self.store, Vec::new())
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn sweep(&self) -> SweepState {
        self.sweep
    }

    pub fn spawn_timer(&self) -> SpawnTimer {
        self.spawn_timer
    }

    /// Active pings in insertion order.
    pub fn pings(&self) -> &[Ping] {
        self.store.pings()
    }

    pub fn active_count(&self) -> usize {
        self.store.len()
    }

    /// Insert a ping directly, bypassing the spawn timer (for tests).
    #[cfg(test)]
    pub fn inject_ping(
        &mut self,
        params: radar_core::types::PingParams,
    ) -> radar_core::types::PingId {
        self.store.insert(params)
    }
}
