//! Time sources and per-frame delta computation.
//!
//! `FrameClock` turns a stream of timestamps into frame deltas. `Clock`
//! abstracts where those timestamps come from so the frame loop can run on
//! wall time while tests drive a `ManualClock`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Source of monotonically increasing timestamps in milliseconds.
pub trait Clock {
    fn now_ms(&self) -> f64;
}

/// Wall clock measured from construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed().as_secs_f64() * 1000.0
    }
}

/// Clock advanced by hand. Clones share the same time, so a test can keep
/// one handle while the frame loop reads another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    millis_bits: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new(start_ms: f64) -> Self {
        Self {
            millis_bits: Arc::new(AtomicU64::new(start_ms.to_bits())),
        }
    }

    pub fn set(&self, now_ms: f64) {
        self.millis_bits.store(now_ms.to_bits(), Ordering::SeqCst);
    }

    pub fn advance(&self, delta_ms: f64) {
        let _ = self
            .millis_bits
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |bits| {
                Some((f64::from_bits(bits) + delta_ms).to_bits())
            });
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> f64 {
        f64::from_bits(self.millis_bits.load(Ordering::SeqCst))
    }
}

/// Tracks the previous frame timestamp and yields the delta for each tick.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameClock {
    last_frame_time: Option<f64>,
}

impl FrameClock {
    /// True until the first call to `tick`.
    pub fn is_first(&self) -> bool {
        self.last_frame_time.is_none()
    }

    /// Record `now` and return the time since the previous frame.
    ///
    /// The first frame has no predecessor and yields 0. A timestamp earlier
    /// than the previous one also yields 0, so ages never run backwards.
    pub fn tick(&mut self, now: f64) -> f64 {
        let delta = match self.last_frame_time {
            Some(last) => (now - last).max(0.0),
            None => 0.0,
        };
        self.last_frame_time = Some(now);
        delta
    }
}
