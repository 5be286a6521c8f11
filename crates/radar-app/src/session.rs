//! Radar session: one simulation bound to one drawing surface.
//!
//! The session is the embeddable unit. Whoever owns the frame schedule
//! calls `tick(now)` once per frame; `stop()` ends the session for good.

use tracing::{info, warn};

use radar_core::state::{tracking_label, RadarSnapshot};
use radar_render::{RenderError, Renderer, Surface};
use radar_sim::{SimConfig, SimulationEngine};

/// A mounted surface together with the renderer laid out for it.
struct Mounted<S> {
    surface: S,
    renderer: Renderer,
}

/// Simulation, renderer and surface for one visualization.
pub struct RadarSession<S> {
    engine: SimulationEngine,
    mounted: Option<Mounted<S>>,
    running: bool,
    frames_drawn: u64,
    last_snapshot: Option<RadarSnapshot>,
}

impl<S: Surface> RadarSession<S> {
    /// Start a session on the surface the caller managed to acquire.
    ///
    /// If acquisition failed the session is inert: it never ticks, spawns
    /// or draws, and `tick` always returns `None`.
    pub fn mount(surface: Result<S, RenderError>, config: SimConfig) -> Self {
        let engine = SimulationEngine::new(config);
        match surface {
            Ok(surface) => {
                let (width, height) = surface.size();
                info!(width, height, seed = config.seed, "radar session started");
                Self {
                    engine,
                    mounted: Some(Mounted {
                        renderer: Renderer::for_surface(&surface),
                        surface,
                    }),
                    running: true,
                    frames_drawn: 0,
                    last_snapshot: None,
                }
            }
            Err(err) => {
                warn!(error = %err, "radar surface unavailable, visualization disabled");
                Self {
                    engine,
                    mounted: None,
                    running: false,
                    frames_drawn: 0,
                    last_snapshot: None,
                }
            }
        }
    }

    /// Run one frame at `now_ms`: update the simulation, then draw it.
    pub fn tick(&mut self, now_ms: f64) -> Option<&RadarSnapshot> {
        if !self.running {
            return None;
        }
        let mounted = self.mounted.as_mut()?;

        let snapshot = self.engine.tick(now_ms);
        mounted.renderer.draw(&mut mounted.surface, &snapshot);
        self.frames_drawn += 1;

        self.last_snapshot = Some(snapshot);
        self.last_snapshot.as_ref()
    }
}

impl<S> RadarSession<S> {
    /// Halt the session. Later ticks do nothing. Safe to call repeatedly.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            info!(frames = self.frames_drawn, "radar session stopped");
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// True when no surface could be acquired at mount.
    pub fn is_inert(&self) -> bool {
        self.mounted.is_none()
    }

    pub fn active_ping_count(&self) -> usize {
        self.engine.active_count()
    }

    /// `"Tracking N Wallet(s)"` for the current active count.
    pub fn tracking_label(&self) -> String {
        tracking_label(self.active_ping_count())
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    /// Snapshot of the most recent frame.
    pub fn snapshot(&self) -> Option<&RadarSnapshot> {
        self.last_snapshot.as_ref()
    }

    pub fn surface(&self) -> Option<&S> {
        self.mounted.as_ref().map(|m| &m.surface)
    }

    pub fn into_surface(self) -> Option<S> {
        self.mounted.map(|m| m.surface)
    }
}
