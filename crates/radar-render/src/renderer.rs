//! Radar renderer: turns a `RadarSnapshot` into draw commands.
//!
//! This is a pure projection of simulation state onto a surface. It never
//! touches the simulation; the only thing it changes is the surface.
//!
//! Layers, back to front: trail fade, range rings, spokes, sweep line,
//! sweep wedge, then each ping (connector, glow, dot, detection ring).

use std::f64::consts::TAU;

use glam::Vec2;

use radar_core::constants::*;
use radar_core::state::{PingView, RadarSnapshot};

use crate::command::{DrawCommand, Paint, Rgba, Stroke};
use crate::surface::Surface;

/// Screen geometry of the radar on a given surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarLayout {
    pub width: f32,
    pub height: f32,
    pub center: Vec2,
    pub radius: f32,
}

impl RadarLayout {
    /// Centered layout with the outer ring `RADIUS_MARGIN` inside the
    /// shorter side. 400x400 gives center (200, 200) and radius 180.
    pub fn for_size(width: u32, height: u32) -> Self {
        let center = Vec2::new(width as f32 / 2.0, height as f32 / 2.0);
        Self {
            width: width as f32,
            height: height as f32,
            center,
            radius: (center.x.min(center.y) - RADIUS_MARGIN).max(0.0),
        }
    }

    /// Point at `angle` and `fraction` of the radius from the center.
    pub fn polar(&self, angle: f64, fraction: f64) -> Vec2 {
        let reach = self.radius * fraction as f32;
        self.center + Vec2::new(angle.cos() as f32, angle.sin() as f32) * reach
    }
}

/// Brightness multiplier oscillating between 0.4 and 1.0 with wall time.
pub fn pulse(now_ms: f64) -> f64 {
    (now_ms / PULSE_PERIOD_MS).sin() * PULSE_AMPLITUDE + PULSE_BASE
}

/// Stateless renderer bound to one layout.
#[derive(Debug, Clone, Copy)]
pub struct Renderer {
    layout: RadarLayout,
}

impl Renderer {
    pub fn new(layout: RadarLayout) -> Self {
        Self { layout }
    }

    /// Renderer laid out for the surface's current size.
    pub fn for_surface<S: Surface + ?Sized>(surface: &S) -> Self {
        let (width, height) = surface.size();
        Self::new(RadarLayout::for_size(width, height))
    }

    pub fn layout(&self) -> RadarLayout {
        self.layout
    }

    /// Draw one frame. The pulse is driven by the snapshot's timestamp.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, snapshot: &RadarSnapshot) {
        self.draw_trail(surface);
        self.draw_grid(surface);
        self.draw_sweep(surface, snapshot.sweep_angle);

        let pulse = pulse(snapshot.time.now_ms);
        for ping in &snapshot.pings {
            self.draw_ping(surface, ping, pulse);
        }
    }

    fn draw_trail<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.draw(&DrawCommand::FillRect {
            origin: Vec2::ZERO,
            size: Vec2::new(self.layout.width, self.layout.height),
            paint: Paint::Solid(Rgba::black(TRAIL_FADE_ALPHA)),
        });
    }

    fn draw_grid<S: Surface + ?Sized>(&self, surface: &mut S) {
        let RadarLayout { center, radius, .. } = self.layout;

        let ring = Stroke::solid(Rgba::green(GRID_RING_ALPHA), 1.0);
        for i in 1..=GRID_RING_COUNT {
            surface.draw(&DrawCommand::StrokeCircle {
                center,
                radius: radius * i as f32 / GRID_RING_COUNT as f32,
                stroke: ring,
            });
        }

        let spoke = Stroke::solid(Rgba::green(GRID_SPOKE_ALPHA), 1.0);
        for i in 0..GRID_SPOKE_COUNT {
            let angle = TAU * i as f64 / GRID_SPOKE_COUNT as f64;
            surface.draw(&DrawCommand::StrokeLine {
                from: center,
                to: self.layout.polar(angle, 1.0),
                stroke: spoke,
            });
        }
    }

    fn draw_sweep<S: Surface + ?Sized>(&self, surface: &mut S, sweep_angle: f64) {
        let RadarLayout { center, radius, .. } = self.layout;
        let tip = self.layout.polar(sweep_angle, 1.0);

        surface.draw(&DrawCommand::StrokeLine {
            from: center,
            to: tip,
            stroke: Stroke::solid(Rgba::green(1.0), SWEEP_LINE_WIDTH),
        });

        surface.draw(&DrawCommand::FillWedge {
            center,
            radius,
            start_angle: (sweep_angle - SWEEP_TRAIL_WIDTH) as f32,
            end_angle: sweep_angle as f32,
            paint: Paint::LinearGradient {
                start: center,
                end: tip,
                from: Rgba::green(SWEEP_WEDGE_ALPHA),
                to: Rgba::green(0.0),
            },
        });
    }

    fn draw_ping<S: Surface + ?Sized>(&self, surface: &mut S, ping: &PingView, pulse: f64) {
        let center = self.layout.center;
        let position = self.layout.polar(ping.angle, ping.distance);
        let opacity = ping.opacity;

        let (dot_radius, glow_radius) = if ping.detected {
            (PING_DOT_RADIUS_DETECTED, PING_GLOW_RADIUS_DETECTED)
        } else {
            (PING_DOT_RADIUS, PING_GLOW_RADIUS)
        };

        surface.draw(&DrawCommand::StrokeLine {
            from: center,
            to: position,
            stroke: Stroke::dashed(
                Rgba::green((opacity * CONNECTOR_ALPHA_FACTOR) as f32),
                1.0,
                CONNECTOR_DASH,
            ),
        });

        surface.draw(&DrawCommand::FillCircle {
            center: position,
            radius: glow_radius,
            paint: Paint::RadialGradient {
                center: position,
                radius: glow_radius,
                inner: Rgba::green((opacity * GLOW_ALPHA_FACTOR * pulse) as f32),
                outer: Rgba::green(0.0),
            },
        });

        surface.draw(&DrawCommand::FillCircle {
            center: position,
            radius: dot_radius,
            paint: Paint::Solid(Rgba::green((opacity * pulse) as f32)),
        });

        if ping.detected {
            surface.draw(&DrawCommand::StrokeCircle {
                center: position,
                radius: dot_radius + DETECTION_RING_OFFSET,
                stroke: Stroke::solid(
                    Rgba::green((opacity * RING_ALPHA_FACTOR) as f32),
                    DETECTION_RING_WIDTH,
                ),
            });
        }
    }
}
