//! Simulation constants and tuning parameters.
//!
//! Every tunable of the radar lives here. None of them are externally
//! configurable; only the RNG seed is chosen at construction time.

/// Nominal display refresh rate (Hz) used by the frame loop.
pub const FRAME_RATE: u32 = 60;

/// Milliseconds per frame at the nominal refresh rate.
pub const FRAME_INTERVAL_MS: f64 = 1000.0 / FRAME_RATE as f64;

// --- Surface ---

/// Width and height of the drawing surface in logical pixels.
pub const CANVAS_SIZE: u32 = 400;

/// Gap between the outermost grid circle and the surface edge (pixels).
pub const RADIUS_MARGIN: f32 = 20.0;

// --- Sweep ---

/// Sweep advance per tick (radians). Applied per tick, not per millisecond.
pub const ROTATION_SPEED: f64 = 0.01;

/// Angular width of the gradient wedge trailing the sweep line (radians).
pub const SWEEP_TRAIL_WIDTH: f64 = 0.3;

/// Half-width of the detection window around the sweep line (radians, ~11°).
pub const DETECTION_THRESHOLD: f64 = 0.2;

// --- Spawning ---

/// Lower bound of the randomized inter-spawn delay (ms, inclusive).
pub const SPAWN_INTERVAL_MIN_MS: f64 = 2000.0;

/// Upper bound of the randomized inter-spawn delay (ms, exclusive).
pub const SPAWN_INTERVAL_MAX_MS: f64 = 5000.0;

// --- Ping bounds ---

/// Ping radial position as a fraction of the radius, lower bound (inclusive).
pub const PING_DISTANCE_MIN: f64 = 0.3;

/// Ping radial position as a fraction of the radius, upper bound (exclusive).
pub const PING_DISTANCE_MAX: f64 = 0.8;

/// Ping peak opacity multiplier, lower bound (inclusive).
pub const PING_INTENSITY_MIN: f64 = 0.5;

/// Ping peak opacity multiplier, upper bound (exclusive).
pub const PING_INTENSITY_MAX: f64 = 1.0;

/// Ping lifetime lower bound (ms, inclusive).
pub const PING_MAX_AGE_MIN_MS: f64 = 3000.0;

/// Ping lifetime upper bound (ms, exclusive).
pub const PING_MAX_AGE_MAX_MS: f64 = 5000.0;

// --- Display ---

/// Alpha of the black fill laid over each frame to produce the fading trail.
pub const TRAIL_FADE_ALPHA: f32 = 0.1;

/// Number of concentric range rings.
pub const GRID_RING_COUNT: u32 = 4;

/// Number of radial spokes.
pub const GRID_SPOKE_COUNT: u32 = 8;

/// Alpha of the range rings.
pub const GRID_RING_ALPHA: f32 = 0.2;

/// Alpha of the spokes.
pub const GRID_SPOKE_ALPHA: f32 = 0.15;

/// Stroke width of the sweep line (pixels).
pub const SWEEP_LINE_WIDTH: f32 = 2.0;

/// Alpha of the wedge gradient at the center.
pub const SWEEP_WEDGE_ALPHA: f32 = 0.3;

/// Pulse period divisor: `pulse = sin(now / PULSE_PERIOD_MS) * AMPLITUDE + BASE`.
pub const PULSE_PERIOD_MS: f64 = 300.0;

/// Pulse swing around the base brightness.
pub const PULSE_AMPLITUDE: f64 = 0.3;

/// Pulse base brightness.
pub const PULSE_BASE: f64 = 0.7;

/// Dot radius for an undetected ping (pixels).
pub const PING_DOT_RADIUS: f32 = 8.0;

/// Dot radius while the sweep is over the ping (pixels).
pub const PING_DOT_RADIUS_DETECTED: f32 = 12.0;

/// Glow radius for an undetected ping (pixels).
pub const PING_GLOW_RADIUS: f32 = 20.0;

/// Glow radius while detected (pixels).
pub const PING_GLOW_RADIUS_DETECTED: f32 = 30.0;

/// Gap between the detection ring and the dot edge (pixels).
pub const DETECTION_RING_OFFSET: f32 = 5.0;

/// Stroke width of the detection ring (pixels).
pub const DETECTION_RING_WIDTH: f32 = 2.0;

/// Connector line dash pattern: on, off (pixels).
pub const CONNECTOR_DASH: [f32; 2] = [5.0, 5.0];

/// Connector alpha as a fraction of ping opacity.
pub const CONNECTOR_ALPHA_FACTOR: f64 = 0.3;

/// Glow center alpha as a fraction of ping opacity.
pub const GLOW_ALPHA_FACTOR: f64 = 0.6;

/// Detection ring alpha as a fraction of ping opacity.
pub const RING_ALPHA_FACTOR: f64 = 0.8;

/// Phosphor green used for every radar element.
pub const RADAR_GREEN: [u8; 3] = [0, 255, 100];
