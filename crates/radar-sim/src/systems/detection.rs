//! Detection evaluation: whether the sweep line is close enough to a ping
//! to light it up this frame.
//!
//! Pure functions of two angles. Nothing here is stored on the ping.

use std::f64::consts::{PI, TAU};

use radar_core::constants::DETECTION_THRESHOLD;

/// Wrap an angle into `[0, 2π)`.
pub fn normalize_angle(angle: f64) -> f64 {
    angle.rem_euclid(TAU)
}

/// Shortest angular separation between two bearings, in `[0, π]`.
/// Handles the wrap at `0 / 2π`.
pub fn circular_distance(a: f64, b: f64) -> f64 {
    let d = (normalize_angle(a) - normalize_angle(b)).abs();
    d.min(TAU - d).clamp(0.0, PI)
}

/// Detection with the default threshold of 0.2 rad.
pub fn is_detected(ping_angle: f64, sweep_angle: f64) -> bool {
    is_detected_within(ping_angle, sweep_angle, DETECTION_THRESHOLD)
}

/// True iff the sweep is strictly within `threshold` of the ping.
pub fn is_detected_within(ping_angle: f64, sweep_angle: f64, threshold: f64) -> bool {
    circular_distance(sweep_angle, ping_angle) < threshold
}
