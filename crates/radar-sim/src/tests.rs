//! Tests for the simulation engine: determinism, spawn timing, ping
//! lifecycle and per-frame detection.

use std::collections::HashMap;
use std::f64::consts::TAU;

use rand::rngs::mock::StepRng;

use radar_core::constants::{FRAME_INTERVAL_MS, ROTATION_SPEED};
use radar_core::events::RadarEvent;
use radar_core::types::{PingId, PingParams};

use crate::engine::{SimConfig, SimulationEngine};

fn run_frames(engine: &mut SimulationEngine, frames: usize) -> Vec<radar_core::state::RadarSnapshot> {
    (0..frames)
        .map(|i| engine.tick(i as f64 * FRAME_INTERVAL_MS))
        .collect()
}

fn spawn_times(snapshots: &[radar_core::state::RadarSnapshot]) -> Vec<f64> {
    snapshots
        .iter()
        .filter(|s| {
            s.events
                .iter()
                .any(|e| matches!(e, RadarEvent::PingSpawned { .. }))
        })
        .map(|s| s.time.now_ms)
        .collect()
}

// ---- Determinism ----

#[test]
fn test_determinism_same_seed() {
    let mut engine_a = SimulationEngine::new(SimConfig { seed: 12345 });
    let mut engine_b = SimulationEngine::new(SimConfig { seed: 12345 });

    for i in 0..3000 {
        let now = i as f64 * FRAME_INTERVAL_MS;
        let json_a = serde_json::to_string(&engine_a.tick(now)).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick(now)).unwrap();
        assert_eq!(json_a, json_b, "Snapshots diverged with same seed");
    }
}

#[test]
fn test_determinism_different_seeds() {
    let mut engine_a = SimulationEngine::new(SimConfig { seed: 111 });
    let mut engine_b = SimulationEngine::new(SimConfig { seed: 222 });

    let mut diverged = false;
    for i in 0..3000 {
        let now = i as f64 * FRAME_INTERVAL_MS;
        let json_a = serde_json::to_string(&engine_a.tick(now)).unwrap();
        let json_b = serde_json::to_string(&engine_b.tick(now)).unwrap();
        if json_a != json_b {
            diverged = true;
            break;
        }
    }
    assert!(diverged, "Different seeds should produce divergent output");
}

// ---- Clock ----

#[test]
fn test_first_tick_has_zero_delta_and_no_aging() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let id = engine.inject_ping(PingParams {
        angle: 1.0,
        distance: 0.5,
        intensity: 0.9,
        max_age: 4000.0,
    });

    // A large absolute timestamp on the first frame must not age anything.
    let snap = engine.tick(987_654.0);
    assert_eq!(snap.time.delta_ms, 0.0);
    assert_eq!(snap.time.tick, 0);
    let ping = snap.pings.iter().find(|p| p.id == id).unwrap();
    assert_eq!(ping.age, 0.0);
}

// ---- Spawning ----

#[test]
fn test_first_spawn_waits_for_interval() {
    let mut engine = SimulationEngine::new(SimConfig { seed: 5 });
    let snapshots = run_frames(&mut engine, 60 * 6);
    let times = spawn_times(&snapshots);

    assert!(!times.is_empty(), "Expected a spawn within 6 seconds");
    assert!(
        times[0] >= 2000.0 && times[0] < 5000.0 + FRAME_INTERVAL_MS,
        "First spawn at {}ms",
        times[0]
    );
}

#[test]
fn test_spawn_gap_bounds() {
    for seed in [1, 2, 3, 4] {
        let mut engine = SimulationEngine::new(SimConfig { seed });
        let snapshots = run_frames(&mut engine, 60 * 120);
        let times = spawn_times(&snapshots);
        assert!(times.len() >= 20, "seed {seed}: only {} spawns", times.len());

        for pair in times.windows(2) {
            let gap = pair[1] - pair[0];
            assert!(gap >= 2000.0, "seed {seed}: gap {gap}ms too short");
            assert!(
                gap < 5000.0 + FRAME_INTERVAL_MS,
                "seed {seed}: gap {gap}ms too long"
            );
        }
    }
}

#[test]
fn test_one_spawn_per_tick_after_stall() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    engine.tick(0.0);
    let snap = engine.tick(120_000.0);
    let spawned = snap
        .events
        .iter()
        .filter(|e| matches!(e, RadarEvent::PingSpawned { .. }))
        .count();
    assert_eq!(spawned, 1);
    assert_eq!(snap.active_count, 1);
}

#[test]
fn test_spawned_pings_within_bounds() {
    let mut engine = SimulationEngine::new(SimConfig { seed: 77 });
    let snapshots = run_frames(&mut engine, 60 * 300);

    let mut seen = 0;
    for snap in &snapshots {
        for event in &snap.events {
            if let RadarEvent::PingSpawned { id, .. } = event {
                let ping = snap.pings.iter().find(|p| p.id == *id).unwrap();
                assert_eq!(ping.age, 0.0, "Spawned ping should render at age 0");
                assert!((0.0..TAU).contains(&ping.angle));
                assert!((0.3..0.8).contains(&ping.distance));
                assert!((0.5..1.0).contains(&ping.intensity));
                assert!((3000.0..5000.0).contains(&ping.max_age));
                seen += 1;
            }
        }
    }
    assert!(seen > 50, "Expected many spawns, saw {seen}");
}

#[test]
fn test_minimum_draws_with_fixed_generator() {
    // An all-zero generator always draws the lower bound.
    let mut engine = SimulationEngine::with_rng(StepRng::new(0, 0));
    engine.tick(0.0);
    assert_eq!(engine.spawn_timer().next_interval, 2000.0);

    assert_eq!(engine.tick(1999.0).active_count, 0);
    let snap = engine.tick(2000.0);
    assert_eq!(snap.active_count, 1);

    let ping = engine.pings()[0];
    assert_eq!(ping.angle, 0.0);
    assert_eq!(ping.distance, 0.3);
    assert_eq!(ping.intensity, 0.5);
    assert_eq!(ping.max_age, 3000.0);
    assert_eq!(engine.spawn_timer().last_spawn_time, 2000.0);
}

// ---- Ping lifecycle ----

#[test]
fn test_ages_monotonic_and_expired_never_return() {
    let mut engine = SimulationEngine::new(SimConfig { seed: 9 });
    let mut last_age: HashMap<PingId, f64> = HashMap::new();
    let mut expired: Vec<PingId> = Vec::new();

    for i in 0..(60 * 90) {
        let snap = engine.tick(i as f64 * FRAME_INTERVAL_MS);

        for ping in &snap.pings {
            assert!(ping.age < ping.max_age, "Expired ping rendered: {ping:?}");
            assert!(!expired.contains(&ping.id), "Ping {} reappeared", ping.id);
            if let Some(&prev) = last_age.get(&ping.id) {
                assert!(ping.age >= prev, "Age went backwards for {}", ping.id);
                assert!((ping.age - (prev + snap.time.delta_ms)).abs() < 1e-6);
            }
            last_age.insert(ping.id, ping.age);
        }

        for event in &snap.events {
            if let RadarEvent::PingExpired { id, age } = event {
                assert!(*age >= last_age[id]);
                expired.push(*id);
            }
        }
    }
    assert!(!expired.is_empty());
}

/// Ping born at t=0 with a 3s life: still visible at 2999ms, gone at 3000ms.
#[test]
fn test_end_to_end_expiry() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let id = engine.inject_ping(PingParams {
        angle: 2.0,
        distance: 0.6,
        intensity: 0.8,
        max_age: 3000.0,
    });

    let snap = engine.tick(0.0);
    assert_eq!(snap.active_count, 1);

    let snap = engine.tick(2999.0);
    let ping = snap.pings.iter().find(|p| p.id == id).expect("alive at 2999ms");
    assert!(ping.opacity > 0.0);

    let snap = engine.tick(3000.0);
    assert!(snap.pings.iter().all(|p| p.id != id), "gone at 3000ms");
    assert!(snap
        .events
        .iter()
        .any(|e| matches!(e, RadarEvent::PingExpired { id: expired_id, .. } if *expired_id == id)));
}

#[test]
fn test_opacity_in_snapshot_follows_age() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let id = engine.inject_ping(PingParams {
        angle: 2.0,
        distance: 0.6,
        intensity: 0.8,
        max_age: 4000.0,
    });
    engine.tick(0.0);
    let snap = engine.tick(2000.0);
    let ping = snap.pings.iter().find(|p| p.id == id).unwrap();
    assert!((ping.opacity - 0.4).abs() < 1e-12, "opacity {}", ping.opacity);
}

// ---- Sweep + detection ----

#[test]
fn test_sweep_advances_per_tick_and_stays_normalized() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    assert_eq!(engine.tick(0.0).sweep_angle, 0.0);
    let snap = engine.tick(16.0);
    assert!((snap.sweep_angle - ROTATION_SPEED).abs() < 1e-12);

    let mut now = 16.0;
    for _ in 0..100_000 {
        now += 16.0;
        engine.update(now);
    }
    let angle = engine.sweep().angle;
    assert!((0.0..TAU).contains(&angle), "angle {angle}");
    let expected = (100_001.0 * ROTATION_SPEED).rem_euclid(TAU);
    assert!((angle - expected).abs() < 1e-6, "angle {angle}, expected {expected}");
}

#[test]
fn test_detection_tracks_the_sweep() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    let id = engine.inject_ping(PingParams {
        angle: 0.105,
        distance: 0.5,
        intensity: 0.9,
        max_age: 4900.0,
    });

    let mut detected_frames = Vec::new();
    for i in 0..60 {
        let snap = engine.tick(i as f64);
        let ping = snap.pings.iter().find(|p| p.id == id).unwrap();
        if ping.detected {
            detected_frames.push(i);
        }
    }

    // Sweep at 0.01 rad/tick is within 0.2 rad of 0.105 from frame 0 up to frame 30.
    assert_eq!(detected_frames.first(), Some(&0));
    assert_eq!(detected_frames.last(), Some(&30));
    assert_eq!(detected_frames.len(), 31);
}

#[test]
fn test_update_does_not_accumulate_events() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    for i in 0..(60 * 60) {
        engine.update(i as f64 * FRAME_INTERVAL_MS);
    }
    let snap = engine.tick(60.0 * 1000.0 + 1.0);
    assert!(snap.events.len() <= 4, "events: {:?}", snap.events);
}

#[test]
fn test_snapshot_is_read_only() {
    let mut engine = SimulationEngine::new(SimConfig::default());
    for i in 0..400 {
        engine.tick(i as f64 * FRAME_INTERVAL_MS);
    }
    let a = engine.snapshot();
    let b = engine.snapshot();
    assert_eq!(a, b);
    assert_eq!(a.active_count, engine.active_count());
    assert!(a.events.is_empty());
}
