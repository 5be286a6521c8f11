//! Session lifecycle scenarios driven by a manual clock.

use radar_app::RadarSession;
use radar_core::constants::FRAME_INTERVAL_MS;
use radar_core::events::RadarEvent;
use radar_render::{DrawList, PixelSurface, RenderError};
use radar_sim::{Clock, ManualClock, SimConfig};

fn run_until_ping(session: &mut RadarSession<PixelSurface>, clock: &ManualClock) {
    for _ in 0..(60 * 10) {
        session.tick(clock.now_ms());
        clock.advance(FRAME_INTERVAL_MS);
        if session.active_ping_count() > 0 {
            return;
        }
    }
    panic!("no ping within 10 seconds");
}

#[test]
fn test_label_follows_active_count() {
    let clock = ManualClock::new(0.0);
    let mut session = RadarSession::mount(PixelSurface::new(400, 400), SimConfig::default());
    assert_eq!(session.tracking_label(), "Tracking 0 Wallets");

    run_until_ping(&mut session, &clock);
    assert_eq!(session.active_ping_count(), 1);
    assert_eq!(session.tracking_label(), "Tracking 1 Wallet");

    let snapshot = session.snapshot().unwrap();
    assert_eq!(snapshot.tracking_label(), session.tracking_label());
    assert_eq!(snapshot.pings.len(), snapshot.active_count);
}

#[test]
fn test_stop_halts_everything_while_clock_advances() {
    let clock = ManualClock::new(0.0);
    let mut session = RadarSession::mount(PixelSurface::new(200, 200), SimConfig { seed: 3 });
    run_until_ping(&mut session, &clock);

    let frames = session.frames_drawn();
    let count = session.active_ping_count();
    let before = session.snapshot().cloned().unwrap();
    let pixels = session.surface().unwrap().to_rgba8();

    session.stop();
    for _ in 0..(60 * 30) {
        clock.advance(FRAME_INTERVAL_MS);
        assert!(session.tick(clock.now_ms()).is_none());
    }

    // Nothing spawned, aged, expired or drawn after stop.
    assert_eq!(session.frames_drawn(), frames);
    assert_eq!(session.active_ping_count(), count);
    assert_eq!(session.snapshot(), Some(&before));
    assert_eq!(session.surface().unwrap().to_rgba8(), pixels);

    session.stop();
    assert!(!session.is_running());
}

#[test]
fn test_unavailable_surface_gives_inert_session() {
    let failed: Result<DrawList, RenderError> =
        Err(RenderError::SurfaceUnavailable { width: 0, height: 0 });
    let mut session = RadarSession::mount(failed, SimConfig::default());

    assert!(session.is_inert());
    for i in 0..1000 {
        assert!(session.tick(i as f64 * FRAME_INTERVAL_MS).is_none());
    }
    assert_eq!(session.active_ping_count(), 0);
    assert_eq!(session.tracking_label(), "Tracking 0 Wallets");
    assert!(session.into_surface().is_none());

    // Stopping an inert session is harmless.
    let mut session = RadarSession::mount(PixelSurface::new(0, 10), SimConfig::default());
    session.stop();
    session.stop();
}

#[test]
fn test_spawn_and_expiry_events_reach_the_session() {
    let clock = ManualClock::new(0.0);
    let mut session = RadarSession::mount(Ok(DrawList::new(400, 400)), SimConfig { seed: 21 });

    let mut spawned = 0;
    let mut expired = 0;
    for _ in 0..(60 * 60) {
        let snapshot = session.tick(clock.now_ms()).unwrap();
        for event in &snapshot.events {
            match event {
                RadarEvent::PingSpawned { .. } => spawned += 1,
                RadarEvent::PingExpired { .. } => expired += 1,
            }
        }
        clock.advance(FRAME_INTERVAL_MS);
    }

    assert!(spawned >= 10, "spawned {spawned}");
    assert!(expired + 3 >= spawned, "spawned {spawned}, expired {expired}");
    assert_eq!(spawned - expired, session.active_ping_count());
}
