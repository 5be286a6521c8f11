//! Frame loop thread: ticks a `RadarSession` at a fixed interval.
//!
//! The session moves into the thread and comes back out on `stop()`.
//! Commands arrive via an `mpsc` channel. The latest snapshot is kept in
//! shared state for polling from other threads.

use std::io;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tracing::{debug, warn};

use radar_core::state::RadarSnapshot;
use radar_render::Surface;
use radar_sim::Clock;

use crate::session::RadarSession;

/// Commands sent from the handle to the loop thread.
#[derive(Debug)]
pub enum FrameLoopCommand {
    /// Stop ticking and hand the session back.
    Shutdown,
}

/// Spawns frame loops.
pub struct FrameLoop;

impl FrameLoop {
    /// Move `session` onto a new thread and tick it every `interval`,
    /// reading timestamps from `clock`.
    pub fn spawn<S, C>(
        session: RadarSession<S>,
        clock: C,
        interval: Duration,
    ) -> io::Result<FrameLoopHandle<S>>
    where
        S: Surface + Send + 'static,
        C: Clock + Send + 'static,
    {
        let (command_tx, command_rx) = mpsc::channel::<FrameLoopCommand>();
        let latest_snapshot = Arc::new(Mutex::new(None));
        let shared = Arc::clone(&latest_snapshot);

        let thread = std::thread::Builder::new()
            .name("radar-frame-loop".into())
            .spawn(move || run_frame_loop(session, clock, interval, command_rx, &shared))?;

        Ok(FrameLoopHandle {
            command_tx,
            thread: Some(thread),
            latest_snapshot,
        })
    }
}

/// Owner's side of a running frame loop. Dropping it stops the loop.
pub struct FrameLoopHandle<S> {
    command_tx: mpsc::Sender<FrameLoopCommand>,
    thread: Option<JoinHandle<RadarSession<S>>>,
    latest_snapshot: Arc<Mutex<Option<RadarSnapshot>>>,
}

impl<S> FrameLoopHandle<S> {
    /// Stop the loop and wait for the thread to exit.
    ///
    /// Returns the stopped session the first time; later calls return `None`.
    pub fn stop(&mut self) -> Option<RadarSession<S>> {
        let thread = self.thread.take()?;
        let _ = self.command_tx.send(FrameLoopCommand::Shutdown);
        match thread.join() {
            Ok(session) => Some(session),
            Err(_) => {
                warn!("frame loop thread panicked");
                None
            }
        }
    }

    pub fn is_running(&self) -> bool {
        self.thread.as_ref().is_some_and(|t| !t.is_finished())
    }

    /// Most recent snapshot published by the loop.
    pub fn latest_snapshot(&self) -> Option<RadarSnapshot> {
        self.latest_snapshot
            .lock()
            .ok()
            .and_then(|lock| lock.clone())
    }
}

impl<S> Drop for FrameLoopHandle<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// The loop. Runs until Shutdown, channel disconnect, or the session stops.
fn run_frame_loop<S: Surface, C: Clock>(
    mut session: RadarSession<S>,
    clock: C,
    interval: Duration,
    command_rx: mpsc::Receiver<FrameLoopCommand>,
    latest_snapshot: &Mutex<Option<RadarSnapshot>>,
) -> RadarSession<S> {
    let mut next_frame_time = Instant::now();

    while session.is_running() {
        // 1. Update + draw
        if let Some(snapshot) = session.tick(clock.now_ms()) {
            if let Ok(mut lock) = latest_snapshot.lock() {
                *lock = Some(snapshot.clone());
            }
        }

        // 2. Schedule the next frame, resetting when too far behind
        next_frame_time += interval;
        let now = Instant::now();
        if now > next_frame_time && now - next_frame_time > interval * 2 {
            next_frame_time = now;
        }

        // 3. Wait for the next frame or a command
        match command_rx.recv_timeout(next_frame_time.saturating_duration_since(now)) {
            Ok(FrameLoopCommand::Shutdown) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => {}
        }
    }

    debug!(frames = session.frames_drawn(), "frame loop exiting");
    session.stop();
    session
}
