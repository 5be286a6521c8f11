//! Command-line surface of the `radar` binary.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use radar_core::constants::{CANVAS_SIZE, FRAME_RATE};
use radar_render::{save_png, PixelSurface};
use radar_sim::{Clock, ManualClock, SimConfig, SystemClock};

use crate::frame_loop::FrameLoop;
use crate::session::RadarSession;

#[derive(Parser, Debug)]
#[command(name = "radar", version, about = "Radar sweep visualization")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render frames on a simulated clock and write them as PNG files.
    Render(RenderArgs),
    /// Run the frame loop against the wall clock and log what is tracked.
    Live(LiveArgs),
}

#[derive(clap::Args, Debug, Clone)]
pub struct RenderArgs {
    /// Seed for the ping generator.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
    /// Number of frames to simulate.
    #[arg(long, default_value_t = 600, value_parser = clap::value_parser!(u32).range(1..))]
    pub frames: u32,
    /// Simulated frames per second.
    #[arg(long, default_value_t = FRAME_RATE, value_parser = clap::value_parser!(u32).range(1..))]
    pub fps: u32,
    /// Side of the square canvas in pixels.
    #[arg(long, default_value_t = CANVAS_SIZE)]
    pub size: u32,
    /// Directory the PNG frames are written to.
    #[arg(long, default_value = "frames")]
    pub out: PathBuf,
    /// Save every Nth frame as well as the last; only the last when omitted.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    pub every: Option<u32>,
    /// Write the final snapshot as pretty JSON to this file.
    #[arg(long)]
    pub snapshot_json: Option<PathBuf>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LiveArgs {
    /// Seed for the ping generator.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,
    /// How long to run, in seconds.
    #[arg(long, default_value_t = 10)]
    pub secs: u64,
    /// Frames per second.
    #[arg(long, default_value_t = FRAME_RATE, value_parser = clap::value_parser!(u32).range(1..))]
    pub fps: u32,
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Command::Render(args) => render(&args),
        Command::Live(args) => live(&args),
    }
}

/// Offline rendering: a manual clock steps exactly one frame interval per tick.
pub fn render(args: &RenderArgs) -> Result<()> {
    let surface = PixelSurface::new(args.size, args.size)
        .with_context(|| format!("failed to allocate a {0}x{0} surface", args.size))?;
    let mut session = RadarSession::mount(Ok(surface), SimConfig { seed: args.seed });
    let clock = ManualClock::new(0.0);
    let interval_ms = 1000.0 / f64::from(args.fps);

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("failed to create {}", args.out.display()))?;

    let mut saved = 0;
    for frame in 0..args.frames {
        session.tick(clock.now_ms());

        let last = frame + 1 == args.frames;
        let wanted = last || args.every.is_some_and(|every| frame % every == 0);
        if let Some(surface) = session.surface().filter(|_| wanted) {
            let path = args.out.join(format!("frame_{frame:05}.png"));
            save_png(surface, &path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            saved += 1;
        }

        clock.advance(interval_ms);
    }

    if let (Some(path), Some(snapshot)) = (&args.snapshot_json, session.snapshot()) {
        let json = serde_json::to_string_pretty(snapshot)?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write {}", path.display()))?;
    }

    info!(
        frames = args.frames,
        saved,
        label = %session.tracking_label(),
        "render finished"
    );
    session.stop();
    Ok(())
}

/// Live mode: the frame loop runs on its own thread until the duration ends.
pub fn live(args: &LiveArgs) -> Result<()> {
    let session = RadarSession::mount(
        PixelSurface::new(CANVAS_SIZE, CANVAS_SIZE),
        SimConfig { seed: args.seed },
    );
    let interval = Duration::from_secs_f64(1.0 / f64::from(args.fps));
    let mut handle = FrameLoop::spawn(session, SystemClock::new(), interval)
        .context("failed to start the frame loop")?;

    let deadline = Instant::now() + Duration::from_secs(args.secs);
    let mut last_count = None;
    while Instant::now() < deadline && handle.is_running() {
        if let Some(snapshot) = handle.latest_snapshot() {
            if last_count != Some(snapshot.active_count) {
                last_count = Some(snapshot.active_count);
                info!(time_ms = snapshot.time.now_ms, "{}", snapshot.tracking_label());
            }
        }
        std::thread::sleep(Duration::from_millis(50));
    }

    if let Some(session) = handle.stop() {
        info!(frames = session.frames_drawn(), "live run finished");
    }
    Ok(())
}
