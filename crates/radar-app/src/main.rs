use anyhow::Result;
use clap::Parser;

use radar_app::cli::{self, Cli};

fn main() -> Result<()> {
    init_tracing();
    cli::run(Cli::parse())
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
