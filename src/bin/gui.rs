use clap::Parser;
use fractal_zoomer::{EngineConfig, GuiOptions};
use std::path::PathBuf;

/// Shows the zoom animation in a window.
#[derive(Debug, Parser)]
#[command(name = "gui", version, about)]
struct Cli {
    /// JSON engine configuration. Built-in defaults are used when omitted.
    config: Option<PathBuf>,

    /// Play back the frame cache instead of computing frames.
    #[arg(long)]
    replay: bool,

    /// Write computed frames to the frame cache.
    #[arg(long, conflicts_with = "replay")]
    record: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };

    fractal_zoomer::run_gui(
        config,
        GuiOptions {
            replay: cli.replay,
            record: cli.record,
        },
    )
}
