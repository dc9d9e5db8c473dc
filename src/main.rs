use clap::Parser;
use fractal_zoomer::{
    AnimationDriver, BackgroundFrameWriter, DriverError, EngineConfig, EngineState, FrameBuffer,
    FramePlayback, FrameRecorder, FrameSink, NeverCancel, write_ppm,
};
use log::{info, warn};
use std::error::Error;
use std::path::PathBuf;

const SNAPSHOT_PATH: &str = "output/last_frame.ppm";

/// Records a fixed-target fractal zoom into a frame cache, or replays one.
#[derive(Debug, Parser)]
#[command(name = "fractal_zoomer", version, about)]
struct Cli {
    /// JSON engine configuration. Built-in defaults are used when omitted.
    config: Option<PathBuf>,

    /// Replay the frame cache instead of computing new frames.
    #[arg(long)]
    replay: bool,

    /// Number of frames to record, overriding `record_frames`.
    #[arg(long)]
    frames: Option<u64>,

    /// Compose frames without writing them to the cache.
    #[arg(long, conflicts_with = "replay")]
    no_cache: bool,

    /// Write records on the animation thread instead of a background writer.
    #[arg(long, conflicts_with = "replay")]
    sync_writes: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    let state = config.engine_state()?;

    let last_frame = if cli.replay {
        replay(&config, state)?
    } else {
        record(&config, state, &cli)?
    };

    match last_frame {
        Some(frame) => {
            write_ppm(&frame, SNAPSHOT_PATH)?;
            info!("Wrote last frame to {}", SNAPSHOT_PATH);
        }
        None => warn!("No frame was produced"),
    }

    Ok(())
}

fn progress_step(total: u64) -> u64 {
    (total / 10).max(1)
}

fn record(config: &EngineConfig, state: EngineState, cli: &Cli) -> Result<Option<FrameBuffer>, Box<dyn Error>> {
    let total = cli.frames.unwrap_or(config.record_frames);
    let sink: Option<Box<dyn FrameSink>> = if cli.no_cache {
        None
    } else {
        let recorder = FrameRecorder::start(config.frame_cache())?;

        if cli.sync_writes {
            Some(Box::new(recorder))
        } else {
            Some(Box::new(BackgroundFrameWriter::spawn(recorder)))
        }
    };

    let mut driver = AnimationDriver::recording(state, sink)?;
    let step = progress_step(total);
    info!("Recording {} frames into {}", total, config.cache_dir.display());

    while driver.frames_composed() < total {
        let offset = driver.frames_composed();
        let result = driver.run(total - offset, &NeverCancel, |tick, _| {
            let done = offset + tick + 1;

            if done % step == 0 || done == total {
                info!("Recorded {}/{} frames ({}%)", done, total, done * 100 / total);
            }
        });

        match result {
            Ok(_) => {}
            Err(DriverError::CacheWrite(e)) => {
                warn!("Frame {} was not cached: {}", driver.frames_composed(), e);
                driver.disable_cache();
            }
            Err(DriverError::Viewport(e)) => {
                warn!("Stopping after {} frames: {}", driver.frames_composed(), e);
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }

    match driver.finish_recording() {
        Ok(written) if !cli.no_cache => info!("{} frame records written", written),
        Ok(_) => {}
        Err(e) => warn!("Frame cache flush failed: {}", e),
    }

    Ok(driver.current_frame().cloned())
}

fn replay(config: &EngineConfig, state: EngineState) -> Result<Option<FrameBuffer>, Box<dyn Error>> {
    let playback = FramePlayback::open(config.frame_cache())?;
    let total = playback.len() as u64;
    let step = progress_step(total);
    let mut driver = AnimationDriver::replaying(state, playback)?;

    for done in 1..=total {
        match driver.tick() {
            Ok(_) => {}
            Err(DriverError::CacheRead(e)) => warn!("Skipping frame {}: {}", done - 1, e),
            Err(e) => return Err(e.into()),
        }

        if done % step == 0 || done == total {
            info!("Replayed {}/{} frames ({}%)", done, total, done * 100 / total);
        }
    }

    Ok(driver.current_frame().cloned())
}
