use log::{debug, info, warn};
use std::time::Instant;

use crate::controllers::animation::engine_state::EngineState;
use crate::controllers::animation::errors::DriverError;
use crate::controllers::animation::ports::frame_sink::FrameSink;
use crate::core::actions::cancellation::CancelToken;
use crate::core::actions::compose_frame::compose_frame::compose_frame;
use crate::core::actions::compose_frame::ports::colour_map::ColourMap;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::fractals::evaluator::Evaluator;
use crate::core::util::plane_mapper::PlaneMapper;
use crate::storage::frame_cache::errors::FrameCacheError;
use crate::storage::frame_cache::playback::FramePlayback;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    Recording,
    Replaying,
}

enum Source {
    Recording { sink: Option<Box<dyn FrameSink>> },
    Replaying { playback: FramePlayback },
}

/// Advances the zoom animation one frame per [`tick`](Self::tick).
///
/// While recording, every tick contracts the viewport, composes a frame and
/// hands it to the optional sink. While replaying, every tick loads the next
/// stored frame and the viewport is left alone. The driver does no pacing of
/// its own; the host decides when to tick.
pub struct AnimationDriver {
    state: EngineState,
    evaluator: Evaluator,
    colour_map: Box<dyn ColourMap + Send + Sync>,
    source: Source,
    composed: Option<FrameBuffer>,
    frames_composed: u64,
    frames_recorded: u64,
}

impl AnimationDriver {
    pub fn recording(state: EngineState, sink: Option<Box<dyn FrameSink>>) -> Result<Self, DriverError> {
        Self::new(state, Source::Recording { sink })
    }

    pub fn replaying(state: EngineState, mut playback: FramePlayback) -> Result<Self, DriverError> {
        playback.set_expected_raster(state.raster);
        Self::new(state, Source::Replaying { playback })
    }

    fn new(state: EngineState, source: Source) -> Result<Self, DriverError> {
        state.check_aspect()?;
        let evaluator = state.evaluator()?;
        let colour_map = state.colour_map();

        info!(
            "Animation driver ready: {} with {}, {}x{}, cap {}",
            state.mode.family,
            colour_map.display_name(),
            state.raster.width(),
            state.raster.height(),
            state.max_iterations
        );

        Ok(Self {
            state,
            evaluator,
            colour_map,
            source,
            composed: None,
            frames_composed: 0,
            frames_recorded: 0,
        })
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.source {
            Source::Recording { .. } => Phase::Recording,
            Source::Replaying { .. } => Phase::Replaying,
        }
    }

    #[must_use]
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// The frame to present, if any has been produced yet.
    ///
    /// After switching to replay the last composed frame stays current until
    /// the first replay tick.
    #[must_use]
    pub fn current_frame(&self) -> Option<&FrameBuffer> {
        match &self.source {
            Source::Replaying { playback } => playback.current().or(self.composed.as_ref()),
            Source::Recording { .. } => self.composed.as_ref(),
        }
    }

    #[must_use]
    pub fn frames_composed(&self) -> u64 {
        self.frames_composed
    }

    /// Frames accepted by the sink since the driver was built.
    #[must_use]
    pub fn frames_recorded(&self) -> u64 {
        self.frames_recorded
    }

    #[must_use]
    pub fn is_caching(&self) -> bool {
        matches!(self.source, Source::Recording { sink: Some(_) })
    }

    pub fn tick(&mut self) -> Result<&FrameBuffer, DriverError> {
        match &mut self.source {
            Source::Recording { sink } => {
                self.state.viewport.zoom_step()?;

                let start = Instant::now();
                let mapper = PlaneMapper::new(&self.state.viewport, self.state.raster)?;
                let frame = compose_frame(&mapper, &self.evaluator, &self.colour_map, self.state.alpha);
                self.frames_composed += 1;

                debug!(
                    "Composed frame {} in {:?}, viewport width {:e}",
                    self.frames_composed,
                    start.elapsed(),
                    self.state.viewport.width()
                );

                let written = sink.as_mut().map(|sink| sink.write_frame(&frame));
                let frame: &FrameBuffer = self.composed.insert(frame);

                match written {
                    Some(Err(e)) => Err(DriverError::CacheWrite(e)),
                    Some(Ok(_)) => {
                        self.frames_recorded += 1;
                        Ok(frame)
                    }
                    None => Ok(frame),
                }
            }
            Source::Replaying { playback } => playback.advance().map_err(|e| match e {
                FrameCacheError::RasterMismatch {
                    width,
                    height,
                    actual_width,
                    actual_height,
                    ..
                } => DriverError::RasterMismatch {
                    width,
                    height,
                    actual_width,
                    actual_height,
                },
                e => DriverError::CacheRead(e),
            }),
        }
    }

    /// Flushes and detaches the sink, returning how many frames it wrote.
    /// Later recording ticks compose without caching.
    pub fn finish_recording(&mut self) -> Result<u64, DriverError> {
        let Source::Recording { sink } = &mut self.source else {
            return Ok(0);
        };

        match sink.take() {
            Some(sink) => sink.finish().map_err(DriverError::CacheWrite),
            None => Ok(0),
        }
    }

    /// Keeps recording but stops handing frames to the sink.
    pub fn disable_cache(&mut self) {
        match self.finish_recording() {
            Ok(written) => info!("Frame cache disabled after {} frames", written),
            Err(e) => warn!("Frame cache disabled: {}", e),
        }
    }

    /// Switches to replay. Any active sink is flushed first; a flush failure
    /// is returned but the switch still happens.
    pub fn start_replay(&mut self, mut playback: FramePlayback) -> Result<(), DriverError> {
        let flushed = self.finish_recording();
        playback.set_expected_raster(self.state.raster);

        info!("Replaying {} recorded frames", playback.len());
        self.source = Source::Replaying { playback };

        flushed.map(|_| ())
    }

    /// Resumes composing from the current viewport.
    pub fn start_recording(&mut self, sink: Option<Box<dyn FrameSink>>) {
        if let Source::Replaying { playback } = &self.source {
            if let Some(frame) = playback.current() {
                self.composed = Some(frame.clone());
            }
        }

        info!(
            "Recording from viewport width {:e}{}",
            self.state.viewport.width(),
            if sink.is_some() { " with caching" } else { "" }
        );
        self.source = Source::Recording { sink };
    }

    /// Ticks up to `max_ticks` times, handing each frame to `on_frame`.
    ///
    /// `cancel` is checked before every tick and never during one, so the
    /// last frame passed to `on_frame` is always complete. Returns the number
    /// of ticks performed.
    pub fn run<C, F>(&mut self, max_ticks: u64, cancel: &C, mut on_frame: F) -> Result<u64, DriverError>
    where
        C: CancelToken + ?Sized,
        F: FnMut(u64, &FrameBuffer),
    {
        for tick in 0..max_ticks {
            if cancel.is_cancelled() {
                info!("Animation stopped after {} ticks", tick);
                return Ok(tick);
            }

            let frame = self.tick()?;
            on_frame(tick, frame);
        }

        Ok(max_ticks)
    }
}

impl Drop for AnimationDriver {
    fn drop(&mut self) {
        if let Err(e) = self.finish_recording() {
            warn!("Frame cache flush failed on shutdown: {}", e);
        }
    }
}
