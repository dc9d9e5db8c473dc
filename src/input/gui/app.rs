//! Main GUI application loop.

use log::{error, info, warn};
use pixels::{Pixels, SurfaceTexture};
use std::error::Error;
use winit::{
    dpi::LogicalSize,
    event::{ElementState, Event, KeyEvent, WindowEvent},
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::{Window, WindowBuilder},
};

use crate::adapters::pixel_format::copy_argb_to_rgba;
use crate::config::EngineConfig;
use crate::controllers::animation::{AnimationDriver, DriverError, FrameSink, Phase};
use crate::storage::frame_cache::playback::FramePlayback;
use crate::storage::frame_cache::recorder::{BackgroundFrameWriter, FrameRecorder};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GuiOptions {
    /// Start by replaying the frame cache.
    pub replay: bool,
    /// Write composed frames to the frame cache.
    pub record: bool,
}

struct App {
    pixels: Pixels<'static>,
    driver: AnimationDriver,
    config: EngineConfig,
    paused: bool,
}

impl App {
    /// Advances the animation unless paused, then draws whatever is current.
    fn render(&mut self) -> Result<(), pixels::Error> {
        if !self.paused {
            self.tick();
        }

        if let Some(frame) = self.driver.current_frame() {
            if let Err(e) = copy_argb_to_rgba(frame, self.pixels.frame_mut()) {
                warn!("Frame not drawn: {}", e);
            }
        }

        self.pixels.render()
    }

    fn tick(&mut self) {
        match self.driver.tick() {
            Ok(_) => {}
            Err(DriverError::CacheWrite(e)) => {
                warn!("Frame not cached: {}", e);
                self.driver.disable_cache();
            }
            Err(DriverError::Viewport(e)) => {
                info!("Zoom finished: {}", e);
                self.paused = true;
            }
            Err(e) => warn!("Tick failed: {}", e),
        }
    }

    fn toggle_replay(&mut self) {
        match self.driver.phase() {
            Phase::Recording => {
                if let Err(e) = self.driver.finish_recording() {
                    warn!("Frame cache flush failed: {}", e);
                }

                match FramePlayback::open(self.config.frame_cache()) {
                    Ok(playback) => {
                        if let Err(e) = self.driver.start_replay(playback) {
                            warn!("{}", e);
                        }
                    }
                    Err(e) => warn!("Cannot replay: {}", e),
                }
            }
            Phase::Replaying => self.driver.start_recording(None),
        }

        self.paused = false;
    }

    fn handle_key(&mut self, event: &KeyEvent) -> bool {
        if event.state != ElementState::Pressed || event.repeat {
            return false;
        }

        match &event.logical_key {
            Key::Named(NamedKey::Escape) => return true,
            Key::Named(NamedKey::Space) => self.paused = !self.paused,
            Key::Character(c) if c.as_str().eq_ignore_ascii_case("r") => self.toggle_replay(),
            _ => {}
        }

        false
    }

    fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            if let Err(e) = self.pixels.resize_surface(width, height) {
                warn!("Failed to resize surface: {}", e);
            }
        }
    }
}

fn build_driver(config: &EngineConfig, options: GuiOptions) -> Result<AnimationDriver, Box<dyn Error>> {
    let state = config.engine_state()?;

    if options.replay {
        return Ok(AnimationDriver::replaying(state, FramePlayback::open(config.frame_cache())?)?);
    }

    let sink: Option<Box<dyn FrameSink>> = if options.record {
        let recorder = FrameRecorder::start(config.frame_cache())?;
        Some(Box::new(BackgroundFrameWriter::spawn(recorder)))
    } else {
        None
    };

    Ok(AnimationDriver::recording(state, sink)?)
}

/// Opens a window sized to the configured raster and animates until it is
/// closed. Space pauses, `R` toggles between recording and replay, Escape quits.
pub fn run_gui(config: EngineConfig, options: GuiOptions) -> Result<(), Box<dyn Error>> {
    let driver = build_driver(&config, options)?;
    let raster = driver.state().raster;

    let event_loop = EventLoop::new()?;

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Fractal Zoomer")
            .with_inner_size(LogicalSize::new(raster.width(), raster.height()))
            .with_min_inner_size(LogicalSize::new(200.0, 200.0))
            .build(&event_loop)?,
    ));

    let size = window.inner_size();
    let surface_texture = SurfaceTexture::new(size.width, size.height, window);
    let pixels = Pixels::new(raster.width(), raster.height(), surface_texture)?;

    let mut app = App {
        pixels,
        driver,
        config,
        paused: false,
    };

    event_loop.run(|event, elwt| match event {
        Event::WindowEvent {
            ref event,
            window_id,
        } if window_id == window.id() => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::KeyboardInput { event, .. } => {
                if app.handle_key(event) {
                    elwt.exit();
                }
            }
            WindowEvent::RedrawRequested => {
                if let Err(e) = app.render() {
                    error!("Render error: {}", e);
                    elwt.exit();
                }
            }
            WindowEvent::Resized(size) => app.resize(size.width, size.height),
            _ => {}
        },
        Event::AboutToWait => window.request_redraw(),
        _ => {}
    })?;

    Ok(())
}
