mod adapters;
mod config;
mod controllers;
mod core;
#[cfg(feature = "gui")]
mod input;
mod storage;

pub use adapters::pixel_format::{SurfaceSizeMismatch, argb_to_rgb_bytes, copy_argb_to_rgba};
pub use config::{ConfigError, EngineConfig};
pub use controllers::animation::{AnimationDriver, DriverError, EngineState, FrameSink, Phase};
pub use crate::core::actions::cancellation::{CancelToken, NeverCancel, StopFlag};
pub use crate::core::actions::compose_frame::compose_frame::{compose_frame, compose_frame_serial, compose_into};
pub use crate::core::actions::compose_frame::ports::colour_map::ColourMap;
pub use crate::core::actions::compose_frame::ports::escape_time::EscapeTime;
pub use crate::core::colour_mapping::factory::{colour_map_factory, compute_colour};
pub use crate::core::colour_mapping::kinds::{ColourMapKinds, RgbGradient};
pub use crate::core::data::complex::Complex;
pub use crate::core::data::escape::Escape;
pub use crate::core::data::frame_buffer::{FrameBuffer, FrameBufferError};
pub use crate::core::data::mode::{ColourPolicy, Mode, ModeError, ModeFlags};
pub use crate::core::data::pixel::{INTERIOR_COLOUR, Pixel};
pub use crate::core::data::raster::{Raster, RasterError};
pub use crate::core::data::viewport::{Viewport, ViewportError};
pub use crate::core::fractals::errors::EscapeTimeError;
pub use crate::core::fractals::evaluator::Evaluator;
pub use crate::core::fractals::fractal_kinds::FractalKinds;
pub use crate::core::fractals::julia::algorithm::{DEFAULT_JULIA_CONSTANT, JuliaAlgorithm};
pub use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;
pub use crate::core::util::plane_mapper::PlaneMapper;
#[cfg(feature = "gui")]
pub use input::gui::{GuiOptions, run_gui};
pub use storage::frame_cache::{
    BackgroundFrameWriter, FrameCache, FrameCacheError, FramePlayback, FrameRecorder, RecordEntry,
};
pub use storage::write_ppm::write_ppm;
