use crate::core::actions::compose_frame::ports::colour_map::ColourMap;
use crate::core::colour_mapping::factory::colour_map_factory;
use crate::core::colour_mapping::kinds::{ColourMapKinds, RgbGradient};
use crate::core::data::complex::Complex;
use crate::core::data::mode::Mode;
use crate::core::data::raster::Raster;
use crate::core::data::viewport::{Viewport, ViewportError};
use crate::core::fractals::errors::EscapeTimeError;
use crate::core::fractals::evaluator::Evaluator;
use crate::core::fractals::julia::algorithm::DEFAULT_JULIA_CONSTANT;

/// Everything the animation mutates or reads between ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct EngineState {
    pub viewport: Viewport,
    pub mode: Mode,
    pub raster: Raster,
    pub max_iterations: u32,
    pub julia_constant: Complex,
    pub rgb_gradient: RgbGradient,
    pub alpha: u8,
}

impl EngineState {
    /// Mandelbrot with the power-law RGB gradient and an opaque alpha.
    #[must_use]
    pub fn new(viewport: Viewport, raster: Raster, max_iterations: u32) -> Self {
        Self {
            viewport,
            mode: Mode::default(),
            raster,
            max_iterations,
            julia_constant: DEFAULT_JULIA_CONSTANT,
            rgb_gradient: RgbGradient::default(),
            alpha: 0xff,
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_julia_constant(mut self, julia_constant: Complex) -> Self {
        self.julia_constant = julia_constant;
        self
    }

    #[must_use]
    pub fn with_rgb_gradient(mut self, rgb_gradient: RgbGradient) -> Self {
        self.rgb_gradient = rgb_gradient;
        self
    }

    #[must_use]
    pub fn with_alpha(mut self, alpha: u8) -> Self {
        self.alpha = alpha;
        self
    }

    #[must_use]
    pub fn colour_map_kind(&self) -> ColourMapKinds {
        ColourMapKinds::select(self.mode.colour, self.rgb_gradient)
    }

    pub fn evaluator(&self) -> Result<Evaluator, EscapeTimeError> {
        Evaluator::for_family(self.mode.family, self.max_iterations, self.julia_constant)
    }

    #[must_use]
    pub fn colour_map(&self) -> Box<dyn ColourMap + Send + Sync> {
        colour_map_factory(self.colour_map_kind(), self.max_iterations)
    }

    pub fn check_aspect(&self) -> Result<(), ViewportError> {
        self.viewport.check_aspect(self.raster)
    }
}
