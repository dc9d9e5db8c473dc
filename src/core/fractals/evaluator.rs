use crate::core::actions::compose_frame::ports::escape_time::EscapeTime;
use crate::core::data::complex::Complex;
use crate::core::data::escape::Escape;
use crate::core::fractals::errors::EscapeTimeError;
use crate::core::fractals::fractal_kinds::FractalKinds;
use crate::core::fractals::julia::algorithm::JuliaAlgorithm;
use crate::core::fractals::mandelbrot::algorithm::MandelbrotAlgorithm;

/// The escape-time recurrence selected by the mode's fractal family.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evaluator {
    Mandelbrot(MandelbrotAlgorithm),
    Julia(JuliaAlgorithm),
}

impl Evaluator {
    pub fn for_family(
        family: FractalKinds,
        max_iterations: u32,
        julia_constant: Complex,
    ) -> Result<Self, EscapeTimeError> {
        Ok(match family {
            FractalKinds::Mandelbrot => Self::Mandelbrot(MandelbrotAlgorithm::new(max_iterations)?),
            FractalKinds::Julia => Self::Julia(JuliaAlgorithm::new(julia_constant, max_iterations)?),
        })
    }

    #[must_use]
    pub fn family(&self) -> FractalKinds {
        match self {
            Self::Mandelbrot(_) => FractalKinds::Mandelbrot,
            Self::Julia(_) => FractalKinds::Julia,
        }
    }
}

impl EscapeTime for Evaluator {
    fn max_iterations(&self) -> u32 {
        match self {
            Self::Mandelbrot(algorithm) => algorithm.max_iterations(),
            Self::Julia(algorithm) => algorithm.max_iterations(),
        }
    }

    #[inline]
    fn evaluate(&self, point: Complex) -> Escape {
        match self {
            Self::Mandelbrot(algorithm) => algorithm.evaluate(point),
            Self::Julia(algorithm) => algorithm.evaluate(point),
        }
    }
}
