use crate::core::actions::compose_frame::ports::escape_time::{ESCAPE_RADIUS_SQUARED, EscapeTime};
use crate::core::data::complex::Complex;
use crate::core::data::escape::Escape;
use crate::core::fractals::errors::EscapeTimeError;

pub const DEFAULT_JULIA_CONSTANT: Complex = Complex {
    real: -0.4,
    imag: 0.6,
};

/// `z_0` is the mapped pixel, `z_{n+1} = z_n² + c` with a fixed `c`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JuliaAlgorithm {
    constant: Complex,
    max_iterations: u32,
}

impl JuliaAlgorithm {
    pub fn new(constant: Complex, max_iterations: u32) -> Result<Self, EscapeTimeError> {
        if max_iterations == 0 {
            return Err(EscapeTimeError::ZeroMaxIterations);
        }

        Ok(Self {
            constant,
            max_iterations,
        })
    }

    #[must_use]
    pub fn constant(&self) -> Complex {
        self.constant
    }
}

impl EscapeTime for JuliaAlgorithm {
    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    fn evaluate(&self, point: Complex) -> Escape {
        let mut z = point;

        for iteration in 0..self.max_iterations {
            if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
                return Escape::diverged_at(iteration);
            }
            z = z.square() + self.constant;
        }

        Escape::interior(self.max_iterations)
    }
}
