use crate::core::actions::compose_frame::ports::escape_time::{ESCAPE_RADIUS_SQUARED, EscapeTime};
use crate::core::data::complex::Complex;
use crate::core::data::escape::Escape;
use crate::core::fractals::errors::EscapeTimeError;

/// `z_{n+1} = z_n² + c` with `c` the mapped pixel.
///
/// The orbit is entered at `z = c`, the first step from `z = 0`, and the escape
/// test runs before every further step. Points already outside the escape
/// radius therefore report iteration 0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MandelbrotAlgorithm {
    max_iterations: u32,
}

impl MandelbrotAlgorithm {
    pub fn new(max_iterations: u32) -> Result<Self, EscapeTimeError> {
        if max_iterations == 0 {
            return Err(EscapeTimeError::ZeroMaxIterations);
        }

        Ok(Self { max_iterations })
    }
}

impl EscapeTime for MandelbrotAlgorithm {
    fn max_iterations(&self) -> u32 {
        self.max_iterations
    }

    fn evaluate(&self, c: Complex) -> Escape {
        let mut z = c;

        for iteration in 0..self.max_iterations {
            if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
                return Escape::diverged_at(iteration);
            }
            z = z.square() + c;
        }

        Escape::interior(self.max_iterations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_iterations_must_be_greater_than_zero() {
        assert_eq!(
            MandelbrotAlgorithm::new(0),
            Err(EscapeTimeError::ZeroMaxIterations)
        );
        assert!(MandelbrotAlgorithm::new(1).is_ok());
    }

    #[test]
    fn test_origin_never_diverges() {
        for cap in [1, 50, 200, 10_000] {
            let algorithm = MandelbrotAlgorithm::new(cap).unwrap();

            assert_eq!(algorithm.evaluate(Complex::ZERO), Escape::interior(cap));
        }
    }

    #[test]
    fn test_points_outside_escape_radius_diverge_immediately() {
        let algorithm = MandelbrotAlgorithm::new(100).unwrap();

        for c in [
            Complex::new(2.1, 0.0),
            Complex::new(-2.0, 2.0),
            Complex::new(0.0, -3.0),
            Complex::new(1.5, 1.5),
        ] {
            let escape = algorithm.evaluate(c);

            assert!(escape.diverged);
            assert!(escape.iterations <= 1, "{:?} escaped at {}", c, escape.iterations);
        }
    }

    #[test]
    fn test_known_escape_count() {
        // c = 1: 1 -> 2 -> 5, |5|² > 4 after two steps.
        let algorithm = MandelbrotAlgorithm::new(100).unwrap();

        assert_eq!(algorithm.evaluate(Complex::new(1.0, 0.0)), Escape::diverged_at(2));
    }

    #[test]
    fn test_escape_radius_is_exclusive() {
        // c = -2 sits on the boundary: -2 -> 2 -> 2 ... never strictly beyond it.
        let algorithm = MandelbrotAlgorithm::new(64).unwrap();

        assert_eq!(algorithm.evaluate(Complex::new(-2.0, 0.0)), Escape::interior(64));
    }

    #[test]
    fn test_interior_points_reach_cap() {
        let algorithm = MandelbrotAlgorithm::new(200).unwrap();

        for c in [Complex::new(-1.0, 0.0), Complex::new(-0.1, 0.1), Complex::new(0.25, 0.0)] {
            assert_eq!(algorithm.evaluate(c), Escape::interior(200));
        }
    }
}
