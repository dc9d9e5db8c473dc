use crate::core::data::complex::Complex;
use crate::core::data::escape::Escape;

/// Squared escape radius: once `|z|² > 4` the orbit is known to diverge.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

pub trait EscapeTime {
    fn max_iterations(&self) -> u32;

    fn evaluate(&self, point: Complex) -> Escape;
}
