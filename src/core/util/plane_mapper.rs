use crate::core::data::complex::Complex;
use crate::core::data::raster::Raster;
use crate::core::data::viewport::{Viewport, ViewportError};

/// Maps raster cells onto the complex plane for one viewport snapshot.
///
/// Column 0 sits on the minimum real bound and the real part grows to the
/// right. Row 0 sits on the maximum imaginary bound and the imaginary part
/// shrinks going down, so the set is drawn the way it is plotted on paper.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlaneMapper {
    raster: Raster,
    real_min: f64,
    imag_max: f64,
    real_step: f64,
    imag_step: f64,
}

impl PlaneMapper {
    pub fn new(viewport: &Viewport, raster: Raster) -> Result<Self, ViewportError> {
        let real_step = viewport.width() / f64::from(raster.width());
        let imag_step = viewport.height() / f64::from(raster.height());

        if !(real_step > 0.0 && imag_step > 0.0 && real_step.is_finite() && imag_step.is_finite()) {
            return Err(ViewportError::Degenerate {
                width: viewport.width(),
                height: viewport.height(),
            });
        }

        Ok(Self {
            raster,
            real_min: viewport.real_range().0,
            imag_max: viewport.imag_range().1,
            real_step,
            imag_step,
        })
    }

    #[must_use]
    pub fn raster(&self) -> Raster {
        self.raster
    }

    /// Plane units covered by one pixel along each axis.
    #[must_use]
    pub fn steps(&self) -> (f64, f64) {
        (self.real_step, self.imag_step)
    }

    #[must_use]
    pub fn map(&self, column: u32, row: u32) -> Complex {
        Complex {
            real: self.real_min + f64::from(column) * self.real_step,
            imag: self.imag_max - f64::from(row) * self.imag_step,
        }
    }
}
