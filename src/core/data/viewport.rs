use crate::core::data::complex::Complex;
use crate::core::data::raster::Raster;
use thiserror::Error;

const ASPECT_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Axis {
    Real,
    Imaginary,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Real => f.write_str("real"),
            Self::Imaginary => f.write_str("imaginary"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Error)]
pub enum ViewportError {
    #[error("{axis} range must be finite and increasing: {min}..{max}")]
    InvalidRange { axis: Axis, min: f64, max: f64 },
    #[error("zoom factor must lie strictly between 0 and 1: {zoom_factor}")]
    InvalidZoomFactor { zoom_factor: f64 },
    #[error("view radius must be positive and finite: {radius}")]
    InvalidRadius { radius: f64 },
    #[error("viewport can no longer contract: {width}x{height} plane units")]
    Degenerate { width: f64, height: f64 },
    #[error("viewport aspect ratio {actual} does not match raster aspect ratio {expected}")]
    AspectMismatch { expected: f64, actual: f64 },
}

/// The visible rectangle of the complex plane plus the fixed point it zooms into.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    real_range: (f64, f64),
    imag_range: (f64, f64),
    zoom_target: Complex,
    zoom_factor: f64,
}

fn check_range(axis: Axis, (min, max): (f64, f64)) -> Result<(), ViewportError> {
    if !(min.is_finite() && max.is_finite()) || min >= max {
        return Err(ViewportError::InvalidRange { axis, min, max });
    }

    Ok(())
}

impl Viewport {
    pub fn new(
        real_range: (f64, f64),
        imag_range: (f64, f64),
        zoom_target: Complex,
        zoom_factor: f64,
    ) -> Result<Self, ViewportError> {
        check_range(Axis::Real, real_range)?;
        check_range(Axis::Imaginary, imag_range)?;

        if !(zoom_factor > 0.0 && zoom_factor < 1.0) {
            return Err(ViewportError::InvalidZoomFactor { zoom_factor });
        }

        Ok(Self {
            real_range,
            imag_range,
            zoom_target,
            zoom_factor,
        })
    }

    /// Builds the starting window: `radius` either side of the target on the
    /// real axis, `radius / aspect` on the imaginary axis so pixels stay square.
    pub fn centered(
        zoom_target: Complex,
        radius: f64,
        raster: Raster,
        zoom_factor: f64,
    ) -> Result<Self, ViewportError> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(ViewportError::InvalidRadius { radius });
        }

        let imag_radius = radius / raster.aspect_ratio();

        Self::new(
            (zoom_target.real - radius, zoom_target.real + radius),
            (zoom_target.imag - imag_radius, zoom_target.imag + imag_radius),
            zoom_target,
            zoom_factor,
        )
    }

    #[must_use]
    pub fn real_range(&self) -> (f64, f64) {
        self.real_range
    }

    #[must_use]
    pub fn imag_range(&self) -> (f64, f64) {
        self.imag_range
    }

    #[must_use]
    pub fn zoom_target(&self) -> Complex {
        self.zoom_target
    }

    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.real_range.1 - self.real_range.0
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.imag_range.1 - self.imag_range.0
    }

    #[must_use]
    pub fn center(&self) -> Complex {
        Complex {
            real: (self.real_range.0 + self.real_range.1) / 2.0,
            imag: (self.imag_range.0 + self.imag_range.1) / 2.0,
        }
    }

    pub fn check_aspect(&self, raster: Raster) -> Result<(), ViewportError> {
        let expected = raster.aspect_ratio();
        let actual = self.width() / self.height();

        if ((actual - expected) / expected).abs() > ASPECT_TOLERANCE {
            return Err(ViewportError::AspectMismatch { expected, actual });
        }

        Ok(())
    }

    /// Moves every bound `zoom_factor` of its distance towards the zoom target.
    ///
    /// Both extents shrink by the same factor, so the aspect ratio is kept.
    /// Once `f64` can no longer shrink the window the step is refused and the
    /// viewport is left untouched.
    pub fn zoom_step(&mut self) -> Result<(), ViewportError> {
        let factor = self.zoom_factor;
        let target = self.zoom_target;

        let step = |(min, max): (f64, f64), focus: f64| {
            (min + (focus - min) * factor, max - (max - focus) * factor)
        };

        let real_range = step(self.real_range, target.real);
        let imag_range = step(self.imag_range, target.imag);

        let width = real_range.1 - real_range.0;
        let height = imag_range.1 - imag_range.0;

        if !(width > 0.0 && height > 0.0 && width < self.width() && height < self.height()) {
            return Err(ViewportError::Degenerate { width, height });
        }

        self.real_range = real_range;
        self.imag_range = imag_range;

        Ok(())
    }
}
