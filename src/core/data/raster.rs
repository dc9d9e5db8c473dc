use thiserror::Error;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum RasterError {
    #[error("raster size must be positive: {width}x{height}")]
    InvalidSize { width: u32, height: u32 },
}

/// Pixel grid dimensions. Columns run `0..width`, rows `0..height`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
}

impl Raster {
    pub fn new(width: u32, height: u32) -> Result<Self, RasterError> {
        if width == 0 || height == 0 {
            return Err(RasterError::InvalidSize { width, height });
        }

        Ok(Self { width, height })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width divided by height; the viewport's real/imaginary extents keep this ratio.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    #[must_use]
    pub fn contains(&self, column: u32, row: u32) -> bool {
        column < self.width && row < self.height
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Row-major slot for `(column, row)`.
    #[must_use]
    pub fn index_of(&self, column: u32, row: u32) -> usize {
        row as usize * self.width as usize + column as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_new_valid() {
        let raster = Raster::new(800, 600).unwrap();

        assert_eq!(raster.width(), 800);
        assert_eq!(raster.height(), 600);
        assert_eq!(raster.size(), 480_000);
    }

    #[test]
    fn test_raster_dimensions_must_be_positive() {
        assert_eq!(
            Raster::new(0, 10),
            Err(RasterError::InvalidSize {
                width: 0,
                height: 10
            })
        );
        assert_eq!(
            Raster::new(10, 0),
            Err(RasterError::InvalidSize {
                width: 10,
                height: 0
            })
        );
        assert!(Raster::new(1, 1).is_ok());
    }

    #[test]
    fn test_raster_aspect_ratio() {
        let raster = Raster::new(800, 600).unwrap();

        assert!((raster.aspect_ratio() - 4.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_raster_contains() {
        let raster = Raster::new(4, 3).unwrap();

        assert!(raster.contains(0, 0));
        assert!(raster.contains(3, 2));
        assert!(!raster.contains(4, 0));
        assert!(!raster.contains(0, 3));
    }

    #[test]
    fn test_raster_index_is_row_major() {
        let raster = Raster::new(4, 3).unwrap();

        assert_eq!(raster.index_of(0, 0), 0);
        assert_eq!(raster.index_of(3, 0), 3);
        assert_eq!(raster.index_of(0, 1), 4);
        assert_eq!(raster.index_of(3, 2), 11);
    }
}
