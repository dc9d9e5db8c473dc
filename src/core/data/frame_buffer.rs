use crate::core::data::pixel::{INTERIOR_COLOUR, Pixel};
use crate::core::data::raster::Raster;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FrameBufferError {
    #[error("raster {width}x{height} needs {expected} pixels, got {actual}")]
    BoundsMismatch {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
    #[error("pixel at column:{column}, row:{row} is stored in slot {index} instead of its row-major slot")]
    Misplaced { column: u32, row: u32, index: usize },
    #[error("pixel at column:{column}, row:{row} is outside the {width}x{height} raster")]
    OutsideBounds {
        column: u32,
        row: u32,
        width: u32,
        height: u32,
    },
}

/// Row-major sequence of pixels covering a whole raster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    raster: Raster,
    pixels: Vec<Pixel>,
}

impl FrameBuffer {
    /// Every cell starts out with the interior colour.
    #[must_use]
    pub fn new(raster: Raster) -> Self {
        let pixels = (0..raster.height())
            .flat_map(|row| {
                (0..raster.width()).map(move |column| Pixel::new(column, row, INTERIOR_COLOUR))
            })
            .collect();

        Self { raster, pixels }
    }

    pub fn from_pixels(raster: Raster, pixels: Vec<Pixel>) -> Result<Self, FrameBufferError> {
        if pixels.len() != raster.size() {
            return Err(FrameBufferError::BoundsMismatch {
                width: raster.width(),
                height: raster.height(),
                expected: raster.size(),
                actual: pixels.len(),
            });
        }

        for (index, pixel) in pixels.iter().enumerate() {
            if !raster.contains(pixel.column, pixel.row) {
                return Err(FrameBufferError::OutsideBounds {
                    column: pixel.column,
                    row: pixel.row,
                    width: raster.width(),
                    height: raster.height(),
                });
            }

            if raster.index_of(pixel.column, pixel.row) != index {
                return Err(FrameBufferError::Misplaced {
                    column: pixel.column,
                    row: pixel.row,
                    index,
                });
            }
        }

        Ok(Self { raster, pixels })
    }

    #[must_use]
    pub fn raster(&self) -> Raster {
        self.raster
    }

    #[must_use]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Mutable access for compositors. Only colours may be rewritten; the
    /// coordinates are fixed for the lifetime of the buffer.
    pub(crate) fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    #[must_use]
    pub fn pixel(&self, column: u32, row: u32) -> Option<&Pixel> {
        if !self.raster.contains(column, row) {
            return None;
        }

        self.pixels.get(self.raster.index_of(column, row))
    }

    #[must_use]
    pub fn colour_at(&self, column: u32, row: u32) -> Option<u32> {
        self.pixel(column, row).map(|pixel| pixel.colour)
    }

    pub fn set_colour(&mut self, column: u32, row: u32, colour: u32) -> Result<(), FrameBufferError> {
        if !self.raster.contains(column, row) {
            return Err(FrameBufferError::OutsideBounds {
                column,
                row,
                width: self.raster.width(),
                height: self.raster.height(),
            });
        }

        let index = self.raster.index_of(column, row);
        self.pixels[index].colour = colour;

        Ok(())
    }

    pub fn colours(&self) -> impl Iterator<Item = u32> + '_ {
        self.pixels.iter().map(|pixel| pixel.colour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raster(width: u32, height: u32) -> Raster {
        Raster::new(width, height).unwrap()
    }

    #[test]
    fn test_new_creates_row_major_interior_buffer() {
        let buffer = FrameBuffer::new(raster(3, 2));

        let coords: Vec<(u32, u32)> = buffer.pixels().iter().map(|p| (p.column, p.row)).collect();

        assert_eq!(coords, vec![(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]);
        assert!(buffer.colours().all(|colour| colour == INTERIOR_COLOUR));
    }

    #[test]
    fn test_from_pixels_valid() {
        let pixels = vec![
            Pixel::new(0, 0, 0xffff_0000),
            Pixel::new(1, 0, 0xff00_ff00),
            Pixel::new(0, 1, 0xff00_00ff),
            Pixel::new(1, 1, 0x0000_0000),
        ];

        let buffer = FrameBuffer::from_pixels(raster(2, 2), pixels.clone()).unwrap();

        assert_eq!(buffer.pixels(), pixels.as_slice());
        assert_eq!(buffer.colour_at(1, 0), Some(0xff00_ff00));
    }

    #[test]
    fn test_from_pixels_wrong_length() {
        let result = FrameBuffer::from_pixels(raster(2, 2), vec![Pixel::new(0, 0, 0)]);

        assert_eq!(
            result,
            Err(FrameBufferError::BoundsMismatch {
                width: 2,
                height: 2,
                expected: 4,
                actual: 1
            })
        );
    }

    #[test]
    fn test_from_pixels_rejects_shuffled_order() {
        let pixels = vec![
            Pixel::new(1, 0, 0),
            Pixel::new(0, 0, 0),
            Pixel::new(0, 1, 0),
            Pixel::new(1, 1, 0),
        ];

        let result = FrameBuffer::from_pixels(raster(2, 2), pixels);

        assert_eq!(
            result,
            Err(FrameBufferError::Misplaced {
                column: 1,
                row: 0,
                index: 0
            })
        );
    }

    #[test]
    fn test_from_pixels_rejects_out_of_bounds() {
        let pixels = vec![
            Pixel::new(0, 0, 0),
            Pixel::new(5, 0, 0),
            Pixel::new(0, 1, 0),
            Pixel::new(1, 1, 0),
        ];

        let result = FrameBuffer::from_pixels(raster(2, 2), pixels);

        assert!(matches!(result, Err(FrameBufferError::OutsideBounds { column: 5, .. })));
    }

    #[test]
    fn test_set_colour_and_lookup() {
        let mut buffer = FrameBuffer::new(raster(3, 3));

        buffer.set_colour(2, 1, 0xff12_3456).unwrap();

        assert_eq!(buffer.colour_at(2, 1), Some(0xff12_3456));
        assert_eq!(buffer.pixels()[5].colour, 0xff12_3456);
        assert_eq!(buffer.colour_at(3, 1), None);
    }

    #[test]
    fn test_set_colour_outside_bounds() {
        let mut buffer = FrameBuffer::new(raster(3, 3));

        assert_eq!(
            buffer.set_colour(1, 3, 0),
            Err(FrameBufferError::OutsideBounds {
                column: 1,
                row: 3,
                width: 3,
                height: 3
            })
        );
    }
}
