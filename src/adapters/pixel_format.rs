//! Pixel format conversion helpers for presentation adapters.

use crate::core::data::frame_buffer::FrameBuffer;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("RGBA surface holds {actual} bytes, frame needs {expected}")]
pub struct SurfaceSizeMismatch {
    pub expected: usize,
    pub actual: usize,
}

/// Copies packed ARGB colours into an RGBA byte surface, setting alpha to 255.
///
/// The interior colour is fully transparent; forcing alpha keeps it visible
/// as black on surfaces that blend.
pub fn copy_argb_to_rgba(frame: &FrameBuffer, dst: &mut [u8]) -> Result<(), SurfaceSizeMismatch> {
    let expected = frame.pixels().len() * 4;

    if dst.len() != expected {
        return Err(SurfaceSizeMismatch {
            expected,
            actual: dst.len(),
        });
    }

    for (pixel, dst_pixel) in frame.pixels().iter().zip(dst.chunks_exact_mut(4)) {
        let [_, r, g, b] = pixel.argb();

        dst_pixel.copy_from_slice(&[r, g, b, 255]);
    }

    Ok(())
}

/// Drops alpha and writes three bytes per pixel, row-major.
#[must_use]
pub fn argb_to_rgb_bytes(frame: &FrameBuffer) -> Vec<u8> {
    frame
        .pixels()
        .iter()
        .flat_map(|pixel| {
            let [_, r, g, b] = pixel.argb();
            [r, g, b]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::pixel::Pixel;
    use crate::core::data::raster::Raster;

    fn frame(colours: &[u32], width: u32, height: u32) -> FrameBuffer {
        let raster = Raster::new(width, height).unwrap();
        let pixels = colours
            .iter()
            .enumerate()
            .map(|(i, &colour)| Pixel::new(i as u32 % width, i as u32 / width, colour))
            .collect();

        FrameBuffer::from_pixels(raster, pixels).unwrap()
    }

    #[test]
    fn test_copy_argb_to_rgba_known_values() {
        let frame = frame(&[0xffff_0000, 0xff00_ff00, 0xff00_00ff, 0x80ff_ffff], 2, 2);
        let mut dst = vec![0; 16];

        copy_argb_to_rgba(&frame, &mut dst).unwrap();

        assert_eq!(
            dst,
            vec![
                255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 255, 255, 255, 255
            ]
        );
    }

    #[test]
    fn test_interior_becomes_opaque_black() {
        let frame = frame(&[0x0000_0000], 1, 1);
        let mut dst = vec![9; 4];

        copy_argb_to_rgba(&frame, &mut dst).unwrap();

        assert_eq!(dst, vec![0, 0, 0, 255]);
    }

    #[test]
    fn test_copy_argb_to_rgba_rejects_wrong_surface() {
        let frame = frame(&[0, 0, 0], 3, 1);
        let mut dst = vec![0; 8];

        assert_eq!(
            copy_argb_to_rgba(&frame, &mut dst),
            Err(SurfaceSizeMismatch {
                expected: 12,
                actual: 8
            })
        );
    }

    #[test]
    fn test_argb_to_rgb_bytes() {
        let frame = frame(&[0xff80_4020, 0x0010_2030], 2, 1);

        assert_eq!(argb_to_rgb_bytes(&frame), vec![0x80, 0x40, 0x20, 0x10, 0x20, 0x30]);
    }
}
