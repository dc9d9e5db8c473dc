use rayon::prelude::*;

use crate::core::actions::compose_frame::ports::colour_map::ColourMap;
use crate::core::actions::compose_frame::ports::escape_time::EscapeTime;
use crate::core::data::frame_buffer::{FrameBuffer, FrameBufferError};
use crate::core::data::pixel::Pixel;
use crate::core::util::plane_mapper::PlaneMapper;

#[inline]
fn colour_pixel<E, M>(pixel: &mut Pixel, mapper: &PlaneMapper, evaluator: &E, colour_map: &M, alpha: u8)
where
    E: EscapeTime,
    M: ColourMap,
{
    let point = mapper.map(pixel.column, pixel.row);
    pixel.colour = colour_map.map(alpha, evaluator.evaluate(point));
}

fn check_raster(frame: &FrameBuffer, mapper: &PlaneMapper) -> Result<(), FrameBufferError> {
    let expected = mapper.raster();

    if frame.raster() != expected {
        return Err(FrameBufferError::BoundsMismatch {
            width: expected.width(),
            height: expected.height(),
            expected: expected.size(),
            actual: frame.pixels().len(),
        });
    }

    Ok(())
}

/// Renders a complete frame for one viewport snapshot.
///
/// Rows are handed to rayon's work-stealing pool; each worker owns a disjoint
/// row slice of the output, so no locking is involved.
#[must_use]
pub fn compose_frame<E, M>(mapper: &PlaneMapper, evaluator: &E, colour_map: &M, alpha: u8) -> FrameBuffer
where
    E: EscapeTime + Sync,
    M: ColourMap + Sync,
{
    let mut frame = FrameBuffer::new(mapper.raster());
    compose_rows_parallel(&mut frame, mapper, evaluator, colour_map, alpha);
    frame
}

/// Like [`compose_frame`] but overwrites the colours of an existing buffer.
pub fn compose_into<E, M>(
    frame: &mut FrameBuffer,
    mapper: &PlaneMapper,
    evaluator: &E,
    colour_map: &M,
    alpha: u8,
) -> Result<(), FrameBufferError>
where
    E: EscapeTime + Sync,
    M: ColourMap + Sync,
{
    check_raster(frame, mapper)?;
    compose_rows_parallel(frame, mapper, evaluator, colour_map, alpha);
    Ok(())
}

fn compose_rows_parallel<E, M>(
    frame: &mut FrameBuffer,
    mapper: &PlaneMapper,
    evaluator: &E,
    colour_map: &M,
    alpha: u8,
) where
    E: EscapeTime + Sync,
    M: ColourMap + Sync,
{
    let row_width = frame.raster().width() as usize;

    frame
        .pixels_mut()
        .par_chunks_mut(row_width)
        .for_each(|row| {
            for pixel in row {
                colour_pixel(pixel, mapper, evaluator, colour_map, alpha);
            }
        });
}

/// Single-threaded reference renderer; produces exactly what [`compose_frame`] does.
#[must_use]
pub fn compose_frame_serial<E, M>(mapper: &PlaneMapper, evaluator: &E, colour_map: &M, alpha: u8) -> FrameBuffer
where
    E: EscapeTime,
    M: ColourMap,
{
    let mut frame = FrameBuffer::new(mapper.raster());

    for pixel in frame.pixels_mut() {
        colour_pixel(pixel, mapper, evaluator, colour_map, alpha);
    }

    frame
}
