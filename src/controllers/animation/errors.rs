use thiserror::Error;

use crate::core::data::viewport::ViewportError;
use crate::core::fractals::errors::EscapeTimeError;
use crate::storage::frame_cache::errors::FrameCacheError;

#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Viewport(#[from] ViewportError),
    #[error(transparent)]
    EscapeTime(#[from] EscapeTimeError),
    #[error("frame was composed but could not be cached: {0}")]
    CacheWrite(#[source] FrameCacheError),
    #[error("frame could not be replayed: {0}")]
    CacheRead(#[source] FrameCacheError),
    #[error("replayed frame is {actual_width}x{actual_height}, engine raster is {width}x{height}")]
    RasterMismatch {
        width: u32,
        height: u32,
        actual_width: u32,
        actual_height: u32,
    },
}
