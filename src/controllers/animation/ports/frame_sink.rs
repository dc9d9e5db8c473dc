use crate::core::data::frame_buffer::FrameBuffer;
use crate::storage::frame_cache::errors::FrameCacheError;

/// Write path for frames produced while recording.
pub trait FrameSink: Send {
    /// Persists `frame` and returns the index it was assigned.
    fn write_frame(&mut self, frame: &FrameBuffer) -> Result<u64, FrameCacheError>;

    fn frames_written(&self) -> u64;

    /// Flushes outstanding writes and returns the number of frames written.
    fn finish(self: Box<Self>) -> Result<u64, FrameCacheError>;
}
