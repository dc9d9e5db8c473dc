//! On-disk frame records for deterministic replay.
//!
//! A cache is a directory of `dump_<N>.bin` files, one per frame, where `N` is
//! the zero-based frame index in the order the frames were produced. Replay
//! sorts by the parsed index, never by directory listing order.

pub mod cache;
pub mod errors;
pub mod playback;
pub mod record;
pub mod recorder;

pub use cache::{FrameCache, RecordEntry};
pub use errors::FrameCacheError;
pub use playback::FramePlayback;
pub use recorder::{BackgroundFrameWriter, FrameRecorder};
