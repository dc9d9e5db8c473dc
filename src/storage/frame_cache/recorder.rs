use log::{debug, info, warn};
use std::sync::mpsc::{self, SyncSender};
use std::thread::{self, JoinHandle};

use crate::controllers::animation::ports::frame_sink::FrameSink;
use crate::core::data::frame_buffer::FrameBuffer;
use crate::storage::frame_cache::cache::FrameCache;
use crate::storage::frame_cache::errors::FrameCacheError;

const WRITE_QUEUE_DEPTH: usize = 8;

/// Writes frames synchronously, numbering them from 0 in the order received.
#[derive(Debug)]
pub struct FrameRecorder {
    cache: FrameCache,
    next_index: u64,
}

impl FrameRecorder {
    /// Prepares `cache` for a fresh recording: the directory is created and
    /// records left over from an earlier session are deleted.
    pub fn start(cache: FrameCache) -> Result<Self, FrameCacheError> {
        cache.create_dir()?;

        let removed = cache.clear()?;
        if removed > 0 {
            info!(
                "Removed {} stale frame records from {}",
                removed,
                cache.dir().display()
            );
        }

        Ok(Self {
            cache,
            next_index: 0,
        })
    }

    #[must_use]
    pub fn cache(&self) -> &FrameCache {
        &self.cache
    }

    /// A failed write does not consume an index.
    pub fn record(&mut self, frame: &FrameBuffer) -> Result<u64, FrameCacheError> {
        let index = self.next_index;
        let path = self.cache.write_record(index, frame)?;

        debug!("Wrote frame {} to {}", index, path.display());
        self.next_index += 1;

        Ok(index)
    }
}

impl FrameSink for FrameRecorder {
    fn write_frame(&mut self, frame: &FrameBuffer) -> Result<u64, FrameCacheError> {
        self.record(frame)
    }

    fn frames_written(&self) -> u64 {
        self.next_index
    }

    fn finish(self: Box<Self>) -> Result<u64, FrameCacheError> {
        Ok(self.next_index)
    }
}

/// Moves record writes off the animation thread.
///
/// Frames are queued in the order they are submitted and a single worker
/// writes them with a [`FrameRecorder`], so indices still follow production
/// order. The worker stops at its first failure; that error is reported by the
/// next [`FrameSink::write_frame`] call or by [`FrameSink::finish`].
pub struct BackgroundFrameWriter {
    sender: Option<SyncSender<FrameBuffer>>,
    worker: Option<JoinHandle<Result<u64, FrameCacheError>>>,
    submitted: u64,
}

impl BackgroundFrameWriter {
    #[must_use]
    pub fn spawn(mut recorder: FrameRecorder) -> Self {
        let (sender, receiver) = mpsc::sync_channel::<FrameBuffer>(WRITE_QUEUE_DEPTH);

        let worker = thread::spawn(move || -> Result<u64, FrameCacheError> {
            for frame in receiver {
                recorder.record(&frame)?;
            }

            Ok(recorder.next_index)
        });

        Self {
            sender: Some(sender),
            worker: Some(worker),
            submitted: 0,
        }
    }

    fn join_worker(&mut self) -> Result<u64, FrameCacheError> {
        self.sender.take();

        match self.worker.take().map(JoinHandle::join) {
            Some(Ok(result)) => result,
            Some(Err(_)) | None => Err(FrameCacheError::WriterStopped),
        }
    }
}

impl FrameSink for BackgroundFrameWriter {
    fn write_frame(&mut self, frame: &FrameBuffer) -> Result<u64, FrameCacheError> {
        let Some(sender) = &self.sender else {
            return Err(FrameCacheError::WriterStopped);
        };

        if sender.send(frame.clone()).is_err() {
            // The worker only hangs up after a failed write.
            return match self.join_worker() {
                Ok(_) => Err(FrameCacheError::WriterStopped),
                Err(e) => Err(e),
            };
        }

        let index = self.submitted;
        self.submitted += 1;

        Ok(index)
    }

    /// Frames accepted into the queue, written or not.
    fn frames_written(&self) -> u64 {
        self.submitted
    }

    fn finish(mut self: Box<Self>) -> Result<u64, FrameCacheError> {
        self.join_worker()
    }
}

impl Drop for BackgroundFrameWriter {
    fn drop(&mut self) {
        self.sender.take();

        match self.worker.take().map(JoinHandle::join) {
            Some(Ok(Err(e))) => warn!("Frame writer stopped with an unreported error: {}", e),
            Some(Err(_)) => warn!("Frame writer thread panicked"),
            Some(Ok(Ok(_))) | None => {}
        }
    }
}
