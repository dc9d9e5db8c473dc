use log::{debug, info};

use crate::core::data::frame_buffer::FrameBuffer;
use crate::core::data::raster::Raster;
use crate::storage::frame_cache::cache::{FrameCache, RecordEntry};
use crate::storage::frame_cache::errors::FrameCacheError;

/// Sequential reader over a recorded session.
#[derive(Debug)]
pub struct FramePlayback {
    cache: FrameCache,
    records: Vec<RecordEntry>,
    cursor: usize,
    current: Option<FrameBuffer>,
    expected_raster: Option<Raster>,
}

impl FramePlayback {
    /// Discovers the records in `cache`. A cache without records cannot be replayed.
    pub fn open(cache: FrameCache) -> Result<Self, FrameCacheError> {
        let records = cache.discover()?;

        if records.is_empty() {
            return Err(FrameCacheError::Empty {
                dir: cache.dir().to_path_buf(),
            });
        }

        info!(
            "Found {} frame records in {}",
            records.len(),
            cache.dir().display()
        );

        Ok(Self {
            cache,
            records,
            cursor: 0,
            current: None,
            expected_raster: None,
        })
    }

    /// Records of any other size are rejected by [`advance`](Self::advance)
    /// instead of becoming current.
    pub fn set_expected_raster(&mut self, raster: Raster) {
        self.expected_raster = Some(raster);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records consumed so far.
    #[must_use]
    pub fn position(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.cursor >= self.records.len()
    }

    #[must_use]
    pub fn current(&self) -> Option<&FrameBuffer> {
        self.current.as_ref()
    }

    /// Loads the next record and makes it current.
    ///
    /// Once every record has been read the last frame is returned again. A
    /// record that fails to load or has the wrong size is still consumed, its
    /// error is returned and the previous frame stays current.
    pub fn advance(&mut self) -> Result<&FrameBuffer, FrameCacheError> {
        if let Some(record) = self.records.get(self.cursor) {
            self.cursor += 1;
            debug!("Playing frame {}", record.index);

            let frame = self.cache.read_record(&record.path)?;

            if let Some(expected) = self.expected_raster.filter(|&raster| raster != frame.raster()) {
                return Err(FrameCacheError::RasterMismatch {
                    path: record.path.clone(),
                    width: expected.width(),
                    height: expected.height(),
                    actual_width: frame.raster().width(),
                    actual_height: frame.raster().height(),
                });
            }

            self.current = Some(frame);
        }

        self.current.as_ref().ok_or_else(|| FrameCacheError::Empty {
            dir: self.cache.dir().to_path_buf(),
        })
    }

    pub fn rewind(&mut self) {
        self.cursor = 0;
        self.current = None;
    }

    /// Decodes every record in order without touching the cursor.
    pub fn frames(&self) -> impl Iterator<Item = Result<FrameBuffer, FrameCacheError>> + '_ {
        self.records
            .iter()
            .map(|record| self.cache.read_record(&record.path))
    }
}
