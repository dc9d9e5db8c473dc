use log::{debug, warn};
use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use crate::core::data::frame_buffer::FrameBuffer;
use crate::storage::frame_cache::errors::FrameCacheError;
use crate::storage::frame_cache::record::{
    decode_frame, encode_frame, looks_like_record, parse_record_index, record_file_name,
};

/// Follows symlinks so a linked record still counts.
fn is_file(entry: &std::fs::DirEntry) -> bool {
    match entry.file_type() {
        Ok(file_type) if file_type.is_symlink() => entry.path().is_file(),
        Ok(file_type) => file_type.is_file(),
        Err(_) => false,
    }
}

/// A discovered frame record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordEntry {
    pub index: u64,
    pub path: PathBuf,
}

/// Directory of frame records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameCache {
    dir: PathBuf,
}

impl FrameCache {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    #[must_use]
    pub fn record_path(&self, index: u64) -> PathBuf {
        self.dir.join(record_file_name(index))
    }

    pub fn create_dir(&self) -> Result<(), FrameCacheError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| FrameCacheError::io(&self.dir, e))
    }

    /// Persists `frame` as record `index`. Existing records are never replaced.
    pub fn write_record(&self, index: u64, frame: &FrameBuffer) -> Result<PathBuf, FrameCacheError> {
        let path = self.record_path(index);

        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|e| match e.kind() {
                ErrorKind::AlreadyExists => FrameCacheError::RecordExists {
                    index,
                    path: path.clone(),
                },
                _ => FrameCacheError::io(&path, e),
            })?;

        file.write_all(&encode_frame(frame))
            .and_then(|()| file.flush())
            .map_err(|e| FrameCacheError::io(&path, e))?;

        Ok(path)
    }

    pub fn read_record(&self, path: &Path) -> Result<FrameBuffer, FrameCacheError> {
        let bytes = std::fs::read(path).map_err(|e| FrameCacheError::io(path, e))?;

        decode_frame(&bytes).map_err(|source| FrameCacheError::Corrupt {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Lists every record in ascending frame index order.
    ///
    /// Entries that are not records are ignored; entries that look like records
    /// but carry no valid index are skipped with a warning.
    pub fn discover(&self) -> Result<Vec<RecordEntry>, FrameCacheError> {
        let listing = std::fs::read_dir(&self.dir).map_err(|e| FrameCacheError::io(&self.dir, e))?;
        let mut records = Vec::new();

        for entry in listing {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("Skipping unreadable entry in {}: {}", self.dir.display(), e);
                    continue;
                }
            };

            let file_name = entry.file_name();
            let Some(name) = file_name.to_str() else {
                debug!("Skipping non UTF-8 entry {:?}", file_name);
                continue;
            };

            match parse_record_index(name) {
                Some(_) if !is_file(&entry) => debug!("Skipping {}: not a regular file", name),
                Some(index) => records.push(RecordEntry {
                    index,
                    path: entry.path(),
                }),
                None if looks_like_record(name) => {
                    warn!("Skipping malformed frame record name {}", name);
                }
                None => debug!("Ignoring {}", name),
            }
        }

        records.sort_unstable_by_key(|record| record.index);

        Ok(records)
    }

    /// Removes every discovered record, returning how many were deleted.
    pub fn clear(&self) -> Result<usize, FrameCacheError> {
        let records = self.discover()?;

        for record in &records {
            std::fs::remove_file(&record.path).map_err(|e| FrameCacheError::io(&record.path, e))?;
        }

        Ok(records.len())
    }
}
