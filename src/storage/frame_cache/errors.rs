use std::path::PathBuf;
use thiserror::Error;

use crate::storage::frame_cache::record::RecordError;

#[derive(Debug, Error)]
pub enum FrameCacheError {
    #[error("frame cache I/O failed at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("frame record {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: RecordError,
    },
    #[error("frame record {index} already exists at {path}")]
    RecordExists { index: u64, path: PathBuf },
    #[error("frame record {path} is {actual_width}x{actual_height}, expected {width}x{height}")]
    RasterMismatch {
        path: PathBuf,
        width: u32,
        height: u32,
        actual_width: u32,
        actual_height: u32,
    },
    #[error("no frame records found in {dir}")]
    Empty { dir: PathBuf },
    #[error("background frame writer is no longer running")]
    WriterStopped,
}

impl FrameCacheError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
