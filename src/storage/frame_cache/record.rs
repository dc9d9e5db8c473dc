use bytemuck::{Pod, Zeroable};
use thiserror::Error;

use crate::core::data::frame_buffer::{FrameBuffer, FrameBufferError};
use crate::core::data::pixel::Pixel;
use crate::core::data::raster::{Raster, RasterError};

pub const RECORD_MAGIC: [u8; 4] = *b"FZCF";
pub const RECORD_VERSION: u32 = 1;

const RECORD_PREFIX: &str = "dump_";
const RECORD_SUFFIX: &str = ".bin";

pub const HEADER_LEN: usize = std::mem::size_of::<RecordHeader>();
pub const PIXEL_LEN: usize = std::mem::size_of::<Pixel>();

/// Fixed record prefix. All integers are little-endian on disk.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Pod, Zeroable)]
pub struct RecordHeader {
    pub magic: [u8; 4],
    pub version: u32,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("record is {len} bytes, shorter than the record header")]
    Truncated { len: usize },
    #[error("unrecognised magic {found:?}")]
    BadMagic { found: [u8; 4] },
    #[error("unsupported record version {version}")]
    UnsupportedVersion { version: u32 },
    #[error("pixel data is {actual} bytes, expected {expected}")]
    Length { expected: usize, actual: usize },
    #[error(transparent)]
    Raster(#[from] RasterError),
    #[error(transparent)]
    Layout(#[from] FrameBufferError),
}

#[must_use]
pub fn record_file_name(index: u64) -> String {
    format!("{RECORD_PREFIX}{index}{RECORD_SUFFIX}")
}

/// Whether `name` has the record prefix and suffix, well-formed or not.
#[must_use]
pub fn looks_like_record(name: &str) -> bool {
    name.starts_with(RECORD_PREFIX) && name.ends_with(RECORD_SUFFIX)
}

/// Frame index embedded in a record name.
///
/// Only plain decimal indices are accepted. Leading zeros are rejected so that
/// every index has exactly one file name.
#[must_use]
pub fn parse_record_index(name: &str) -> Option<u64> {
    let digits = name.strip_prefix(RECORD_PREFIX)?.strip_suffix(RECORD_SUFFIX)?;

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }

    digits.parse().ok()
}

#[must_use]
pub fn encode_frame(frame: &FrameBuffer) -> Vec<u8> {
    let raster = frame.raster();
    let header = RecordHeader {
        magic: RECORD_MAGIC,
        version: RECORD_VERSION.to_le(),
        width: raster.width().to_le(),
        height: raster.height().to_le(),
    };

    let mut bytes = Vec::with_capacity(HEADER_LEN + frame.pixels().len() * PIXEL_LEN);
    bytes.extend_from_slice(bytemuck::bytes_of(&header));

    for pixel in frame.pixels() {
        bytes.extend_from_slice(bytemuck::bytes_of(&pixel.to_le()));
    }

    bytes
}

pub fn decode_frame(bytes: &[u8]) -> Result<FrameBuffer, RecordError> {
    if bytes.len() < HEADER_LEN {
        return Err(RecordError::Truncated { len: bytes.len() });
    }

    let (head, body) = bytes.split_at(HEADER_LEN);
    let header: RecordHeader = bytemuck::pod_read_unaligned(head);

    if header.magic != RECORD_MAGIC {
        return Err(RecordError::BadMagic {
            found: header.magic,
        });
    }

    let version = u32::from_le(header.version);
    if version != RECORD_VERSION {
        return Err(RecordError::UnsupportedVersion { version });
    }

    let raster = Raster::new(u32::from_le(header.width), u32::from_le(header.height))?;
    let expected = raster.size().saturating_mul(PIXEL_LEN);

    if body.len() != expected {
        return Err(RecordError::Length {
            expected,
            actual: body.len(),
        });
    }

    let pixels = body
        .chunks_exact(PIXEL_LEN)
        .map(|chunk| bytemuck::pod_read_unaligned::<Pixel>(chunk).from_le())
        .collect();

    Ok(FrameBuffer::from_pixels(raster, pixels)?)
}
