use std::io::{BufWriter, Write};
use std::path::Path;

use crate::adapters::pixel_format::argb_to_rgb_bytes;
use crate::core::data::frame_buffer::FrameBuffer;

/// Writes one frame as a binary PPM, creating parent directories as needed.
pub fn write_ppm(frame: &FrameBuffer, filepath: impl AsRef<Path>) -> std::io::Result<()> {
    let filepath = filepath.as_ref();

    if let Some(parent) = filepath.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let mut file = BufWriter::new(std::fs::File::create(filepath)?);
    let raster = frame.raster();

    // PPM header: P6 means binary RGB, then width height max_colour
    writeln!(file, "P6")?;
    writeln!(file, "{} {}", raster.width(), raster.height())?;
    writeln!(file, "255")?;
    file.write_all(&argb_to_rgb_bytes(frame))?;
    file.flush()?;

    Ok(())
}
