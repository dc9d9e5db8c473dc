pub mod complex;
pub mod escape;
pub mod frame_buffer;
pub mod mode;
pub mod pixel;
pub mod raster;
pub mod viewport;
