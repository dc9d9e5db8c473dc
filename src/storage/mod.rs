pub mod frame_cache;
pub mod write_ppm;
