#[allow(clippy::module_inception)]
pub mod compose_frame;
pub mod ports;
