//! Animation controller: owns the engine state and decides, per tick, whether
//! a frame is composed or replayed from the frame cache.

mod driver;
pub mod engine_state;
pub mod errors;
pub mod ports;

pub use driver::{AnimationDriver, Phase};
pub use engine_state::EngineState;
pub use errors::DriverError;
pub use ports::frame_sink::FrameSink;
