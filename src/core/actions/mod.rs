pub mod cancellation;
pub mod compose_frame;
