use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EscapeTimeError {
    #[error("maximum iterations must be greater than zero")]
    ZeroMaxIterations,
}
