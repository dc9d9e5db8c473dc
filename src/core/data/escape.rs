/// Outcome of iterating one plane point.
///
/// `iterations` is the step at which `|z|² > 4` was first observed, or the
/// iteration cap when the point never escaped.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Escape {
    pub diverged: bool,
    pub iterations: u32,
}

impl Escape {
    #[must_use]
    pub const fn diverged_at(iterations: u32) -> Self {
        Self {
            diverged: true,
            iterations,
        }
    }

    #[must_use]
    pub const fn interior(max_iterations: u32) -> Self {
        Self {
            diverged: false,
            iterations: max_iterations,
        }
    }
}
