//! Windowed presentation host.
//!
//! winit owns the window and event loop, pixels owns the framebuffer. The
//! animation driver is ticked once per redraw and its current frame blitted.

mod app;

pub use app::{GuiOptions, run_gui};
