//! Input adapters for the zoom animation.

#[cfg(feature = "gui")]
pub mod gui;
