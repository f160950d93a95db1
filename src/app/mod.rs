//! Input viewer application
//!
//! Opens a window and feeds winit events through the input tracker.

mod runner;

pub use runner::{App, window_attributes};
