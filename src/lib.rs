//! Pixelkit
//!
//! 2D integer/float geometry primitives and a frame-based input tracker
//! built on winit.

/// Viewer application - window, event loop, and input logging
pub mod app;

/// Build-time information (git SHA, rustc, timestamp, etc.)
pub mod build_info;

/// Profile-based configuration (files + `APP_` environment overrides)
pub mod config;

/// Point, FPoint, Rect and FRect value types
pub mod geometry;

/// Startup health checks
pub mod health;

/// Event sources, per-frame key/button state and callbacks
pub mod input;
