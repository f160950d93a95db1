//! Built-in health checks for core systems

pub mod build_info;
pub mod config;
pub mod geometry;
pub mod input;

pub use build_info::BuildInfoCheck;
pub use config::ConfigCheck;
pub use geometry::GeometryCheck;
pub use input::InputCheck;
