//! Quad viewer application
//!
//! Handles windowing, configuration and rendering.

pub mod config;
pub mod geometry;
pub mod renderer;
mod runner;
mod window;

pub use config::{AppConfig, RenderConfig, ShaderConfig, WindowConfig};
pub use runner::{App, load_program};
pub use window::window_attributes_from_config;
