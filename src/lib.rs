//! Shader Quad
//!
//! Draws a single colored quad with winit and wgpu, using a vertex and a
//! fragment shader split out of one `.shader` file.

/// Windowing, configuration and rendering
pub mod app;

/// Build-time information (timestamp, target, compiler)
pub mod build_info;

/// Startup self-checks
pub mod health;

/// Shader file splitting, compilation and linking
pub mod shader;
