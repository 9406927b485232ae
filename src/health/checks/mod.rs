//! Built-in health checks

pub mod build_info;
pub mod config;
pub mod graphics_backend;
pub mod shader;
pub mod system_info;

pub use build_info::BuildInfoCheck;
pub use config::ConfigCheck;
pub use graphics_backend::GraphicsBackendCheck;
pub use shader::ShaderCheck;
pub use system_info::SystemInfoCheck;
