//! Main application handler

use std::sync::Arc;

use anyhow::Context;
use tracing::{debug, error, info, warn};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::ActiveEventLoop;
use winit::window::{Window, WindowId};

use super::config::{AppConfig, ShaderConfig};
use super::renderer::Renderer;
use super::window::window_attributes_from_config;
use crate::shader::{ShaderError, ShaderProgram, ShaderProgramSource};

/// Loads, splits, compiles and links the configured shader file
pub fn load_program(config: &ShaderConfig) -> Result<ShaderProgram, ShaderError> {
    let source = ShaderProgramSource::load_with_mode(&config.path, config.mode)?;

    if source.is_empty() {
        warn!(path = %config.path.display(), "Shader file produced no source text");
    }
    debug!("VERTEX\n{}", source.vertex);
    debug!("FRAGMENT\n{}", source.fragment);

    ShaderProgram::build(&source)
}

/// Quad viewer application
pub struct App {
    config: AppConfig,
    window: Option<Arc<Window>>,
    renderer: Option<Renderer>,
    init_error: Option<anyhow::Error>,
}

impl App {
    /// Creates a new application with the provided configuration
    pub fn new(config: AppConfig) -> Self {
        info!(profile = %config.profile, "Starting quad viewer");
        info!(?config.window, "Window configuration");
        info!(path = %config.shader.path.display(), mode = ?config.shader.mode, "Shader configuration");

        Self {
            config,
            window: None,
            renderer: None,
            init_error: None,
        }
    }

    /// Takes the error that stopped start-up, if any
    ///
    /// Checked after the event loop returns so a failed start-up exits
    /// with a non-zero status.
    pub fn take_error(&mut self) -> Option<anyhow::Error> {
        self.init_error.take()
    }

    /// Unwraps a start-up step, recording and logging its error
    fn check_init<T>(&mut self, step: &str, result: anyhow::Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                error!(error = %format!("{e:#}"), "{step}");
                self.init_error = Some(e.context(step.to_string()));
                None
            }
        }
    }

    fn init_graphics(
        &self,
        window: Arc<Window>,
        program: ShaderProgram,
    ) -> anyhow::Result<Renderer> {
        // winit's event loop is synchronous, device acquisition is not
        tokio::runtime::Runtime::new()
            .context("Failed to create tokio runtime")?
            .block_on(Renderer::new(
                window,
                program,
                self.config.window.vsync,
                self.config.clear_color(),
            ))
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() || self.init_error.is_some() {
            return;
        }

        let window_attributes = window_attributes_from_config(&self.config.window);
        let window = event_loop
            .create_window(window_attributes)
            .map(Arc::new)
            .map_err(anyhow::Error::from);
        let Some(window) = self.check_init("Failed to create window", window) else {
            event_loop.exit();
            return;
        };

        let size = window.inner_size();
        info!(
            window.width = size.width,
            window.height = size.height,
            "Window created successfully"
        );

        let program = load_program(&self.config.shader).map_err(anyhow::Error::from);
        let Some(program) = self.check_init("Failed to build shader program", program) else {
            event_loop.exit();
            return;
        };

        let renderer = self.init_graphics(window.clone(), program);
        let Some(renderer) = self.check_init("Failed to initialize renderer", renderer) else {
            event_loop.exit();
            return;
        };

        info!("Renderer initialized successfully");
        self.renderer = Some(renderer);
        self.window = Some(window.clone());
        window.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                info!("Close requested, exiting");
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size);
                }
            }
            WindowEvent::RedrawRequested => {
                if let (Some(renderer), Some(window)) = (&mut self.renderer, &self.window) {
                    match renderer.draw() {
                        Ok(()) => {}
                        Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                            warn!("Surface lost, reconfiguring");
                            renderer.resize(window.inner_size());
                        }
                        Err(wgpu::SurfaceError::OutOfMemory) => {
                            error!("Out of memory, exiting");
                            event_loop.exit();
                            return;
                        }
                        Err(e) => {
                            error!(error = %e, "Render error");
                        }
                    }
                    window.request_redraw();
                }
            }
            _ => {}
        }
    }
}
