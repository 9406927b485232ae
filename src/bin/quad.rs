use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use winit::event_loop::{ControlFlow, EventLoop};

use shader_quad::app::{App, AppConfig};
use shader_quad::health;
use shader_quad::shader::LoadMode;

/// Draws a colored quad from a combined vertex/fragment shader file
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Configuration profile (defaults to $APP_PROFILE, then "release")
    #[arg(long)]
    profile: Option<String>,

    /// Shader file to load instead of the configured one
    #[arg(long)]
    shader: Option<PathBuf>,

    /// Treat missing shader files and sections as empty instead of failing
    #[arg(long)]
    lenient: bool,

    /// Run the health checks, print a report and exit
    #[arg(long)]
    health: bool,
}

impl Cli {
    fn load_config(&self) -> AppConfig {
        let profile = self
            .profile
            .clone()
            .or_else(|| std::env::var("APP_PROFILE").ok())
            .unwrap_or_else(|| "release".to_string());

        let mut config = AppConfig::load(&profile).unwrap_or_else(|e| {
            warn!(error = %e, %profile, "Failed to load config, using default configuration");
            AppConfig::fallback(&profile)
        });

        if let Some(path) = &self.shader {
            config.shader.path = path.clone();
        }
        if self.lenient {
            config.shader.mode = LoadMode::Lenient;
        }
        config
    }
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let cli = Cli::parse();
    let config = cli.load_config();

    if cli.health {
        let report = health::run_all_checks(&config);
        health::print_report(&report);
        std::process::exit(report.exit_code());
    }

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(config);
    event_loop
        .run_app(&mut app)
        .context("Failed to run event loop")?;

    match app.take_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_apply_to_config() {
        let cli = Cli::try_parse_from([
            "quad",
            "--profile",
            "debug",
            "--shader",
            "other.shader",
            "--lenient",
        ])
        .unwrap();
        let config = cli.load_config();

        assert_eq!(config.profile, "debug");
        assert_eq!(config.shader.path, PathBuf::from("other.shader"));
        assert_eq!(config.shader.mode, LoadMode::Lenient);
    }

    #[test]
    fn test_defaults_keep_configured_shader() {
        let cli = Cli::try_parse_from(["quad", "--profile", "release"]).unwrap();
        let config = cli.load_config();

        assert!(!cli.health);
        assert_eq!(config.shader.path, PathBuf::from("res/shaders/Basic.shader"));
        assert_eq!(config.shader.mode, LoadMode::Strict);
    }
}
