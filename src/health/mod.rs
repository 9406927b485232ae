//! Health checks for validating the viewer can start
//!
//! Used by `quad --health` and by the integration tests.
//!
//! # Example
//!
//! ```no_run
//! use shader_quad::app::AppConfig;
//! use shader_quad::health;
//!
//! let report = health::run_all_checks(&AppConfig::fallback("release"));
//! health::print_report(&report);
//! std::process::exit(report.exit_code());
//! ```

pub mod check;
pub mod checks;
pub mod reporter;
pub mod runner;

pub use check::{CheckResult, CheckStatus, SystemCheck};
pub use reporter::{format_details, format_report, print_report};
pub use runner::{HealthCheckReport, HealthCheckRunner};

use crate::app::AppConfig;

/// Runs the default checks against `config`
pub fn run_all_checks(config: &AppConfig) -> HealthCheckReport {
    HealthCheckRunner::new()
        .add_check(checks::ConfigCheck::new())
        .add_check(checks::ShaderCheck::new(config.shader.clone()))
        .add_check(checks::BuildInfoCheck::new())
        .add_check(checks::SystemInfoCheck::new())
        .add_check(checks::GraphicsBackendCheck::new())
        .run()
}
