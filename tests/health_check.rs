//! Integration tests for the health check system

use shader_quad::app::{AppConfig, ShaderConfig};
use shader_quad::health::{self, HealthCheckRunner, SystemCheck, checks::*};
use shader_quad::shader::LoadMode;

#[test]
fn test_all_health_checks() {
    let report = health::run_all_checks(&AppConfig::fallback("release"));

    if !report.is_healthy() {
        eprintln!("\n{}", health::format_report(&report));
        eprintln!("{}", health::format_details(&report));
    }

    assert!(
        report.is_healthy(),
        "Health checks failed: {} failures, {} warnings",
        report.failed,
        report.warned
    );
}

#[test]
fn test_config_check() {
    let result = ConfigCheck::new().check();

    assert!(
        result.status.is_ok(),
        "Config check failed: {}",
        result.message
    );
}

#[test]
fn test_shader_check() {
    let result = ShaderCheck::default().check();

    assert!(
        result.status.is_ok(),
        "Shader check failed: {}",
        result.message
    );
}

#[test]
fn test_shader_check_missing_file_fails() {
    let check = ShaderCheck::new(ShaderConfig {
        path: "res/shaders/missing.shader".into(),
        mode: LoadMode::Strict,
    });

    assert!(check.check().status.is_fail());
}

#[test]
fn test_build_info_check() {
    let result = BuildInfoCheck::new().check();

    assert!(
        result.status.is_ok(),
        "Build info check failed: {}",
        result.message
    );
}

#[test]
fn test_system_info_check() {
    let result = SystemInfoCheck::new().check();

    assert!(
        result.status.is_ok(),
        "System info check failed: {}",
        result.message
    );
}

#[test]
fn test_graphics_backend_check() {
    let result = GraphicsBackendCheck::new().check();

    assert!(
        result.status.is_ok(),
        "Graphics backend check failed: {}",
        result.message
    );
}

#[test]
fn test_runner_collects_all_checks() {
    let report = HealthCheckRunner::new()
        .add_check(ConfigCheck::new())
        .add_check(ShaderCheck::default())
        .run();

    assert_eq!(report.total, 2, "Expected 2 checks in report");
    assert_eq!(report.passed + report.warned + report.failed, report.total);
    assert_eq!(report.results[1].0, "Shader");
}
