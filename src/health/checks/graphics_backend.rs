//! Graphics backend health check

use crate::health::check::{CheckResult, SystemCheck};

/// Checks that wgpu can see at least one graphics adapter
///
/// Headless machines without any adapter only produce a warning, so the
/// shader checks can still be run there.
pub struct GraphicsBackendCheck;

impl GraphicsBackendCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GraphicsBackendCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for GraphicsBackendCheck {
    fn name(&self) -> &'static str {
        "Graphics Backend"
    }

    fn check(&self) -> CheckResult {
        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });
        let mut details = vec!["  ✓ wgpu instance created".to_string()];

        let adapters: Vec<_> = instance
            .enumerate_adapters(wgpu::Backends::all())
            .into_iter()
            .collect();

        if adapters.is_empty() {
            details.push("  ⚠ No graphics adapters found".to_string());
            return CheckResult::warn("No graphics adapters available")
                .with_details(details.join("\n"));
        }

        let mut has_hardware = false;
        for (i, adapter) in adapters.iter().enumerate() {
            let info = adapter.get_info();
            let device_type = match info.device_type {
                wgpu::DeviceType::DiscreteGpu => "Discrete GPU",
                wgpu::DeviceType::IntegratedGpu => "Integrated GPU",
                wgpu::DeviceType::VirtualGpu => "Virtual GPU",
                wgpu::DeviceType::Cpu => "CPU",
                wgpu::DeviceType::Other => "Other",
            };
            has_hardware |= matches!(
                info.device_type,
                wgpu::DeviceType::DiscreteGpu | wgpu::DeviceType::IntegratedGpu
            );

            details.push(format!(
                "    [{i}] {} - {} ({:?})",
                info.name, device_type, info.backend
            ));
        }

        if has_hardware {
            CheckResult::pass(format!("{} adapter(s) found", adapters.len()))
                .with_details(details.join("\n"))
        } else {
            CheckResult::warn(format!(
                "{} adapter(s) found (no hardware GPU detected)",
                adapters.len()
            ))
            .with_details(details.join("\n"))
        }
    }
}
