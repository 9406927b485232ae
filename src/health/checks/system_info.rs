//! Host system health check

use sysinfo::System;

use crate::health::check::{CheckResult, SystemCheck};

/// Minimum memory below which the check warns, in GiB
const LOW_MEMORY_GIB: f64 = 1.0;

/// Gathers OS, CPU and memory information about the host
pub struct SystemInfoCheck;

impl SystemInfoCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SystemInfoCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for SystemInfoCheck {
    fn name(&self) -> &'static str {
        "System Info"
    }

    fn check(&self) -> CheckResult {
        let mut sys = System::new_all();
        sys.refresh_all();

        let unknown = || "Unknown".to_string();
        let logical_cores = sys.cpus().len();
        let physical_cores = System::physical_core_count().unwrap_or(logical_cores);
        let total_memory_gib = sys.total_memory() as f64 / 1_073_741_824.0;

        let details = [
            format!(
                "  OS: {} {}",
                System::name().unwrap_or_else(unknown),
                System::os_version().unwrap_or_else(unknown)
            ),
            format!("  Kernel: {}", System::kernel_version().unwrap_or_else(unknown)),
            format!("  CPU cores: {physical_cores} physical, {logical_cores} logical"),
            format!("  Memory: {total_memory_gib:.1} GiB total"),
        ]
        .join("\n");

        if logical_cores == 0 {
            CheckResult::warn("Unable to detect CPU cores").with_details(details)
        } else if total_memory_gib < LOW_MEMORY_GIB {
            CheckResult::warn("Low memory detected").with_details(details)
        } else {
            CheckResult::pass("System info gathered").with_details(details)
        }
    }
}
