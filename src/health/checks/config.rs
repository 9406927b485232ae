//! Configuration health check

use crate::app::AppConfig;
use crate::health::check::{CheckResult, SystemCheck};

/// Checks that every profile loads and points at an existing shader file
pub struct ConfigCheck {
    profiles: Vec<&'static str>,
}

impl ConfigCheck {
    /// Creates a config check for the debug and release profiles
    pub fn new() -> Self {
        Self {
            profiles: vec!["debug", "release"],
        }
    }
}

impl Default for ConfigCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for ConfigCheck {
    fn name(&self) -> &'static str {
        "Configuration"
    }

    fn check(&self) -> CheckResult {
        let mut details = Vec::new();
        let mut failed = false;
        let mut warned = false;

        for profile in &self.profiles {
            match AppConfig::load(profile) {
                Ok(config) => {
                    details.push(format!(
                        "  ✓ Profile '{}': window {}x{}, shader {} ({:?})",
                        profile,
                        config.window.width,
                        config.window.height,
                        config.shader.path.display(),
                        config.shader.mode
                    ));
                    if !config.shader.path.exists() {
                        details.push(format!(
                            "  ⚠ Profile '{}': shader file {} not found",
                            profile,
                            config.shader.path.display()
                        ));
                        warned = true;
                    }
                }
                Err(e) => {
                    details.push(format!("  ✗ Profile '{}': failed to load - {}", profile, e));
                    failed = true;
                }
            }
        }

        match AppConfig::load_from_env() {
            Ok(config) => {
                details.push(format!(
                    "  ✓ Environment config: profile '{}' loaded",
                    config.profile
                ));
            }
            Err(e) => {
                details.push(format!("  ⚠ Environment config: {}", e));
                warned = true;
            }
        }

        let details = details.join("\n");
        if failed {
            CheckResult::fail("Failed to load one or more config profiles").with_details(details)
        } else if warned {
            CheckResult::warn("Config loaded with warnings").with_details(details)
        } else {
            CheckResult::pass(format!("{} profiles validated", self.profiles.len()))
                .with_details(details)
        }
    }
}
