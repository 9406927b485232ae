//! Shader file health check

use crate::app::ShaderConfig;
use crate::health::check::{CheckResult, SystemCheck};
use crate::shader::{ShaderError, ShaderProgram, ShaderProgramSource, ShaderStage, compile_stage};

/// Checks that the configured shader file splits, compiles and links
pub struct ShaderCheck {
    config: ShaderConfig,
}

impl ShaderCheck {
    pub fn new(config: ShaderConfig) -> Self {
        Self { config }
    }
}

impl Default for ShaderCheck {
    fn default() -> Self {
        Self::new(ShaderConfig::default())
    }
}

impl SystemCheck for ShaderCheck {
    fn name(&self) -> &'static str {
        "Shader"
    }

    fn check(&self) -> CheckResult {
        let path = self.config.path.display().to_string();
        let mut details = vec![format!("  File: {path} ({:?})", self.config.mode)];

        // Always split strictly here so missing sections show up even when
        // the app itself runs in lenient mode.
        let source = match ShaderProgramSource::load(&self.config.path) {
            Ok(source) => source,
            Err(e) => {
                details.push(format!("  ✗ {e}"));
                return CheckResult::fail("Shader file could not be split")
                    .with_details(details.join("\n"));
            }
        };

        let mut modules = Vec::with_capacity(ShaderStage::ALL.len());
        for stage in ShaderStage::ALL {
            let text = source.stage(stage);
            match compile_stage(stage, text) {
                Ok(module) => {
                    details.push(format!(
                        "  ✓ {stage}: {} lines, {} bytes",
                        text.lines().count(),
                        text.len()
                    ));
                    modules.push(module);
                }
                Err(ShaderError::Compile { log, .. }) => {
                    details.push(format!("  ✗ Failed to compile {stage}\n{log}"));
                    return CheckResult::fail(format!("{stage} stage failed to compile"))
                        .with_details(details.join("\n"));
                }
                Err(e) => {
                    details.push(format!("  ✗ {e}"));
                    return CheckResult::fail(format!("{stage} stage failed"))
                        .with_details(details.join("\n"));
                }
            }
        }

        let fragment = modules.pop();
        let vertex = modules.pop();
        let (Some(vertex), Some(fragment)) = (vertex, fragment) else {
            return CheckResult::fail("Missing compiled stage").with_details(details.join("\n"));
        };

        match ShaderProgram::link(vertex, fragment) {
            Ok(_) => {
                details.push("  ✓ Program linked".to_string());
                CheckResult::pass(format!("{} stages compiled and linked", ShaderStage::ALL.len()))
                    .with_details(details.join("\n"))
            }
            Err(e) => {
                details.push(format!("  ✗ {e}"));
                CheckResult::fail("Shader program failed to link").with_details(details.join("\n"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::check::CheckStatus;
    use crate::shader::LoadMode;
    use std::io::Write;

    fn check_file(contents: &str) -> (tempfile::NamedTempFile, CheckResult) {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        let check = ShaderCheck::new(ShaderConfig {
            path: file.path().to_path_buf(),
            mode: LoadMode::Lenient,
        });
        let result = check.check();
        (file, result)
    }

    #[test]
    fn test_bundled_shader_passes() {
        let result = ShaderCheck::default().check();

        assert_eq!(result.status, CheckStatus::Pass, "{:?}", result.details);
    }

    #[test]
    fn test_missing_section_fails_even_in_lenient_mode() {
        let (_file, result) = check_file("#shader fragment\nvoid main() {}\n");

        assert!(result.status.is_fail());
        assert!(result.details.unwrap().contains("vertex"));
    }

    #[test]
    fn test_compile_failure_names_stage() {
        let (_file, result) = check_file(
            "#shader vertex\n#version 450 core\nvoid main() { gl_Position = vec4(0.0); }\n\
             #shader fragment\n#version 450 core\nvoid main() { nope(); }\n",
        );

        assert!(result.status.is_fail());
        assert_eq!(result.message, "fragment stage failed to compile");
        assert!(result.details.unwrap().contains("Failed to compile fragment"));
    }
}
