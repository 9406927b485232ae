//! Shader compilation and linking
//!
//! Each stage is compiled on its own from GLSL with naga's front end and
//! validated before anything touches the GPU. Linking checks that both
//! modules expose a `main` entry point for their stage.

use naga::front::glsl::{Frontend, Options};
use naga::valid::{Capabilities, ValidationFlags, Validator};
use thiserror::Error;
use tracing::{debug, error};

use super::ShaderStage;
use super::source::{ShaderProgramSource, ShaderSourceError};

/// Entry point name every stage must define
pub const ENTRY_POINT: &str = "main";

#[derive(Debug, Error)]
pub enum ShaderError {
    #[error(transparent)]
    Source(#[from] ShaderSourceError),
    #[error("failed to compile {stage} shader:\n{log}")]
    Compile { stage: ShaderStage, log: String },
    #[error("failed to link shader program: {0}")]
    Link(String),
}

/// Compiles one stage of GLSL into a validated naga module
///
/// On failure the error carries the stage and the rendered diagnostic log.
pub fn compile_stage(stage: ShaderStage, source: &str) -> Result<naga::Module, ShaderError> {
    let mut frontend = Frontend::default();
    let module = frontend
        .parse(&Options::from(stage.to_naga()), source)
        .map_err(|e| ShaderError::Compile {
            stage,
            log: e.emit_to_string(source),
        })?;

    Validator::new(ValidationFlags::all(), Capabilities::empty())
        .validate(&module)
        .map_err(|e| ShaderError::Compile {
            stage,
            log: e.emit_to_string(source),
        })?;

    debug!(
        %stage,
        entry_points = module.entry_points.len(),
        "Shader stage compiled"
    );
    Ok(module)
}

/// A linked vertex + fragment program, ready for pipeline creation
#[derive(Debug)]
pub struct ShaderProgram {
    vertex: naga::Module,
    fragment: naga::Module,
}

impl ShaderProgram {
    /// Compiles and links both stages of `source`
    ///
    /// Compile failures are logged as `Failed to compile <stage>` together
    /// with the diagnostic log before being returned.
    pub fn build(source: &ShaderProgramSource) -> Result<Self, ShaderError> {
        let vertex = Self::compile_logged(ShaderStage::Vertex, &source.vertex)?;
        let fragment = Self::compile_logged(ShaderStage::Fragment, &source.fragment)?;
        Self::link(vertex, fragment)
    }

    /// Links two compiled modules into a program
    pub fn link(vertex: naga::Module, fragment: naga::Module) -> Result<Self, ShaderError> {
        for (stage, module) in [
            (ShaderStage::Vertex, &vertex),
            (ShaderStage::Fragment, &fragment),
        ] {
            let found = module
                .entry_points
                .iter()
                .any(|ep| ep.name == ENTRY_POINT && ep.stage == stage.to_naga());
            if !found {
                return Err(ShaderError::Link(format!(
                    "{stage} module has no `{ENTRY_POINT}` entry point"
                )));
            }
        }

        Ok(Self { vertex, fragment })
    }

    /// Returns the compiled module of one stage
    pub fn module(&self, stage: ShaderStage) -> &naga::Module {
        match stage {
            ShaderStage::Vertex => &self.vertex,
            ShaderStage::Fragment => &self.fragment,
        }
    }

    /// Consumes the program, returning `(vertex, fragment)`
    pub fn into_modules(self) -> (naga::Module, naga::Module) {
        (self.vertex, self.fragment)
    }

    fn compile_logged(stage: ShaderStage, source: &str) -> Result<naga::Module, ShaderError> {
        compile_stage(stage, source).inspect_err(|e| {
            if let ShaderError::Compile { stage, log } = e {
                error!("Failed to compile {stage}");
                error!("{log}");
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VERTEX: &str = "#version 450 core\n\
        layout(location = 0) in vec2 position;\n\
        void main() { gl_Position = vec4(position, 0.0, 1.0); }\n";

    const FRAGMENT: &str = "#version 450 core\n\
        layout(location = 0) out vec4 color;\n\
        void main() { color = vec4(1.0, 0.0, 0.0, 1.0); }\n";

    #[test]
    fn test_compile_valid_stages() {
        let vertex = compile_stage(ShaderStage::Vertex, VERTEX).unwrap();
        let fragment = compile_stage(ShaderStage::Fragment, FRAGMENT).unwrap();

        assert_eq!(vertex.entry_points.len(), 1);
        assert_eq!(fragment.entry_points[0].stage, naga::ShaderStage::Fragment);
    }

    #[test]
    fn test_compile_error_reports_stage_and_log() {
        let broken = "#version 450 core\nvoid main() { undefined_call(); }\n";

        match compile_stage(ShaderStage::Vertex, broken) {
            Err(ShaderError::Compile { stage, log }) => {
                assert_eq!(stage, ShaderStage::Vertex);
                assert!(!log.is_empty());
            }
            other => panic!("expected compile error, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_stage_fails_to_compile() {
        let err = compile_stage(ShaderStage::Fragment, "").unwrap_err();

        assert!(matches!(
            err,
            ShaderError::Compile {
                stage: ShaderStage::Fragment,
                ..
            }
        ));
    }

    #[test]
    fn test_build_from_split_source() {
        let text = format!("#shader vertex\n{VERTEX}#shader fragment\n{FRAGMENT}");
        let source = ShaderProgramSource::parse(&text);

        let program = ShaderProgram::build(&source).unwrap();
        assert_eq!(
            program.module(ShaderStage::Vertex).entry_points[0].name,
            ENTRY_POINT
        );
    }

    #[test]
    fn test_link_rejects_swapped_stages() {
        let vertex = compile_stage(ShaderStage::Vertex, VERTEX).unwrap();
        let fragment = compile_stage(ShaderStage::Fragment, FRAGMENT).unwrap();

        let err = ShaderProgram::link(fragment, vertex).unwrap_err();
        assert!(matches!(err, ShaderError::Link(_)));
    }

    #[test]
    fn test_build_stops_at_first_failing_stage() {
        let source = ShaderProgramSource {
            vertex: String::new(),
            fragment: FRAGMENT.to_string(),
        };

        let err = ShaderProgram::build(&source).unwrap_err();
        assert!(matches!(
            err,
            ShaderError::Compile {
                stage: ShaderStage::Vertex,
                ..
            }
        ));
    }
}
