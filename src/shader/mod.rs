//! Shader loading and compilation
//!
//! - `source`: splits a `.shader` file into its vertex and fragment sections
//! - `program`: compiles each stage with naga and links them into a program

use std::fmt;

pub mod program;
pub mod source;

pub use program::{ShaderError, ShaderProgram, compile_stage};
pub use source::{LoadMode, ShaderProgramSource, ShaderSourceError, ShaderSplitter};

/// One of the two programmable stages held in a shader file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl ShaderStage {
    /// Both stages, in the order they are compiled
    pub const ALL: [ShaderStage; 2] = [ShaderStage::Vertex, ShaderStage::Fragment];

    /// Keyword that selects this stage in a `#shader` marker line
    pub fn keyword(&self) -> &'static str {
        match self {
            ShaderStage::Vertex => "vertex",
            ShaderStage::Fragment => "fragment",
        }
    }

    pub(crate) fn to_naga(self) -> naga::ShaderStage {
        match self {
            ShaderStage::Vertex => naga::ShaderStage::Vertex,
            ShaderStage::Fragment => naga::ShaderStage::Fragment,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
