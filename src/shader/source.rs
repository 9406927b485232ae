//! Shader source splitter
//!
//! A `.shader` file holds both stages of a program. Each stage starts at a
//! marker line containing `#shader` and the stage keyword:
//!
//! ```text
//! #shader vertex
//! ...vertex lines...
//! #shader fragment
//! ...fragment lines...
//! ```
//!
//! Lines before the first marker belong to no stage and are dropped. Marker
//! lines themselves are never part of the output.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use super::ShaderStage;

/// Token that identifies a section marker line
pub const MARKER: &str = "#shader";

/// Errors produced by the strict loader
#[derive(Debug, Error)]
pub enum ShaderSourceError {
    #[error("failed to read shader file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("shader file {path} has no `#shader {stage}` section")]
    MissingSection { path: PathBuf, stage: ShaderStage },
}

/// How missing files and missing sections are treated
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadMode {
    /// Missing files and sections are errors
    #[default]
    Strict,
    /// Missing files and sections produce empty strings
    Lenient,
}

/// Vertex and fragment text split out of one shader file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShaderProgramSource {
    pub vertex: String,
    pub fragment: String,
}

impl ShaderProgramSource {
    /// Splits an in-memory shader document
    pub fn parse(text: &str) -> Self {
        let mut splitter = ShaderSplitter::new();
        for line in text.split_inclusive('\n') {
            splitter.feed_line(line.strip_suffix('\n').unwrap_or(line));
        }
        splitter.finish()
    }

    /// Splits a shader document read line by line from `reader`
    ///
    /// A read error ends the input early, as if the stream had reached its
    /// end. Bytes that are not valid UTF-8 are replaced.
    pub fn from_reader<R: BufRead>(reader: R) -> Self {
        let mut splitter = ShaderSplitter::new();
        for line in reader.split(b'\n') {
            match line {
                Ok(bytes) => splitter.feed_line(&String::from_utf8_lossy(&bytes)),
                Err(e) => {
                    warn!(error = %e, "Shader stream read failed, stopping early");
                    break;
                }
            }
        }
        splitter.finish()
    }

    /// Loads and splits a shader file, reporting unreadable files and
    /// missing sections
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ShaderSourceError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ShaderSourceError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader_strict(BufReader::new(file), path)
    }

    /// Strict counterpart of [`Self::from_reader`]
    ///
    /// A read error is returned as [`ShaderSourceError::Io`] tagged with
    /// `path`, and both sections must have a marker.
    pub fn from_reader_strict<R: BufRead>(
        reader: R,
        path: &Path,
    ) -> Result<Self, ShaderSourceError> {
        let mut splitter = ShaderSplitter::new();
        for line in reader.split(b'\n') {
            let bytes = line.map_err(|source| ShaderSourceError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            splitter.feed_line(&String::from_utf8_lossy(&bytes));
        }

        if let Some(stage) = ShaderStage::ALL
            .into_iter()
            .find(|stage| !splitter.has_seen(*stage))
        {
            return Err(ShaderSourceError::MissingSection {
                path: path.to_path_buf(),
                stage,
            });
        }

        let source = splitter.finish();
        debug!(
            path = %path.display(),
            vertex.bytes = source.vertex.len(),
            fragment.bytes = source.fragment.len(),
            "Shader source loaded"
        );
        Ok(source)
    }

    /// Loads and splits a shader file without ever failing
    ///
    /// An unreadable file yields two empty strings, and so does a file
    /// without markers. Callers have to check [`Self::is_empty`] themselves.
    pub fn load_lenient(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match File::open(path) {
            Ok(file) => Self::from_reader(BufReader::new(file)),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Shader file unreadable, using empty sources");
                Self::default()
            }
        }
    }

    /// Loads a shader file with the given strictness
    pub fn load_with_mode(
        path: impl AsRef<Path>,
        mode: LoadMode,
    ) -> Result<Self, ShaderSourceError> {
        match mode {
            LoadMode::Strict => Self::load(path),
            LoadMode::Lenient => Ok(Self::load_lenient(path)),
        }
    }

    /// Returns the text of one stage
    pub fn stage(&self, stage: ShaderStage) -> &str {
        match stage {
            ShaderStage::Vertex => &self.vertex,
            ShaderStage::Fragment => &self.fragment,
        }
    }

    /// True when both stages are empty
    pub fn is_empty(&self) -> bool {
        self.vertex.is_empty() && self.fragment.is_empty()
    }
}

/// Line-at-a-time state machine behind [`ShaderProgramSource`]
#[derive(Debug, Default)]
pub struct ShaderSplitter {
    mode: Option<ShaderStage>,
    vertex: String,
    fragment: String,
    seen_vertex: bool,
    seen_fragment: bool,
}

impl ShaderSplitter {
    /// Creates a splitter with no active stage
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage currently receiving lines, `None` before the first marker
    pub fn mode(&self) -> Option<ShaderStage> {
        self.mode
    }

    /// Whether a marker for `stage` has been seen so far
    pub fn has_seen(&self, stage: ShaderStage) -> bool {
        match stage {
            ShaderStage::Vertex => self.seen_vertex,
            ShaderStage::Fragment => self.seen_fragment,
        }
    }

    /// Feeds one line, without its trailing `\n`
    pub fn feed_line(&mut self, line: &str) {
        if line.contains(MARKER) {
            // `vertex` wins when a marker names both stages; a marker naming
            // neither leaves the mode alone.
            if line.contains(ShaderStage::Vertex.keyword()) {
                self.mode = Some(ShaderStage::Vertex);
                self.seen_vertex = true;
            } else if line.contains(ShaderStage::Fragment.keyword()) {
                self.mode = Some(ShaderStage::Fragment);
                self.seen_fragment = true;
            }
            return;
        }

        let target = match self.mode {
            Some(ShaderStage::Vertex) => &mut self.vertex,
            Some(ShaderStage::Fragment) => &mut self.fragment,
            None => return,
        };
        target.push_str(line);
        target.push('\n');
    }

    /// Consumes the splitter and returns both accumulated sections
    pub fn finish(self) -> ShaderProgramSource {
        ShaderProgramSource {
            vertex: self.vertex,
            fragment: self.fragment,
        }
    }
}
