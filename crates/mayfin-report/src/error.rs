use std::fmt;
use std::path::PathBuf;

/// Fatal conditions for one report build.
///
/// Soft conditions (unparsable numerics, missing fields) never reach this
/// type; they degrade to placeholders inside the formatter and rule engine.
#[derive(Debug)]
pub enum ReportError {
    /// The input record file could not be read.
    Input { path: PathBuf, source: std::io::Error },
    /// The input bytes were not a valid structured record.
    Decode { path: PathBuf, source: serde_json::Error },
    /// The document renderer could not produce the artifact.
    Render { path: PathBuf, source: RenderError },
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::Input { path, source } => {
                write!(f, "unable to read input record {}: {}", path.display(), source)
            }
            ReportError::Decode { path, source } => {
                write!(f, "invalid report record in {}: {}", path.display(), source)
            }
            ReportError::Render { path, source } => {
                write!(f, "renderer failed for {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::Input { source, .. } => Some(source),
            ReportError::Decode { source, .. } => Some(source),
            ReportError::Render { source, .. } => Some(source),
        }
    }
}

/// Failure reported by a [`crate::render::DocumentRenderer`] implementation.
#[derive(Debug)]
pub enum RenderError {
    Io(std::io::Error),
    Serialize(serde_json::Error),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Io(err) => write!(f, "io error: {err}"),
            RenderError::Serialize(err) => write!(f, "serialization error: {err}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Io(err) => Some(err),
            RenderError::Serialize(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for RenderError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for RenderError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}
