//! Error types and handling infrastructure for path extraction

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Main error type for extraction runs
///
/// Every variant is fatal: the run stops at the first input that fails.
/// A field path that does not match is not an error and never shows up here.
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    #[error("IO error reading {}: {source}", path_label(.path))]
    Io {
        path: Option<PathBuf>,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Failed to write output: {0}")]
    Output(#[source] io::Error),
}

fn path_label(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "standard input".to_string(),
    }
}

impl ExtractError {
    pub fn io(path: Option<PathBuf>, source: io::Error) -> Self {
        Self::Io { path, source }
    }

    pub fn output(source: io::Error) -> Self {
        Self::Output(source)
    }

    /// True when the reader on the other end of stdout went away
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Output(e) if e.kind() == io::ErrorKind::BrokenPipe)
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Io { path, source } => match source.kind() {
                io::ErrorKind::NotFound => {
                    format!("Input file not found: {}", path_label(path))
                }
                io::ErrorKind::PermissionDenied => {
                    format!("Permission denied: {}", path_label(path))
                }
                io::ErrorKind::InvalidData => {
                    format!("Input is not valid UTF-8: {}", path_label(path))
                }
                _ => self.to_string(),
            },
            Self::Parse(err) => {
                if let Some((line, col)) = err.location {
                    format!(
                        "JSON parse error in {} at line {}, column {}: {}",
                        err.source_name, line, col, err.message
                    )
                } else {
                    format!("JSON parse error in {}: {}", err.source_name, err.message)
                }
            }
            Self::Output(_) => self.to_string(),
        }
    }
}

/// JSON parsing errors
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub source_name: String,
    pub location: Option<(usize, usize)>,
}

impl ParseError {
    pub fn new(message: String, source_name: String, location: Option<(usize, usize)>) -> Self {
        Self {
            message,
            source_name,
            location,
        }
    }

    /// Build from a serde_json error, keeping its line and column
    pub fn from_json(error: &serde_json::Error, source_name: String) -> Self {
        let location = if error.line() > 0 {
            Some((error.line(), error.column()))
        } else {
            None
        };

        // serde_json appends " at line X column Y" itself; keep only the reason
        let message = error.to_string();
        let message = match message.rfind(" at line ") {
            Some(idx) if location.is_some() => message[..idx].to_string(),
            _ => message,
        };

        Self::new(message, source_name, location)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.source_name, self.message)?;
        if let Some((line, col)) = self.location {
            write!(f, " at line {}, column {}", line, col)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Result type for extraction runs
pub type ExtractResult<T> = Result<T, ExtractError>;

/// Convenience result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
