//! Error types for the file-level pipeline
//!
//! Rendering itself cannot fail; only reading the input and writing the results can.

use std::fmt;
use std::path::{Path, PathBuf};

/// Errors that can occur while publishing a help file
#[derive(Debug, Clone, PartialEq)]
pub enum HelpdocError {
    /// The Markdown input could not be read
    ReadInput { path: PathBuf, message: String },
    /// The rendered help file could not be written
    WriteOutput { path: PathBuf, message: String },
    /// The sidecar tags file could not be written
    WriteTags { path: PathBuf, message: String },
}

impl HelpdocError {
    pub(crate) fn read_input(path: &Path, err: std::io::Error) -> Self {
        HelpdocError::ReadInput {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    pub(crate) fn write_output(path: &Path, err: std::io::Error) -> Self {
        HelpdocError::WriteOutput {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    pub(crate) fn write_tags(path: &Path, err: std::io::Error) -> Self {
        HelpdocError::WriteTags {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    }

    /// The file the failed operation was working on.
    pub fn path(&self) -> &Path {
        match self {
            HelpdocError::ReadInput { path, .. }
            | HelpdocError::WriteOutput { path, .. }
            | HelpdocError::WriteTags { path, .. } => path,
        }
    }
}

impl fmt::Display for HelpdocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HelpdocError::ReadInput { path, message } => {
                write!(f, "unable to read from file '{}': {message}", path.display())
            }
            HelpdocError::WriteOutput { path, message } => {
                write!(f, "unable to write to file '{}': {message}", path.display())
            }
            HelpdocError::WriteTags { path, message } => {
                write!(f, "unable to write tag file '{}': {message}", path.display())
            }
        }
    }
}

impl std::error::Error for HelpdocError {}
