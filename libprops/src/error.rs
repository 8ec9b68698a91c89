//! Error types for reading properties sources.
//!
//! Parsing itself never fails: every line classifies as a comment, a pair or
//! a key-only entry. Errors only come from the line source.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for properties operations.
pub type Result<T> = std::result::Result<T, PropertiesError>;

/// Error type for properties sources.
#[derive(Error, Debug)]
pub enum PropertiesError {
    /// The file could not be opened.
    #[error("Cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading a line failed (I/O error or invalid UTF-8).
    #[error("Cannot read line {line}: {source}")]
    Read {
        /// One-based number of the line being read.
        line: usize,
        #[source]
        source: io::Error,
    },

    /// Seeking back to the start of the source failed.
    #[error("Cannot rewind line source: {source}")]
    Rewind {
        #[source]
        source: io::Error,
    },
}

impl PropertiesError {
    /// The one-based line number this error refers to, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            PropertiesError::Read { line, .. } => Some(*line),
            _ => None,
        }
    }
}
