use std::path::PathBuf;

use thiserror::Error;

/// Broad class of a conversion failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or unreadable input
    Input,
    /// Unsupported or corrupt image data
    Decode,
    /// Failure creating or writing an output artifact
    Output,
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Input file not found: {}", path.display())]
    InputMissing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot read input file: {}", path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unrecognized image format")]
    UnknownFormat,

    #[error("Image decode error: {0}")]
    Decode(String),

    #[error("Cannot create output file: {}", path.display())]
    OutputCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write output file: {}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::InputMissing { .. } | ConvertError::InputRead { .. } => ErrorKind::Input,
            ConvertError::UnknownFormat | ConvertError::Decode(_) => ErrorKind::Decode,
            ConvertError::OutputCreate { .. } | ConvertError::OutputWrite { .. } => {
                ErrorKind::Output
            }
        }
    }
}
