use std::path::PathBuf;
use thiserror::Error;

use crate::record::FieldError;

/// The main error type for figedit operations.
#[derive(Debug, Error)]
pub enum FigeditError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Failed to parse {format} input: {message}")]
    Parse {
        format: &'static str,
        message: String,
    },

    #[error("Line {line}: '{name}' is not a valid XML element name")]
    InvalidFieldName { line: usize, name: String },

    #[error("Line {line}: {source}")]
    FieldParse {
        line: usize,
        #[source]
        source: FieldError,
    },

    #[error("Record {index} is out of range (have {len} record(s))")]
    IndexOutOfRange { index: usize, len: usize },
}

impl FigeditError {
    pub(crate) fn parse(format: &'static str, message: impl Into<String>) -> Self {
        FigeditError::Parse {
            format,
            message: message.into(),
        }
    }
}
