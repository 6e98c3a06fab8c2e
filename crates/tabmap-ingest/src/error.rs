//! Error types for source ingestion.

use std::path::PathBuf;

use tabmap_model::ProcessError;
use thiserror::Error;

/// Errors that can occur while decoding a source file.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Source file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Decoding Errors ===
    /// The delimited decoder failed on the stream as a whole.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// The workbook could not be opened or its sheet could not be read.
    #[error("failed to read workbook {path}: {message}")]
    Workbook { path: PathBuf, message: String },

    /// The workbook has no worksheet to read.
    #[error("no worksheet found in {path}")]
    NoWorksheet { path: PathBuf },
}

impl IngestError {
    pub(crate) fn from_io(path: &std::path::Path, error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source: error,
            }
        }
    }
}

impl From<IngestError> for ProcessError {
    fn from(err: IngestError) -> Self {
        Self::SourceRead {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/uploads/file.csv"),
        };
        assert_eq!(err.to_string(), "file not found: /uploads/file.csv");
    }

    #[test]
    fn test_error_into_process_error() {
        let err = IngestError::NoWorksheet {
            path: PathBuf::from("book.xlsx"),
        };
        let process: ProcessError = err.into();
        assert_eq!(process.code(), "SOURCE_READ_ERROR");
        assert!(process.to_string().contains("book.xlsx"));
    }
}
