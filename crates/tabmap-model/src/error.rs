use thiserror::Error;

use crate::processing::Pipeline;

/// Errors that abort a whole request. No artifact is written when one of
/// these is returned.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The source decoded to zero data rows.
    #[error("no rows found in the uploaded file")]
    EmptySource,

    /// Rows were decoded but none survived filtering and deduplication.
    #[error("not enough data to produce a {pipeline} file ({rows_read} rows read, 0 records kept)")]
    InsufficientData { pipeline: Pipeline, rows_read: usize },

    /// The file-type discriminator was neither csv nor excel.
    #[error("unsupported file type '{value}' (expected csv or excel)")]
    UnsupportedFileType { value: String },

    /// The underlying decoder failed.
    #[error("error reading source: {message}")]
    SourceRead { message: String },

    /// A column mapping file could not be read or parsed.
    #[error("invalid column mapping {path}: {message}")]
    InvalidMapping { path: String, message: String },
}

impl ProcessError {
    /// Stable code for structured failure replies.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptySource => "EMPTY_SOURCE",
            Self::InsufficientData { .. } => "INSUFFICIENT_DATA",
            Self::UnsupportedFileType { .. } => "UNSUPPORTED_FILE_TYPE",
            Self::SourceRead { .. } => "SOURCE_READ_ERROR",
            Self::InvalidMapping { .. } => "INVALID_MAPPING",
        }
    }
}

/// A failure confined to one source row. The row is dropped and the batch
/// continues.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    /// The delimited decoder could not decode this record.
    #[error("line {line}: {reason}")]
    Decode { line: u64, reason: String },

    /// A spreadsheet cell holds an error value such as `#DIV/0!`.
    #[error("row {row}, column {column}: cell error {value}")]
    CellError {
        row: usize,
        column: usize,
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, ProcessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct() {
        let errors = [
            ProcessError::EmptySource,
            ProcessError::InsufficientData {
                pipeline: Pipeline::Contacts,
                rows_read: 3,
            },
            ProcessError::UnsupportedFileType {
                value: "pdf".to_string(),
            },
            ProcessError::SourceRead {
                message: "boom".to_string(),
            },
            ProcessError::InvalidMapping {
                path: "mapping.json".to_string(),
                message: "expected value".to_string(),
            },
        ];
        let mut codes: Vec<&str> = errors.iter().map(ProcessError::code).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), 5);
    }

    #[test]
    fn insufficient_data_message_names_pipeline() {
        let err = ProcessError::InsufficientData {
            pipeline: Pipeline::Transactions,
            rows_read: 2,
        };
        assert_eq!(
            err.to_string(),
            "not enough data to produce a transactions file (2 rows read, 0 records kept)"
        );
    }
}
