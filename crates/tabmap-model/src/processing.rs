use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProcessError;

/// The two independent transformation pipelines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Pipeline {
    Transactions,
    Contacts,
}

impl Pipeline {
    /// Fixed artifact name for this pipeline.
    pub fn artifact_name(self) -> &'static str {
        match self {
            Self::Transactions => "processed_file.csv",
            Self::Contacts => "contacts_file.csv",
        }
    }
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transactions => f.write_str("transactions"),
            Self::Contacts => f.write_str("contacts"),
        }
    }
}

/// Discriminator selecting the decode path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Csv,
    Excel,
}

impl FileType {
    /// Infer the file type from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self, ProcessError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "csv" | "txt" => Ok(Self::Csv),
            "xlsx" | "xlsm" | "xls" | "xlsb" | "ods" => Ok(Self::Excel),
            _ => Err(ProcessError::UnsupportedFileType {
                value: if extension.is_empty() {
                    path.display().to_string()
                } else {
                    extension
                },
            }),
        }
    }
}

impl FromStr for FileType {
    type Err = ProcessError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "excel" | "xlsx" | "xls" => Ok(Self::Excel),
            _ => Err(ProcessError::UnsupportedFileType {
                value: value.to_string(),
            }),
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Csv => f.write_str("csv"),
            Self::Excel => f.write_str("excel"),
        }
    }
}

/// Reply for one request, successful or not.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_records: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_contacts: Option<usize>,
}

impl ProcessResponse {
    pub fn success(pipeline: Pipeline, download: PathBuf, records: usize) -> Self {
        let (total_records, total_contacts) = match pipeline {
            Pipeline::Transactions => (Some(records), None),
            Pipeline::Contacts => (Some(records), Some(records)),
        };
        Self {
            success: true,
            code: None,
            message: None,
            download: Some(download),
            total_records,
            total_contacts,
        }
    }

    pub fn failure(error: &ProcessError) -> Self {
        Self {
            success: false,
            code: Some(error.code().to_string()),
            message: Some(error.to_string()),
            download: None,
            total_records: None,
            total_contacts: None,
        }
    }
}
