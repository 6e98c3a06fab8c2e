//! One request end to end: read the source, map rows, write the artifact.
//!
//! Every abort path returns before the writer runs, so a failed request
//! never leaves an artifact behind.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tabmap_ingest::{SourceTable, read_source};
use tabmap_model::{
    ColumnMapping, FileType, NormalizationOptions, Pipeline, ProcessError, ProcessResponse,
    TransactionColumns,
};
use tabmap_report::{WriterOptions, write_artifact};
use tabmap_transform::{map_contacts, map_transactions};
use tracing::{debug, error, info, info_span, trace};

use crate::logging::redact_value;
use crate::types::RunReport;

/// Code reported when the artifact itself could not be written.
pub const OUTPUT_WRITE_ERROR: &str = "OUTPUT_WRITE_ERROR";

/// Where the uploaded file lives and how to decode it.
#[derive(Debug, Clone)]
pub struct SourceInput {
    pub path: PathBuf,
    /// Explicit discriminator (`csv`, `excel`); inferred from the extension
    /// when absent.
    pub file_type: Option<String>,
}

impl SourceInput {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file_type: None,
        }
    }

    #[must_use]
    pub fn with_file_type(mut self, file_type: impl Into<String>) -> Self {
        self.file_type = Some(file_type.into());
        self
    }
}

/// Where and how the artifact is written.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub dir: PathBuf,
    pub writer: WriterOptions,
}

impl OutputConfig {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            writer: WriterOptions::default(),
        }
    }
}

/// Pick the decoder: explicit discriminator first, then the extension.
pub fn resolve_file_type(
    path: &Path,
    discriminator: Option<&str>,
) -> Result<FileType, ProcessError> {
    match discriminator {
        Some(value) => value.parse(),
        None => FileType::from_path(path),
    }
}

/// Decode the whole source.
pub fn ingest(source: &SourceInput) -> Result<SourceTable, ProcessError> {
    let file_type = resolve_file_type(&source.path, source.file_type.as_deref())?;
    Ok(read_source(&source.path, file_type)?)
}

/// Run the transaction pipeline.
pub fn run_transactions(
    source: &SourceInput,
    columns: &TransactionColumns,
    output: &OutputConfig,
) -> Result<RunReport> {
    let pipeline = Pipeline::Transactions;
    let span = info_span!("request", %pipeline, path = %source.path.display());
    let _guard = span.enter();
    debug!(?columns, "transaction columns");

    let table = ingest(source).inspect_err(log_abort)?;
    let batch = map_transactions(&table, columns).inspect_err(log_abort)?;
    for record in &batch.records {
        trace!(
            mobile = redact_value(&record.mobile),
            bill_number = %record.bill_number,
            bill_amount = %record.bill_amount,
            "transaction record"
        );
    }

    let artifact = write_artifact(&output.dir, pipeline, &batch.records, output.writer)
        .context("write transactions artifact")?;
    info!(path = %artifact.display(), records = batch.stats.records, "request complete");
    Ok(RunReport {
        pipeline,
        artifact,
        stats: batch.stats,
        rejected: batch.rejected,
        mapping: None,
        mapping_inferred: false,
    })
}

/// Run the contact pipeline. An all-unset `mapping` is inferred from the
/// header row.
pub fn run_contacts(
    source: &SourceInput,
    mut mapping: ColumnMapping,
    options: &NormalizationOptions,
    output: &OutputConfig,
) -> Result<RunReport> {
    let pipeline = Pipeline::Contacts;
    let span = info_span!("request", %pipeline, path = %source.path.display());
    let _guard = span.enter();

    let table = ingest(source).inspect_err(log_abort)?;
    let mapping_inferred = mapping.is_unset();
    let batch = map_contacts(&table, &mut mapping, options).inspect_err(log_abort)?;
    for record in &batch.records {
        trace!(
            phone = redact_value(&record.phone_number),
            name = redact_value(&record.name),
            email = redact_value(&record.email),
            "contact record"
        );
    }

    let artifact = write_artifact(&output.dir, pipeline, &batch.records, output.writer)
        .context("write contacts artifact")?;
    info!(path = %artifact.display(), contacts = batch.stats.records, "request complete");
    Ok(RunReport {
        pipeline,
        artifact,
        stats: batch.stats,
        rejected: batch.rejected,
        mapping: Some(mapping),
        mapping_inferred,
    })
}

/// Load a contact column mapping from a JSON file.
pub fn load_mapping_file(path: &Path) -> tabmap_model::Result<ColumnMapping> {
    let invalid = |message: String| ProcessError::InvalidMapping {
        path: path.display().to_string(),
        message,
    };
    let text = fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
    let mapping = serde_json::from_str(&text).map_err(|e| invalid(e.to_string()))?;
    debug!(path = %path.display(), "loaded column mapping file");
    Ok(mapping)
}

/// Structured failure reply for any request error.
pub fn failure_response(error: &anyhow::Error) -> ProcessResponse {
    match error.downcast_ref::<ProcessError>() {
        Some(process) => ProcessResponse::failure(process),
        None => ProcessResponse {
            success: false,
            code: Some(OUTPUT_WRITE_ERROR.to_string()),
            message: Some(format!("{error:#}")),
            download: None,
            total_records: None,
            total_contacts: None,
        },
    }
}

fn log_abort(error: &ProcessError) {
    error!(code = error.code(), %error, "request aborted");
}
