use std::path::PathBuf;

use tabmap_model::{ColumnMapping, Pipeline, ProcessResponse, RowError};
use tabmap_transform::BatchStats;

/// Outcome of one successful request.
#[derive(Debug)]
pub struct RunReport {
    pub pipeline: Pipeline,
    pub artifact: PathBuf,
    pub stats: BatchStats,
    pub rejected: Vec<RowError>,
    /// Contact mapping actually used, after any header inference.
    pub mapping: Option<ColumnMapping>,
    pub mapping_inferred: bool,
}

impl RunReport {
    pub fn response(&self) -> ProcessResponse {
        ProcessResponse::success(self.pipeline, self.artifact.clone(), self.stats.records)
    }
}
