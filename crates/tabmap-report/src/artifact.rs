//! Artifact placement.

use std::fs;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tabmap_model::{OutputRecord, Pipeline};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::options::WriterOptions;
use crate::writer::write_records;

/// Directory artifacts land in unless the caller picks another.
pub const DEFAULT_OUTPUT_DIR: &str = "processed";

/// Final path of the artifact for `pipeline` inside `dir`.
pub fn artifact_path(dir: &Path, pipeline: Pipeline) -> PathBuf {
    dir.join(pipeline.artifact_name())
}

/// Write `records` as the pipeline's artifact and return its path.
///
/// Output goes to a temporary file in `dir` that replaces the destination
/// only after every record is written, so a failed write never leaves a
/// partial artifact behind.
pub fn write_artifact<R: OutputRecord>(
    dir: &Path,
    pipeline: Pipeline,
    records: &[R],
    options: WriterOptions,
) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    let path = artifact_path(dir, pipeline);
    debug!(path = %path.display(), records = records.len(), "writing artifact");

    let temp = NamedTempFile::new_in(dir)
        .with_context(|| format!("create temporary file in {}", dir.display()))?;
    {
        let mut output = BufWriter::new(temp.as_file());
        write_records(&mut output, records, options)?;
    }
    temp.persist(&path)
        .with_context(|| format!("persist {}", path.display()))?;

    info!(%pipeline, path = %path.display(), records = records.len(), "artifact written");
    Ok(path)
}
