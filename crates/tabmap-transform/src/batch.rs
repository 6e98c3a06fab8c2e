//! Row-by-row batch collection shared by both pipelines.

use tabmap_ingest::{SourceRow, SourceTable};
use tabmap_model::{OutputRecord, Pipeline, ProcessError, RowError};
use tracing::{debug, info, warn};

/// What happened to one data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOutcome<R> {
    /// The row produced a record.
    Kept(R),
    /// Every mapped field was empty.
    Empty,
    /// The phone number normalized to nothing.
    MissingPhone,
    /// The phone number was already emitted earlier in the request.
    Duplicate,
}

/// Per-request counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchStats {
    /// Data rows seen, including rows that failed to decode.
    pub rows_read: usize,
    pub records: usize,
    pub skipped_empty: usize,
    pub missing_phone: usize,
    pub duplicates: usize,
    pub rejected: usize,
}

/// Output of one mapper run.
#[derive(Debug, Clone)]
pub struct MappedBatch<R> {
    pub records: Vec<R>,
    pub stats: BatchStats,
    /// Rows dropped because they could not be decoded.
    pub rejected: Vec<RowError>,
}

impl<R: OutputRecord> MappedBatch<R> {
    /// Fixed header for the record schema.
    pub fn header(&self) -> &'static [&'static str] {
        R::HEADER
    }
}

/// Run `map_row` over every data row in order and tally the outcomes.
///
/// Decode failures are logged and counted; they never stop the batch. An
/// empty source or a batch with no surviving record is an error.
pub(crate) fn collect_batch<R, F>(
    table: &SourceTable,
    pipeline: Pipeline,
    mut map_row: F,
) -> Result<MappedBatch<R>, ProcessError>
where
    F: FnMut(&SourceRow) -> RowOutcome<R>,
{
    if table.is_empty() {
        warn!(%pipeline, "source has no data rows");
        return Err(ProcessError::EmptySource);
    }

    let mut stats = BatchStats {
        rows_read: table.len(),
        ..BatchStats::default()
    };
    let mut records = Vec::new();
    let mut rejected = Vec::new();

    for (idx, row) in table.rows.iter().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(error) => {
                warn!(%pipeline, row = idx + 1, %error, "dropping row");
                stats.rejected += 1;
                rejected.push(error.clone());
                continue;
            }
        };
        match map_row(row) {
            RowOutcome::Kept(record) => records.push(record),
            RowOutcome::Empty => {
                debug!(row = idx + 1, "skipping empty row");
                stats.skipped_empty += 1;
            }
            RowOutcome::MissingPhone => {
                debug!(row = idx + 1, "skipping row without phone");
                stats.missing_phone += 1;
            }
            RowOutcome::Duplicate => {
                debug!(row = idx + 1, "skipping duplicate phone");
                stats.duplicates += 1;
            }
        }
    }

    stats.records = records.len();
    info!(
        %pipeline,
        rows = stats.rows_read,
        records = stats.records,
        skipped_empty = stats.skipped_empty,
        missing_phone = stats.missing_phone,
        duplicates = stats.duplicates,
        rejected = stats.rejected,
        "mapped rows"
    );

    if records.is_empty() {
        return Err(ProcessError::InsufficientData {
            pipeline,
            rows_read: stats.rows_read,
        });
    }

    Ok(MappedBatch {
        records,
        stats,
        rejected,
    })
}
