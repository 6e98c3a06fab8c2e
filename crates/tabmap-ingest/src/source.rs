//! Decoded source tables and the file-type dispatch.

use std::path::Path;

use tabmap_model::{FileType, RowError};
use tracing::{debug, info};

use crate::csv::read_csv_source;
use crate::error::Result;
use crate::excel::read_excel_source;
use crate::row::SourceRow;

/// A data row, or the reason it could not be decoded.
pub type RowResult = std::result::Result<SourceRow, RowError>;

/// A fully decoded source: header row plus data rows in file order.
#[derive(Debug, Clone, Default)]
pub struct SourceTable {
    /// Header cells, trimmed. Empty when the source had no rows at all.
    pub headers: Vec<String>,
    /// Data rows after the header.
    pub rows: Vec<RowResult>,
}

impl SourceTable {
    pub fn new(headers: Vec<String>, rows: Vec<RowResult>) -> Self {
        Self { headers, rows }
    }

    /// Number of data rows, including rows that failed to decode.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows that failed to decode.
    pub fn rejected(&self) -> usize {
        self.rows.iter().filter(|row| row.is_err()).count()
    }
}

/// Decode a source file to completion using the selected decoder.
pub fn read_source(path: &Path, file_type: FileType) -> Result<SourceTable> {
    debug!(path = %path.display(), %file_type, "reading source");
    let table = match file_type {
        FileType::Csv => read_csv_source(path)?,
        FileType::Excel => read_excel_source(path)?,
    };
    info!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.len(),
        rejected = table.rejected(),
        "source decoded"
    );
    Ok(table)
}

/// Trim a header cell and drop a stray byte-order mark.
pub(crate) fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

/// Trim a data cell.
pub(crate) fn normalize_cell(raw: &str) -> String {
    raw.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_header_strips_bom_and_space() {
        assert_eq!(normalize_header("\u{feff} Name "), "Name");
        assert_eq!(normalize_header("Mobile"), "Mobile");
    }

    #[test]
    fn rejected_counts_errors() {
        let table = SourceTable::new(
            vec!["A".to_string()],
            vec![
                Ok(SourceRow::Indexed(vec!["1".to_string()])),
                Err(RowError::Decode {
                    line: 3,
                    reason: "invalid UTF-8".to_string(),
                }),
            ],
        );
        assert_eq!(table.len(), 2);
        assert_eq!(table.rejected(), 1);
    }
}
