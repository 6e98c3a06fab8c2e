//! CSV decoding into keyed rows.
//!
//! The first record is the header. Every later record becomes a
//! [`KeyedRow`] keyed by header name in header order. Records are read as
//! bytes so that one undecodable record rejects only that row.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder};
use tabmap_model::RowError;
use tracing::{trace, warn};

use crate::error::{IngestError, Result};
use crate::row::{KeyedRow, SourceRow};
use crate::source::{RowResult, SourceTable, normalize_cell, normalize_header};

/// Read a CSV file to completion.
pub fn read_csv_source(path: &Path) -> Result<SourceTable> {
    let file = File::open(path).map_err(|e| IngestError::from_io(path, e))?;
    decode_csv(file, path)
}

/// Decode CSV from any reader. `origin` is only used in error messages.
pub fn decode_csv<R: Read>(input: R, origin: &Path) -> Result<SourceTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut headers: Option<Vec<String>> = None;
    let mut rows: Vec<RowResult> = Vec::new();
    let mut record = ByteRecord::new();

    loop {
        let more = reader
            .read_byte_record(&mut record)
            .map_err(|e| IngestError::CsvParse {
                path: origin.to_path_buf(),
                message: e.to_string(),
            })?;
        if !more {
            break;
        }
        let line = record.position().map_or(0, csv::Position::line);

        match &headers {
            None => {
                let cells = decode_cells(&record).map_err(|reason| IngestError::CsvParse {
                    path: origin.to_path_buf(),
                    message: format!("header on line {line}: {reason}"),
                })?;
                headers = Some(cells.iter().map(|cell| normalize_header(cell)).collect());
            }
            Some(names) => match decode_cells(&record) {
                Ok(cells) => {
                    trace!(line, cells = cells.len(), "decoded record");
                    rows.push(Ok(SourceRow::Keyed(KeyedRow::from_headers(names, cells))));
                }
                Err(reason) => {
                    warn!(line, %reason, "rejecting undecodable record");
                    rows.push(Err(RowError::Decode { line, reason }));
                }
            },
        }
    }

    Ok(SourceTable::new(headers.unwrap_or_default(), rows))
}

fn decode_cells(record: &ByteRecord) -> std::result::Result<Vec<String>, String> {
    record
        .iter()
        .enumerate()
        .map(|(idx, field)| {
            std::str::from_utf8(field)
                .map(normalize_cell)
                .map_err(|_| format!("invalid UTF-8 in field {}", idx + 1))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::ColumnAccess;

    fn decode(text: &[u8]) -> SourceTable {
        decode_csv(text, Path::new("memory.csv")).unwrap()
    }

    #[test]
    fn test_header_is_separated_from_rows() {
        let table = decode(b"Name,Mobile,Amount\nAlice,9876543210,150\nBob,,200\n");
        assert_eq!(table.headers, vec!["Name", "Mobile", "Amount"]);
        assert_eq!(table.len(), 2);
        let bob = table.rows[1].as_ref().unwrap();
        assert_eq!(bob.value_at(Some(1)), "Bob");
        assert_eq!(bob.value_at(Some(2)), "");
        assert_eq!(bob.value_at(Some(3)), "200");
    }

    #[test]
    fn test_quoted_fields_and_trimming() {
        let table = decode(b"a,b\n\" x, y \",  2  \n");
        let row = table.rows[0].as_ref().unwrap();
        assert_eq!(row.value_at(Some(1)), "x, y");
        assert_eq!(row.value_at(Some(2)), "2");
    }

    #[test]
    fn test_ragged_rows_are_kept() {
        let table = decode(b"a,b,c\n1\n1,2,3,4\n");
        assert_eq!(table.len(), 2);
        let short = table.rows[0].as_ref().unwrap();
        assert_eq!(short.value_at(Some(2)), "");
        let long = table.rows[1].as_ref().unwrap();
        assert_eq!(long.value_at(Some(4)), "4");
    }

    #[test]
    fn test_invalid_utf8_rejects_only_that_row() {
        let table = decode(b"a,b\nok,1\n\xff\xfe,2\nfine,3\n");
        assert_eq!(table.len(), 3);
        assert!(table.rows[0].is_ok());
        assert!(matches!(
            table.rows[1],
            Err(RowError::Decode { line: 3, .. })
        ));
        assert!(table.rows[2].is_ok());
    }

    #[test]
    fn test_empty_input() {
        let table = decode(b"");
        assert!(table.headers.is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn test_bom_is_removed_from_header() {
        let table = decode("\u{feff}Phone,Name\n1,2\n".as_bytes());
        assert_eq!(table.headers[0], "Phone");
    }

    #[test]
    fn test_missing_file() {
        let err = read_csv_source(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, IngestError::FileNotFound { .. }));
    }
}
