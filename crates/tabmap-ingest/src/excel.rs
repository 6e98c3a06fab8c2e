//! Spreadsheet decoding (first worksheet only).

use std::path::Path;

use calamine::{Data, ExcelDateTime, Range, Reader, open_workbook_auto};
use chrono::NaiveTime;
use tabmap_model::RowError;
use tracing::{debug, warn};

use crate::error::{IngestError, Result};
use crate::row::SourceRow;
use crate::source::{RowResult, SourceTable, normalize_cell, normalize_header};

/// Read the first worksheet of a workbook. Row 0 is the header.
pub fn read_excel_source(path: &Path) -> Result<SourceTable> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::Workbook {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| IngestError::NoWorksheet {
            path: path.to_path_buf(),
        })?
        .map_err(|e| IngestError::Workbook {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    Ok(decode_range(&range))
}

/// Turn a cell range into a header plus indexed rows.
///
/// The range may start past column A; leading columns are padded with
/// empty cells so caller column numbers match the sheet.
pub fn decode_range(range: &Range<Data>) -> SourceTable {
    let (first_row, first_col) = range
        .start()
        .map_or((0, 0), |(row, col)| (row as usize, col as usize));
    debug!(first_row, first_col, height = range.height(), "decoding worksheet range");

    let mut rows_iter = range.rows();
    let Some(header_cells) = rows_iter.next() else {
        return SourceTable::default();
    };
    let mut headers = vec![String::new(); first_col];
    headers.extend(
        header_cells
            .iter()
            .map(|cell| normalize_header(&cell_to_string(cell).unwrap_or_default())),
    );

    let mut rows: Vec<RowResult> = Vec::new();
    for (offset, cells) in rows_iter.enumerate() {
        // 1-based sheet row number; +2 skips the header row.
        let sheet_row = first_row + offset + 2;
        rows.push(decode_row(cells, sheet_row, first_col));
    }
    SourceTable::new(headers, rows)
}

fn decode_row(cells: &[Data], sheet_row: usize, first_col: usize) -> RowResult {
    let mut values = vec![String::new(); first_col];
    for (idx, cell) in cells.iter().enumerate() {
        match cell_to_string(cell) {
            Ok(value) => values.push(normalize_cell(&value)),
            Err(value) => {
                let column = first_col + idx + 1;
                warn!(row = sheet_row, column, %value, "rejecting row with error cell");
                return Err(RowError::CellError {
                    row: sheet_row,
                    column,
                    value,
                });
            }
        }
    }
    Ok(SourceRow::Indexed(values))
}

/// Stringify one cell. Error cells return their error text as `Err`.
pub fn cell_to_string(cell: &Data) -> std::result::Result<String, String> {
    Ok(match cell {
        Data::Empty => String::new(),
        Data::String(text) => text.clone(),
        Data::Int(value) => value.to_string(),
        Data::Float(value) => format_number(*value),
        Data::Bool(value) => value.to_string(),
        Data::DateTime(value) => format_excel_datetime(value),
        Data::DateTimeIso(text) | Data::DurationIso(text) => text.clone(),
        Data::Error(error) => return Err(error.to_string()),
    })
}

/// Format a float the way a spreadsheet shows it: integral values without
/// a trailing `.0`.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// Largest serial Excel can display (9999-12-31).
const MAX_EXCEL_SERIAL: f64 = 2_958_466.0;

/// Render a date-formatted cell as ISO text. Durations and serials outside
/// the displayable range fall back to the plain number.
fn format_excel_datetime(value: &ExcelDateTime) -> String {
    let serial = value.as_f64();
    if value.is_duration() || !serial.is_finite() || serial.abs() >= MAX_EXCEL_SERIAL {
        return format_number(serial);
    }
    match value.as_datetime() {
        Some(datetime) if datetime.time() == NaiveTime::MIN => {
            datetime.format("%Y-%m-%d").to_string()
        }
        Some(datetime) => datetime.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => format_number(serial),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::ColumnAccess;
    use calamine::{CellErrorType, ExcelDateTimeType};

    fn date_cell(serial: f64, is_1904: bool) -> Data {
        Data::DateTime(ExcelDateTime::new(
            serial,
            ExcelDateTimeType::DateTime,
            is_1904,
        ))
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(9876543210.0), "9876543210");
        assert_eq!(format_number(150.5), "150.5");
        assert_eq!(format_number(-3.0), "-3");
    }

    #[test]
    fn test_serial_dates() {
        assert_eq!(cell_to_string(&date_cell(45047.0, false)).unwrap(), "2023-05-01");
        assert_eq!(
            cell_to_string(&date_cell(45047.5, false)).unwrap(),
            "2023-05-01 12:00:00"
        );
    }

    #[test]
    fn test_serial_dates_before_leap_bug() {
        assert_eq!(cell_to_string(&date_cell(1.0, false)).unwrap(), "1900-01-01");
        assert_eq!(cell_to_string(&date_cell(59.0, false)).unwrap(), "1900-02-28");
    }

    #[test]
    fn test_serial_dates_1904_system() {
        assert_eq!(cell_to_string(&date_cell(0.0, true)).unwrap(), "1904-01-01");
        assert_eq!(cell_to_string(&date_cell(43585.0, true)).unwrap(), "2023-05-01");
    }

    #[test]
    fn test_out_of_range_serial_falls_back_to_number() {
        assert_eq!(cell_to_string(&date_cell(1e12, false)).unwrap(), "1000000000000");
        assert_eq!(cell_to_string(&date_cell(-1e18, false)).unwrap(), "-1000000000000000000");
        assert_eq!(cell_to_string(&date_cell(f64::NAN, false)).unwrap(), "NaN");
    }

    #[test]
    fn test_duration_stays_numeric() {
        let cell = Data::DateTime(ExcelDateTime::new(
            1.5,
            ExcelDateTimeType::TimeDelta,
            false,
        ));
        assert_eq!(cell_to_string(&cell).unwrap(), "1.5");
    }

    #[test]
    fn test_cell_to_string() {
        assert_eq!(cell_to_string(&Data::Empty).unwrap(), "");
        assert_eq!(cell_to_string(&Data::Int(42)).unwrap(), "42");
        assert_eq!(cell_to_string(&Data::Bool(true)).unwrap(), "true");
        assert_eq!(
            cell_to_string(&Data::String(" Alice ".to_string())).unwrap(),
            " Alice "
        );
        assert_eq!(
            cell_to_string(&Data::Error(CellErrorType::Div0)).unwrap_err(),
            "#DIV/0!"
        );
    }

    #[test]
    fn test_decode_range() {
        let mut range: Range<Data> = Range::new((0, 0), (2, 2));
        range.set_value((0, 0), Data::String("Name".to_string()));
        range.set_value((0, 1), Data::String("Mobile".to_string()));
        range.set_value((0, 2), Data::String("Amount".to_string()));
        range.set_value((1, 0), Data::String("Alice".to_string()));
        range.set_value((1, 1), Data::Float(9876543210.0));
        range.set_value((1, 2), Data::Int(150));
        range.set_value((2, 0), Data::String("Bob".to_string()));
        range.set_value((2, 2), Data::Error(CellErrorType::Value));

        let table = decode_range(&range);
        assert_eq!(table.headers, vec!["Name", "Mobile", "Amount"]);
        assert_eq!(table.len(), 2);
        let alice = table.rows[0].as_ref().unwrap();
        assert_eq!(alice.value_at(Some(2)), "9876543210");
        assert_eq!(alice.value_at(Some(3)), "150");
        assert_eq!(
            table.rows[1],
            Err(RowError::CellError {
                row: 3,
                column: 3,
                value: "#VALUE!".to_string(),
            })
        );
    }

    #[test]
    fn test_decode_range_pads_leading_columns() {
        let mut range: Range<Data> = Range::new((0, 1), (1, 2));
        range.set_value((0, 1), Data::String("Phone".to_string()));
        range.set_value((0, 2), Data::String("Name".to_string()));
        range.set_value((1, 1), Data::Int(123));
        range.set_value((1, 2), Data::String("Carol".to_string()));

        let table = decode_range(&range);
        assert_eq!(table.headers, vec!["", "Phone", "Name"]);
        let row = table.rows[0].as_ref().unwrap();
        assert_eq!(row.value_at(Some(2)), "123");
        assert_eq!(row.value_at(Some(3)), "Carol");
    }
}
