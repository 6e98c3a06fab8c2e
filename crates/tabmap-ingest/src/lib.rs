//! Tabular source ingestion.
//!
//! This crate decodes an uploaded file into a header row plus data rows and
//! provides the column accessor the pipelines read cells through.
//!
//! # Features
//!
//! - **CSV Loading**: keyed rows in header order, per-record decode errors
//! - **Spreadsheet Loading**: first worksheet via `calamine`, indexed rows
//! - **Column Accessor**: 1-based column lookup that never fails
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use tabmap_ingest::{ColumnAccess, read_source};
//! use tabmap_model::FileType;
//!
//! let table = read_source(Path::new("uploads/orders.csv"), FileType::Csv)?;
//! for row in table.rows.iter().flatten() {
//!     let mobile = row.value_at(Some(2));
//! }
//! ```

mod csv;
mod error;
mod excel;
mod row;
mod source;

// === Error Types ===
pub use error::{IngestError, Result};

// === Decoders ===
pub use crate::csv::{decode_csv, read_csv_source};
pub use excel::{cell_to_string, decode_range, format_number, read_excel_source};
pub use source::{RowResult, SourceTable, read_source};

// === Column Accessor ===
pub use row::{ColumnAccess, KeyedRow, SourceRow, column_index, column_value};
