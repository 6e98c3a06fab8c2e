//! Source rows and the column accessor.
//!
//! A row is either positional (spreadsheet rows) or keyed by header name
//! (delimited rows). Both are read through [`ColumnAccess::value_at`] with a
//! 1-based column number.

/// Positional cell lookup shared by every row shape.
pub trait ColumnAccess {
    /// Cell at a 0-based position, if present.
    fn cell(&self, index: usize) -> Option<&str>;

    /// Cell for a 1-based column number. Absent, zero, negative, or
    /// out-of-range columns read as an empty string.
    fn value_at(&self, column: Option<i64>) -> String {
        let Some(index) = column_index(column) else {
            return String::new();
        };
        self.cell(index).map(str::to_string).unwrap_or_default()
    }
}

/// Convert a 1-based column number to a 0-based index.
pub fn column_index(column: Option<i64>) -> Option<usize> {
    match column {
        Some(n) if n > 0 => usize::try_from(n - 1).ok(),
        _ => None,
    }
}

/// Read a cell by 1-based column number from any row shape.
pub fn column_value<R: ColumnAccess + ?Sized>(row: &R, column: Option<i64>) -> String {
    row.value_at(column)
}

/// A row keyed by header name, in header order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyedRow {
    entries: Vec<(String, String)>,
}

impl KeyedRow {
    pub fn new(entries: Vec<(String, String)>) -> Self {
        Self { entries }
    }

    /// Pair header names with cell values. Cells past the last header are
    /// keyed `_<index>`; missing trailing cells are omitted.
    pub fn from_headers(headers: &[String], cells: Vec<String>) -> Self {
        let entries = cells
            .into_iter()
            .enumerate()
            .map(|(idx, value)| {
                let key = headers
                    .get(idx)
                    .cloned()
                    .unwrap_or_else(|| format!("_{idx}"));
                (key, value)
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ColumnAccess for KeyedRow {
    /// A key spelled as the index itself wins; otherwise the index is taken
    /// as a position in key order.
    fn cell(&self, index: usize) -> Option<&str> {
        let direct = index.to_string();
        if let Some(value) = self.get(&direct) {
            return Some(value);
        }
        self.entries.get(index).map(|(_, value)| value.as_str())
    }
}

impl ColumnAccess for [String] {
    fn cell(&self, index: usize) -> Option<&str> {
        self.get(index).map(String::as_str)
    }
}

impl ColumnAccess for Vec<String> {
    fn cell(&self, index: usize) -> Option<&str> {
        self.as_slice().cell(index)
    }
}

/// One decoded data row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceRow {
    /// Spreadsheet row, addressed by position.
    Indexed(Vec<String>),
    /// Delimited row, keyed by header name.
    Keyed(KeyedRow),
}

impl SourceRow {
    /// Cell values in column order.
    pub fn values(&self) -> Vec<&str> {
        match self {
            Self::Indexed(cells) => cells.iter().map(String::as_str).collect(),
            Self::Keyed(row) => row.values().collect(),
        }
    }

    /// True when every cell is empty or whitespace.
    pub fn is_blank(&self) -> bool {
        self.values().iter().all(|value| value.trim().is_empty())
    }
}

impl ColumnAccess for SourceRow {
    fn cell(&self, index: usize) -> Option<&str> {
        match self {
            Self::Indexed(cells) => cells.cell(index),
            Self::Keyed(row) => row.cell(index),
        }
    }
}
