use serde::{Deserialize, Serialize};

/// How fields containing delimiters, quotes, or newlines are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteMode {
    /// Quote only fields that need it, doubling embedded quotes.
    #[default]
    Rfc4180,
    /// Plain comma join with no quoting and no trailing newline. A field
    /// that contains a comma or newline corrupts the row structure.
    Raw,
}

/// Options for the delimited output writer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WriterOptions {
    pub quote_mode: QuoteMode,
}

impl WriterOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raw() -> Self {
        Self {
            quote_mode: QuoteMode::Raw,
        }
    }
}
