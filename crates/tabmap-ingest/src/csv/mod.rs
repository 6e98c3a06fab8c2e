//! Delimited-text decoding.

mod reader;

pub use reader::{decode_csv, read_csv_source};
