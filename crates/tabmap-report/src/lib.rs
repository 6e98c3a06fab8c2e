//! Output generation for mapped records.
//!
//! - **writer**: header plus records as delimited text
//! - **artifact**: per-pipeline file naming and atomic placement in the
//!   output directory

mod artifact;
mod options;
mod writer;

// Re-export public types and functions
pub use artifact::{DEFAULT_OUTPUT_DIR, artifact_path, write_artifact};
pub use options::{QuoteMode, WriterOptions};
pub use writer::{render_records, write_records};
