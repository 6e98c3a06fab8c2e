//! Shared types for the tabmap pipelines.

pub mod error;
pub mod mapping;
pub mod options;
pub mod processing;
pub mod records;

pub use error::{ProcessError, Result, RowError};
pub use mapping::{ColumnMapping, ContactField, TransactionColumns};
pub use options::{DateOrder, NormalizationOptions, PhoneOptions};
pub use processing::{FileType, Pipeline, ProcessResponse};
pub use records::{ContactRecord, OutputRecord, PURCHASE, TransactionRecord};
