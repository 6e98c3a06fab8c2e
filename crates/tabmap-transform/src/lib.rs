//! Row mapping and field normalization.
//!
//! This crate turns decoded source tables into output records:
//!
//! - **transactions**: positional column mapping with numeric bill checks
//! - **contacts**: header inference, per-field cleaning, phone deduplication
//! - **normalization**: the pure field normalizers both pipelines share
//! - **batch**: per-row outcomes and request counters

pub mod batch;
pub mod contacts;
pub mod dedupe;
pub mod inference;
pub mod normalization;
pub mod transactions;

// Re-export common functions for external use
pub use batch::{BatchStats, MappedBatch, RowOutcome};
pub use contacts::{ContactMapper, map_contacts};
pub use dedupe::DedupSet;
pub use inference::{ensure_mapping, infer_mapping};
pub use transactions::{map_transaction_row, map_transactions};
