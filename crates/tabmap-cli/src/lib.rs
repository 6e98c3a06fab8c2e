//! CLI library components for tabmap.

pub mod logging;
pub mod pipeline;
pub mod types;
