//! Core contracts and helpers for Tabstat.
//!
//! This crate defines the in-memory dataset model, the file-format
//! loaders, the statistical summarizer, and the text report writer shared
//! by the plotting and CLI crates.

pub mod dataset;
pub mod error;
pub mod loader;
pub mod report;
pub mod summary;

pub use dataset::Dataset;
pub use error::{Error, Result};
pub use loader::load_dataset;
pub use report::{render_summary, write_summary, SUMMARY_FILE_NAME};
pub use summary::{numeric_values, percentile, summarize_column, ColumnSummary};
