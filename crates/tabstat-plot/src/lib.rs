//! Distribution plots for a single numeric column.
//!
//! Renders the histogram and box-plot artifacts as PNG files through the
//! [`plotters`] bitmap backend, which works in headless environments
//! without a display server.

mod boxplot;
mod histogram;

pub use boxplot::render_box_plot;
pub use histogram::{render_histogram, DEFAULT_BIN_COUNT};

use thiserror::Error;

/// Errors that can occur during plot generation.
#[derive(Debug, Error)]
pub enum PlotError {
    #[error("no numeric values to plot")]
    EmptyData,

    #[error("failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("failed to save plot to file: {0}")]
    FileSave(#[from] std::io::Error),
}

pub(crate) type Result<T> = std::result::Result<T, PlotError>;
