mod logging;
mod mount;

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use tabstat_core::{load_dataset, numeric_values, summarize_column, write_summary};
use tabstat_plot::{render_box_plot, render_histogram, PlotError, DEFAULT_BIN_COUNT};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
enum CliError {
    #[error("core error: {0}")]
    Core(#[from] tabstat_core::Error),
    #[error("plot error: {0}")]
    Plot(#[from] PlotError),
    #[error("failed to create output directory {}: {source}", .path.display())]
    OutputDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(
    name = "tabstat",
    version,
    about = "Descriptive statistics and distribution plots for one dataset column"
)]
struct Cli {
    /// Path to the dataset (CSV, XLS or XLSX).
    #[arg(long, value_name = "PATH")]
    data_path: PathBuf,
    /// Column name to analyse.
    #[arg(long, value_name = "NAME")]
    column: String,
    /// Sheet name when loading from a spreadsheet.
    #[arg(long, value_name = "NAME")]
    sheet: Option<String>,
    /// Directory to store plots and summary text.
    #[arg(long, default_value = "analysis_results")]
    output_dir: PathBuf,
    /// Skip the Drive mount step (useful when not running in Colab).
    #[arg(long, default_value_t = false)]
    skip_mount: bool,
    /// Histogram bin count.
    #[arg(long, default_value_t = DEFAULT_BIN_COUNT)]
    bins: usize,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    logging::init_logging().map_err(CliError::Logging)?;
    run(cli)
}

fn run(cli: Cli) -> Result<(), CliError> {
    let run_id = Uuid::new_v4().to_string();
    let timer = Instant::now();

    tracing::info!(
        event = "run_started",
        run_id = %run_id,
        data_path = %cli.data_path.display(),
        column = %cli.column
    );

    if cli.skip_mount {
        tracing::info!(event = "mount_skipped");
    } else {
        mount::mount_drive(Path::new(mount::DRIVE_MOUNT_POINT));
    }

    let dataset = load_dataset(&cli.data_path, cli.sheet.as_deref())?;
    tracing::info!(
        event = "dataset_loaded",
        rows = dataset.row_count(),
        columns = dataset.columns().len()
    );

    let summary = summarize_column(&dataset, &cli.column)?;
    tracing::info!(event = "summary_computed", column = %cli.column, count = summary.count);

    let values = numeric_values(&dataset, &cli.column)?;

    std::fs::create_dir_all(&cli.output_dir).map_err(|source| CliError::OutputDir {
        path: cli.output_dir.clone(),
        source,
    })?;

    let histogram_path = cli.output_dir.join("histogram.png");
    render_histogram(&values, &cli.column, cli.bins, &histogram_path)?;
    tracing::info!(event = "histogram_written", path = %histogram_path.display());

    let boxplot_path = cli.output_dir.join("boxplot.png");
    render_box_plot(&values, &cli.column, &boxplot_path)?;
    tracing::info!(event = "boxplot_written", path = %boxplot_path.display());

    let summary_path = write_summary(&cli.output_dir, &summary)?;
    tracing::info!(event = "summary_written", path = %summary_path.display());

    tracing::info!(
        event = "run_finished",
        status = "success",
        duration_ms = timer.elapsed().as_millis() as u64
    );

    Ok(())
}
