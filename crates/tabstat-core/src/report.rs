use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::summary::ColumnSummary;

/// Fixed name of the text artifact.
pub const SUMMARY_FILE_NAME: &str = "summary_statistics.txt";

/// Render the summary as deterministic text.
///
/// Statistics appear in a fixed order (count, mean, std, min, 25%, 50%,
/// 75%, max) with six decimal places, followed by the mode on its own line.
pub fn render_summary(summary: &ColumnSummary) -> String {
    let mut lines = Vec::new();

    lines.push("Summary statistics".to_string());
    push_stat(&mut lines, "count", summary.count as f64);
    push_stat(&mut lines, "mean", summary.mean);
    push_stat(&mut lines, "std", summary.std_dev);
    push_stat(&mut lines, "min", summary.min);
    push_stat(&mut lines, "25%", summary.q1);
    push_stat(&mut lines, "50%", summary.median);
    push_stat(&mut lines, "75%", summary.q3);
    push_stat(&mut lines, "max", summary.max);
    lines.push(String::new());
    lines.push(format!("Mode: {}", summary.mode));

    let mut rendered = lines.join("\n");
    rendered.push('\n');
    rendered
}

/// Write `summary_statistics.txt` into `out_dir`, creating the directory if
/// absent and truncating any previous file.
pub fn write_summary(out_dir: &Path, summary: &ColumnSummary) -> Result<PathBuf> {
    fs::create_dir_all(out_dir)?;

    let path = out_dir.join(SUMMARY_FILE_NAME);
    fs::write(&path, render_summary(summary))?;

    Ok(path)
}

fn push_stat(lines: &mut Vec<String>, name: &str, value: f64) {
    lines.push(format!("{name:<8}{value:.6}"));
}
