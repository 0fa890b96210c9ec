use std::path::Path;

use plotters::prelude::*;

use crate::{PlotError, Result};

/// Default histogram bin count.
pub const DEFAULT_BIN_COUNT: usize = 20;

/// Render a histogram of the column's values and save it as a PNG file.
///
/// Bins are equal-width over `[min, max]` with the last bin closed so the
/// maximum value is counted. A degenerate range (all values equal) is
/// widened by ±0.5 so the single occupied bin stays visible.
pub fn render_histogram(
    values: &[f64],
    column: &str,
    bins: usize,
    output_path: &Path,
) -> Result<()> {
    if values.is_empty() {
        return Err(PlotError::EmptyData);
    }

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let bins = bins.max(1);
    let (x_min, x_max, counts) = bin_values(values, bins);
    let y_max = counts.iter().copied().max().unwrap_or(1).max(1);

    let root = BitMapBackend::new(output_path, (1024, 768)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("Histogram of {column}"), ("sans-serif", 32))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0u32..y_max + y_max.div_ceil(20))
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .x_desc(column)
        .y_desc("Frequency")
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    let bin_width = (x_max - x_min) / bins as f64;

    chart
        .draw_series(counts.iter().enumerate().map(|(index, &count)| {
            let left = x_min + index as f64 * bin_width;
            Rectangle::new([(left, 0), (left + bin_width, count)], BLUE.mix(0.5).filled())
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    // Bar borders, matching the filled bars above.
    chart
        .draw_series(counts.iter().enumerate().map(|(index, &count)| {
            let left = x_min + index as f64 * bin_width;
            Rectangle::new([(left, 0), (left + bin_width, count)], BLACK.stroke_width(1))
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

/// Equal-width binning over `[min, max]`; the maximum value lands in the
/// last bin.
fn bin_values(values: &[f64], bins: usize) -> (f64, f64, Vec<u32>) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &value in values {
        min = min.min(value);
        max = max.max(value);
    }

    if min == max {
        min -= 0.5;
        max += 0.5;
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0u32; bins];
    for &value in values {
        let index = (((value - min) / width) as usize).min(bins - 1);
        counts[index] += 1;
    }

    (min, max, counts)
}
