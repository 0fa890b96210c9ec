use std::path::Path;

use plotters::prelude::*;
use tabstat_core::percentile;

use crate::{PlotError, Result};

const BOX_HALF_WIDTH: f64 = 0.3;
const CAP_HALF_WIDTH: f64 = 0.15;

/// Box geometry derived from the sorted values: quartiles, whisker ends
/// within the 1.5×IQR fences, and the points beyond them.
#[derive(Debug, Clone, PartialEq)]
struct BoxStats {
    q1: f64,
    median: f64,
    q3: f64,
    lower_whisker: f64,
    upper_whisker: f64,
    outliers: Vec<f64>,
}

/// Render a single-box box plot of the column's values and save it as a
/// PNG file.
///
/// Whiskers extend to the most extreme data points within 1.5×IQR of the
/// quartile box; points beyond the fences are drawn individually.
pub fn render_box_plot(values: &[f64], column: &str, output_path: &Path) -> Result<()> {
    if values.is_empty() {
        return Err(PlotError::EmptyData);
    }

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let stats = box_stats(&sorted);

    let data_min = sorted[0];
    let data_max = sorted[sorted.len() - 1];
    let (y_min, y_max) = padded_range(data_min, data_max);

    let root = BitMapBackend::new(output_path, (768, 768)).into_drawing_area();
    root.fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let mut chart = ChartBuilder::on(&root)
        .caption(format!("Box plot of {column}"), ("sans-serif", 32))
        .margin(20)
        .x_label_area_size(30)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..2.0, y_min..y_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(0)
        .y_desc(column)
        .label_style(("sans-serif", 18))
        .axis_desc_style(("sans-serif", 22))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    let center = 1.0;
    let whiskers = [
        // Stems from the box to the whisker ends.
        vec![(center, stats.q3), (center, stats.upper_whisker)],
        vec![(center, stats.q1), (center, stats.lower_whisker)],
        // Whisker caps.
        vec![
            (center - CAP_HALF_WIDTH, stats.upper_whisker),
            (center + CAP_HALF_WIDTH, stats.upper_whisker),
        ],
        vec![
            (center - CAP_HALF_WIDTH, stats.lower_whisker),
            (center + CAP_HALF_WIDTH, stats.lower_whisker),
        ],
    ];

    for segment in whiskers {
        chart
            .draw_series(std::iter::once(PathElement::new(segment, BLACK.stroke_width(1))))
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    chart
        .draw_series(std::iter::once(Rectangle::new(
            [
                (center - BOX_HALF_WIDTH, stats.q1),
                (center + BOX_HALF_WIDTH, stats.q3),
            ],
            BLUE.stroke_width(2),
        )))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![
                (center - BOX_HALF_WIDTH, stats.median),
                (center + BOX_HALF_WIDTH, stats.median),
            ],
            RED.stroke_width(2),
        )))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart
        .draw_series(
            stats
                .outliers
                .iter()
                .map(|&value| Circle::new((center, value), 4, BLACK.stroke_width(1))),
        )
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    root.present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

fn box_stats(sorted: &[f64]) -> BoxStats {
    let q1 = percentile(sorted, 0.25);
    let median = percentile(sorted, 0.50);
    let q3 = percentile(sorted, 0.75);

    let iqr = q3 - q1;
    let lower_fence = q1 - 1.5 * iqr;
    let upper_fence = q3 + 1.5 * iqr;

    let lower_whisker = sorted
        .iter()
        .copied()
        .find(|value| *value >= lower_fence)
        .unwrap_or(q1);
    let upper_whisker = sorted
        .iter()
        .rev()
        .copied()
        .find(|value| *value <= upper_fence)
        .unwrap_or(q3);

    let outliers = sorted
        .iter()
        .copied()
        .filter(|value| *value < lower_fence || *value > upper_fence)
        .collect();

    BoxStats {
        q1,
        median,
        q3,
        lower_whisker,
        upper_whisker,
        outliers,
    }
}

fn padded_range(min: f64, max: f64) -> (f64, f64) {
    if min == max {
        return (min - 0.5, max + 0.5);
    }
    let pad = (max - min) * 0.05;
    (min - pad, max + pad)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_stats_without_outliers() {
        let sorted = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let stats = box_stats(&sorted);

        assert_eq!(stats.q1, 2.0);
        assert_eq!(stats.median, 3.0);
        assert_eq!(stats.q3, 4.0);
        assert_eq!(stats.lower_whisker, 1.0);
        assert_eq!(stats.upper_whisker, 5.0);
        assert!(stats.outliers.is_empty());
    }

    #[test]
    fn test_box_stats_flags_outliers_beyond_fences() {
        // Q1 = 2, Q3 = 4, IQR = 2 -> fences at -1 and 7; 100 is outside.
        let sorted = vec![1.0, 2.0, 3.0, 4.0, 100.0];
        let stats = box_stats(&sorted);

        assert_eq!(stats.outliers, vec![100.0]);
        assert_eq!(stats.upper_whisker, 4.0);
        assert_eq!(stats.lower_whisker, 1.0);
    }

    #[test]
    fn test_box_stats_whiskers_stop_at_most_extreme_inliers() {
        // Q1 = 10.5, Q3 = 17.75, IQR = 7.25 -> fences at -0.375 and 28.625.
        let sorted = vec![5.0, 10.0, 12.0, 14.0, 19.0, 40.0];
        let stats = box_stats(&sorted);

        assert_eq!(stats.lower_whisker, 5.0);
        assert_eq!(stats.upper_whisker, 19.0);
        assert_eq!(stats.outliers, vec![40.0]);
    }

    #[test]
    fn test_padded_range_degenerate() {
        assert_eq!(padded_range(3.0, 3.0), (2.5, 3.5));
    }

    #[test]
    fn test_render_box_plot_rejects_empty_input() {
        let output = std::env::temp_dir().join("tabstat_box_empty.png");
        let result = render_box_plot(&[], "value", &output);
        assert!(matches!(result, Err(PlotError::EmptyData)));
    }

    #[test]
    #[ignore = "Font rendering not available in test environment"]
    fn test_render_box_plot_writes_png() {
        let output = std::env::temp_dir().join(format!(
            "tabstat_box_{}.png",
            uuid::Uuid::new_v4()
        ));

        let values = vec![1.0, 2.0, 3.0, 4.0, 5.0, 20.0];
        render_box_plot(&values, "value", &output).expect("render box plot");
        assert!(output.exists());

        let _ = std::fs::remove_file(&output);
    }
}
