use std::collections::HashMap;

use serde::Serialize;

use crate::dataset::Dataset;
use crate::error::{Error, Result};

/// Descriptive statistics for one dataset column.
///
/// `count` covers non-missing cells only; `std_dev` is the sample (n−1)
/// standard deviation and is NaN when fewer than two values are present.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnSummary {
    pub column: String,
    pub count: u64,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
    pub mode: String,
}

/// Compute the descriptive summary and mode for one column.
///
/// Fails with [`Error::MissingColumn`] when the column is absent,
/// [`Error::NonNumericColumn`] when a non-missing cell does not parse as a
/// number, and [`Error::EmptyColumn`] when every cell is missing.
pub fn summarize_column(dataset: &Dataset, column: &str) -> Result<ColumnSummary> {
    let values = numeric_values(dataset, column)?;

    let mut sorted = values.clone();
    sorted.sort_by(f64::total_cmp);

    let count = values.len() as u64;
    let mean = values.iter().sum::<f64>() / count as f64;
    let std_dev = sample_std_dev(&values, mean);

    let cells = dataset.column_values(column)?;
    let mode = mode_value(&cells).ok_or_else(|| Error::EmptyColumn {
        column: column.to_string(),
    })?;

    Ok(ColumnSummary {
        column: column.to_string(),
        count,
        mean,
        std_dev,
        min: sorted[0],
        q1: percentile(&sorted, 0.25),
        median: percentile(&sorted, 0.50),
        q3: percentile(&sorted, 0.75),
        max: sorted[sorted.len() - 1],
        mode,
    })
}

/// Extract the non-missing cells of a column as numbers, in row order.
///
/// The column must hold at least one value and every non-missing cell must
/// parse as `f64`.
pub fn numeric_values(dataset: &Dataset, column: &str) -> Result<Vec<f64>> {
    let cells = dataset.column_values(column)?;

    let mut values = Vec::with_capacity(cells.len());
    for cell in cells {
        if cell.is_empty() {
            continue;
        }
        let value = cell.parse::<f64>().map_err(|_| Error::NonNumericColumn {
            column: column.to_string(),
            value: cell.to_string(),
        })?;
        values.push(value);
    }

    if values.is_empty() {
        return Err(Error::EmptyColumn {
            column: column.to_string(),
        });
    }

    Ok(values)
}

/// Percentile of an ascending-sorted, non-empty slice with linear
/// interpolation between order statistics (`rank = q·(n−1)`).
pub fn percentile(sorted: &[f64], q: f64) -> f64 {
    let rank = q * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        sorted[lo] + (sorted[hi] - sorted[lo]) * (rank - lo as f64)
    }
}

fn sample_std_dev(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return f64::NAN;
    }
    let sum_squares = values
        .iter()
        .map(|value| (value - mean) * (value - mean))
        .sum::<f64>();
    (sum_squares / (values.len() - 1) as f64).sqrt()
}

/// Most frequent non-missing raw value; ties break on first occurrence in
/// row order. None when every cell is missing.
fn mode_value(cells: &[&str]) -> Option<String> {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (index, &cell) in cells.iter().enumerate() {
        if cell.is_empty() {
            continue;
        }
        let entry = counts.entry(cell).or_insert((0, index));
        entry.0 += 1;
    }

    counts
        .into_iter()
        .min_by(|(_, (count_a, first_a)), (_, (count_b, first_b))| {
            count_b.cmp(count_a).then(first_a.cmp(first_b))
        })
        .map(|(value, _)| value.to_string())
}
