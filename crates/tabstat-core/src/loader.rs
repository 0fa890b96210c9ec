use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use crate::dataset::Dataset;
use crate::error::{Error, Result};

/// Load a dataset file, dispatching on the (lower-cased) file extension.
///
/// `sheet` selects the worksheet for spreadsheet input. For CSV input the
/// argument has no meaning and is ignored with a warning.
pub fn load_dataset(path: &Path, sheet: Option<&str>) -> Result<Dataset> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.to_path_buf()));
    }

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "csv" => {
            if let Some(sheet) = sheet {
                tracing::warn!(
                    event = "sheet_ignored",
                    sheet = %sheet,
                    "sheet name has no meaning for csv input"
                );
            }
            load_csv(path)
        }
        "xls" | "xlsx" => load_spreadsheet(path, sheet),
        _ => Err(Error::UnsupportedFormat { extension }),
    }
}

fn load_csv(path: &Path) -> Result<Dataset> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)?;

    let columns = reader
        .headers()?
        .iter()
        .map(String::from)
        .collect::<Vec<_>>();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(String::from).collect());
    }

    Ok(Dataset::new(columns, rows))
}

fn load_spreadsheet(path: &Path, sheet: Option<&str>) -> Result<Dataset> {
    let mut workbook = open_workbook_auto(path)?;
    let names: Vec<String> = workbook.sheet_names().to_owned();

    let target = match sheet {
        Some(name) => {
            if !names.iter().any(|candidate| candidate == name) {
                return Err(Error::SheetNotFound {
                    sheet: name.to_string(),
                    available: names,
                });
            }
            name.to_string()
        }
        None => names
            .first()
            .cloned()
            .ok_or_else(|| Error::InvalidData("workbook contains no worksheets".to_string()))?,
    };

    let range = workbook.worksheet_range(&target)?;
    let mut rows_iter = range.rows();

    let columns = match rows_iter.next() {
        Some(header) => header.iter().map(cell_to_string).collect::<Vec<_>>(),
        None => Vec::new(),
    };

    // Short rows are padded so every row matches the header width.
    let rows = rows_iter
        .map(|row| {
            let mut cells = row.iter().map(cell_to_string).collect::<Vec<_>>();
            cells.resize(columns.len(), String::new());
            cells
        })
        .collect();

    Ok(Dataset::new(columns, rows))
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty | Data::Error(_) => String::new(),
        Data::String(value) => value.trim().to_string(),
        other => other.to_string(),
    }
}
