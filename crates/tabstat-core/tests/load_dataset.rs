use std::fs;
use std::path::PathBuf;

use tabstat_core::{load_dataset, Error};

fn temp_data_file(label: &str, extension: &str, contents: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("tabstat_core_{label}_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp data dir");

    let path = dir.join(format!("data.{extension}"));
    fs::write(&path, contents).expect("write temp data file");
    path
}

#[test]
fn loads_csv_with_headers() {
    let path = temp_data_file("basic", "csv", "name,score\nalice,10\nbob,12\n");
    let dataset = load_dataset(&path, None).expect("load csv");

    assert_eq!(dataset.columns(), ["name".to_string(), "score".to_string()]);
    assert_eq!(dataset.row_count(), 2);
    assert_eq!(dataset.rows()[0], vec!["alice".to_string(), "10".to_string()]);
    assert_eq!(dataset.rows()[1], vec!["bob".to_string(), "12".to_string()]);
}

#[test]
fn csv_fields_are_trimmed() {
    let path = temp_data_file("trim", "csv", "name, score\nalice , 10\n");
    let dataset = load_dataset(&path, None).expect("load csv");

    assert_eq!(dataset.columns(), ["name".to_string(), "score".to_string()]);
    assert_eq!(dataset.rows()[0], vec!["alice".to_string(), "10".to_string()]);
}

#[test]
fn empty_csv_fields_stay_empty() {
    let path = temp_data_file("missing", "csv", "score\n1\n\n2\n");
    let dataset = load_dataset(&path, None).expect("load csv");

    let cells = dataset.column_values("score").expect("column exists");
    assert_eq!(cells, vec!["1", "", "2"]);
}

#[test]
fn sheet_argument_is_ignored_for_csv() {
    let path = temp_data_file("sheet", "csv", "score\n1\n2\n");
    let dataset = load_dataset(&path, Some("Sheet2")).expect("load csv");

    assert_eq!(dataset.row_count(), 2);
}

#[test]
fn missing_file_is_fatal() {
    let path = PathBuf::from("/nonexistent/tabstat/data.csv");
    let err = load_dataset(&path, None).expect_err("file does not exist");

    assert!(matches!(err, Error::FileNotFound(_)));
}

#[test]
fn unsupported_extension_is_fatal() {
    let path = temp_data_file("txt", "txt", "score\n1\n");
    let err = load_dataset(&path, None).expect_err("txt is not supported");

    match err {
        Error::UnsupportedFormat { extension } => assert_eq!(extension, "txt"),
        other => panic!("expected UnsupportedFormat, got {other:?}"),
    }
}

#[test]
fn extension_dispatch_is_case_insensitive() {
    let path = temp_data_file("upper", "CSV", "score\n1\n");
    let dataset = load_dataset(&path, None).expect("load csv");

    assert_eq!(dataset.row_count(), 1);
}

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(format!("tests/fixtures/{name}"))
}

#[test]
fn xlsx_defaults_to_first_sheet() {
    let path = fixture_path("two_sheets.xlsx");
    let dataset = load_dataset(&path, None).expect("load xlsx");

    assert_eq!(dataset.columns(), ["score".to_string()]);
    let cells = dataset.column_values("score").expect("column exists");
    assert_eq!(cells, vec!["10", "20"]);
}

#[test]
fn xlsx_sheet_argument_selects_named_sheet() {
    let path = fixture_path("two_sheets.xlsx");
    let dataset = load_dataset(&path, Some("second")).expect("load xlsx");

    assert_eq!(
        dataset.columns(),
        ["score".to_string(), "label".to_string()]
    );
    let cells = dataset.column_values("score").expect("column exists");
    assert_eq!(cells, vec!["1", "1", "2", "3"]);
}

#[test]
fn xlsx_missing_sheet_is_fatal() {
    let path = fixture_path("two_sheets.xlsx");
    let err = load_dataset(&path, Some("third")).expect_err("sheet does not exist");

    match err {
        Error::SheetNotFound { sheet, available } => {
            assert_eq!(sheet, "third");
            assert_eq!(available, vec!["first".to_string(), "second".to_string()]);
        }
        other => panic!("expected SheetNotFound, got {other:?}"),
    }
}

#[test]
fn file_without_extension_is_unsupported() {
    let mut dir = std::env::temp_dir();
    dir.push(format!("tabstat_core_noext_{}", uuid::Uuid::new_v4()));
    fs::create_dir_all(&dir).expect("create temp data dir");
    let path = dir.join("data");
    fs::write(&path, "score\n1\n").expect("write temp data file");

    let err = load_dataset(&path, None).expect_err("extensionless file");
    assert!(matches!(err, Error::UnsupportedFormat { .. }));
}
