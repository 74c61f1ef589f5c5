//! Integration tests for CSV dataset loading.

use detview::dataset::{Dataset, DatasetError, Source};

use super::helpers::{write_csv, IMAGE_CSV};

#[test]
fn loads_fixture_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "image.csv", IMAGE_CSV);

    let dataset = Dataset::from_path(Source::Image, &path).unwrap();
    assert_eq!(dataset.len(), 5);
    assert_eq!(dataset.source(), Source::Image);

    drop(dir);
}

#[test]
fn missing_file_reports_io_error_with_path() {
    let err = Dataset::from_path(Source::Radar, std::path::Path::new("/nonexistent/radar.csv"))
        .unwrap_err();
    match err {
        DatasetError::Io { path, .. } => {
            assert!(path.to_string_lossy().contains("radar.csv"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn bad_timestamp_error_names_file_and_row() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "bad.csv",
        "time,x,y\n2025-01-02 15:53:39,1,2\nsoon,3,4\n",
    );

    let err = Dataset::from_path(Source::Image, &path).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("bad.csv"));
    assert!(message.contains("row 3"));
    assert!(message.contains("soon"));

    drop(dir);
}

#[test]
fn missing_required_column_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "short.csv", "time,x\n2025-01-02 15:53:39,1\n");

    let err = Dataset::from_path(Source::Image, &path).unwrap_err();
    assert!(matches!(err, DatasetError::MissingColumn { column: "y", .. }));

    drop(dir);
}

#[test]
fn header_only_file_is_an_empty_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "empty.csv", "time,x,y\n");

    let dataset = Dataset::from_path(Source::Radar, &path).unwrap();
    assert!(dataset.is_empty());

    drop(dir);
}
