use bench_log::aggregator::FlatRow;
use bench_log::output::{create_output, read_rows, validate_path, write_rows};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

fn create_test_rows() -> Vec<FlatRow> {
    vec![
        FlatRow {
            timestamp: "t1".to_string(),
            commit: "c1".to_string(),
            host: "h1".to_string(),
            toolchain_version: Some("zig-0.13".to_string()),
            stage_index: 0,
            stage_name: "a".to_string(),
            metric_name: "m".to_string(),
            rate: 1,
        },
        FlatRow {
            timestamp: "t1".to_string(),
            commit: "c1".to_string(),
            host: "h1".to_string(),
            toolchain_version: Some("zig-0.13".to_string()),
            stage_index: 1,
            stage_name: "b".to_string(),
            metric_name: "n".to_string(),
            rate: 2,
        },
    ]
}

#[test]
fn test_write_and_read_rows() {
    let rows = create_test_rows();
    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    // Write
    let mut out = create_output(Some(path)).unwrap();
    assert_eq!(write_rows(&mut out, &rows).unwrap(), 2);
    out.flush().unwrap();
    drop(out);

    // Read back
    let loaded = read_rows(path).unwrap();
    assert_eq!(loaded, rows);
}

#[test]
fn test_row_field_order() {
    let mut buf = Vec::new();
    write_rows(&mut buf, &create_test_rows()[..1]).unwrap();

    assert_eq!(
        String::from_utf8(buf).unwrap(),
        "{\"timestamp\":\"t1\",\"commit\":\"c1\",\"host\":\"h1\",\"zig\":\"zig-0.13\",\
         \"stage_index\":0,\"stage_name\":\"a\",\"metric_name\":\"m\",\"rate\":1}\n"
    );
}

#[test]
fn test_read_rows_rejects_garbage() {
    let mut temp_file = NamedTempFile::new().unwrap();
    writeln!(temp_file, "not json").unwrap();

    assert!(read_rows(temp_file.path()).is_err());
}

#[test]
fn test_validate_output_path_empty() {
    let result = validate_path(Path::new(""));
    assert!(result.is_err());
}

#[test]
fn test_validate_output_path_directory() {
    // Try to write to a directory path
    let temp_dir = tempfile::tempdir().unwrap();
    let result = validate_path(temp_dir.path());
    assert!(result.is_err());
}

#[test]
fn test_write_creates_parent_dirs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nested_path = temp_dir.path().join("nested/dirs/rows.jsonl");

    let mut out = create_output(Some(nested_path.as_path())).unwrap();
    write_rows(&mut out, &create_test_rows()).unwrap();
    out.flush().unwrap();
    drop(out);

    assert!(nested_path.exists());
}
