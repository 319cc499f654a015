//! Integration tests for the extract + record pipeline
//! Tests component interactions at the record-building boundary

use doctest_extract::build_record;
use doctest_record::{BuilderError, TestRecord};
use tempfile::TempDir;

const STUB: &str =
    "fn _doctest_main_rust_kernel_foo() -> Result<(), impl core::fmt::Debug> {\n    Ok(())\n}";

#[test]
fn test_stub_to_persisted_record() {
    let dir = TempDir::new().unwrap();

    let record = build_record(STUB).unwrap();
    let path = record.write_to(dir.path()).unwrap();

    assert_eq!(path, dir.path().join("rust_kernel_doctest_foo.json"));
    let written = std::fs::read_to_string(&path).unwrap();
    let parsed: TestRecord = serde_json::from_str(&written).unwrap();
    assert_eq!(parsed, record);
}

#[test]
fn test_record_name_matches_file_name() {
    let record = build_record(STUB).unwrap();
    assert_eq!(record.name, "rust_kernel_doctest_foo");
    assert_eq!(record.file_name(), "rust_kernel_doctest_foo.json");
}

#[test]
fn test_rewrite_only_touches_result_shape() {
    let record = build_record(STUB).unwrap();
    let expected =
        "fn _doctest_main_rust_kernel_foo() -> core::result::Result<(), impl core::fmt::Debug> {\n    Ok(())\n}";
    assert_eq!(record.body, expected);
}

#[test]
fn test_body_identical_without_result_shape() {
    let content = "fn _doctest_main_rust_kernel_foo() {\n    assert_eq!(1, 1);\n}";
    let record = build_record(content).unwrap();
    assert_eq!(record.body, content);
}

#[test]
fn test_no_file_written_on_ambiguous_input() {
    let dir = TempDir::new().unwrap();
    let content = "fn rust_kernel_a() {}\nfn rust_kernel_b() {}";

    let result = build_record(content);
    assert!(matches!(
        result,
        Err(BuilderError::AmbiguousTestName { .. })
    ));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_idempotent_serialization() {
    let first = build_record(STUB).unwrap().to_json().unwrap();
    let second = build_record(STUB).unwrap().to_json().unwrap();
    assert_eq!(first, second);
}
