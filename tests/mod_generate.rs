use fixturegen::errors::FixtureError;
use fixturegen::generate::{self, FileOutcome, GenerateOptions};
use fixturegen::template;
use serde_json::{Value, json};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn opts_in(dir: &Path) -> GenerateOptions {
    GenerateOptions { output_dir: dir.to_path_buf(), ..Default::default() }
}

#[test]
fn test_default_run_creates_all_three_fixtures() {
    let dir = tempdir().unwrap();
    let report = generate::generate_all(&opts_in(dir.path())).unwrap();
    assert_eq!(report.written, 3);
    assert_eq!(report.skipped, 0);
    for size in [1u64, 5, 10] {
        assert!(dir.path().join(format!("{size}MB.json")).exists());
    }
    // Field names and counts are part of the report's contract.
    assert_eq!(
        serde_json::to_value(&report).unwrap(),
        json!({"written": 3, "skipped": 0, "records": 123_076})
    );
}

#[test]
fn test_one_megabyte_fixture_contents() {
    let dir = tempdir().unwrap();
    let opts = GenerateOptions { sizes_mb: vec![1], ..opts_in(dir.path()) };
    let report = generate::generate_all(&opts).unwrap();
    assert_eq!(report.written, 1);

    let s = fs::read_to_string(dir.path().join("1MB.json")).unwrap();
    assert!(s.starts_with("[\n"));
    assert!(s.ends_with("\n]"));

    let v: Value = serde_json::from_str(&s).unwrap();
    let arr = v.as_array().unwrap();
    let expected_count = 1_000_000 / template::RECORD.len();
    assert_eq!(arr.len(), expected_count);

    let canonical = template::record_value().unwrap();
    assert!(arr.iter().all(|e| *e == canonical));

    // Elements are textually identical to the record, not merely
    // structurally equal.
    assert_eq!(s.matches(template::RECORD).count(), expected_count);
}

#[test]
fn test_fixture_byte_lengths_are_exact() {
    let dir = tempdir().unwrap();
    generate::generate_all(&opts_in(dir.path())).unwrap();
    let len = template::RECORD.len() as u64;
    for size in [1u64, 5, 10] {
        let count = generate::record_count(size);
        let meta = fs::metadata(dir.path().join(generate::fixture_file_name(size))).unwrap();
        // "[" + newline, records joined by "," + newline, newline + "]".
        let expected = 2 + count * len + (count - 1) * 2 + 2;
        assert_eq!(meta.len(), expected);

        // The approximation lands within one record below the decimal
        // target and within the separator overhead above it.
        let target = size * 1_000_000;
        assert!(target - count * len < len);
        assert!(meta.len() >= target - len);
        assert!(meta.len() <= target + 2 * count + 4);
    }
}

#[test]
fn generate_file_reports_written_then_skipped() {
    let dir = tempdir().unwrap();
    let opts = opts_in(dir.path());
    let path = dir.path().join(generate::fixture_file_name(1));

    let first = generate::generate_file(&path, 1, &opts).unwrap();
    assert_eq!(first, FileOutcome::Written { records: generate::record_count(1) });

    let second = generate::generate_file(&path, 1, &opts).unwrap();
    assert_eq!(second, FileOutcome::Skipped);
}

#[test]
fn missing_output_directory_fails_without_creating_it() {
    let dir = tempdir().unwrap();
    let opts = GenerateOptions {
        output_dir: dir.path().join("nope"),
        sizes_mb: vec![1],
        ..Default::default()
    };
    let err = generate::generate_all(&opts).unwrap_err();
    assert!(matches!(err, FixtureError::Io(_)));
    assert!(!dir.path().join("nope").exists());
}
