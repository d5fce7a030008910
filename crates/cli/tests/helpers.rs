use std::fs;
use std::path::Path;

use web_rubric::{load_rubric, resolve_path, sha256_file};
use tempfile::tempdir;

#[test]
fn resolve_path_canonicalizes_existing_directory() {
    let tmp = tempdir().expect("tempdir");
    let nested = tmp.path().join("nested");
    fs::create_dir_all(&nested).expect("create nested");

    let resolved = resolve_path(nested.to_str().unwrap()).expect("resolve");
    assert_eq!(resolved, nested.canonicalize().unwrap());
}

#[test]
fn resolve_path_joins_missing_relative_path_onto_cwd() {
    let resolved = resolve_path("does-not-exist/report.csv").expect("resolve");
    let cwd = std::env::current_dir().unwrap();
    assert_eq!(resolved, cwd.join("does-not-exist/report.csv"));
}

#[test]
fn resolve_path_keeps_missing_absolute_path() {
    let tmp = tempdir().expect("tempdir");
    let missing = tmp.path().join("missing.csv");
    assert_eq!(resolve_path(missing.to_str().unwrap()).unwrap(), missing);
}

#[test]
fn sha256_file_matches_known_digest() {
    let tmp = tempdir().expect("tempdir");
    let path = tmp.path().join("abc.zip");
    fs::write(&path, b"abc").unwrap();
    assert_eq!(
        sha256_file(&path).unwrap(),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn sha256_file_reports_missing_file() {
    let err = sha256_file(Path::new("/definitely/missing.zip")).unwrap_err();
    assert!(err.to_string().contains("Failed to open archive"));
}

#[test]
fn load_rubric_defaults_without_path() {
    let config = load_rubric(None).unwrap();
    assert_eq!(config.thresholds.html_pages, 7);
}

#[test]
fn load_rubric_wraps_errors_with_path() {
    let err = load_rubric(Some("/definitely/missing.yaml")).unwrap_err();
    assert!(err.to_string().contains("missing.yaml"));
}
