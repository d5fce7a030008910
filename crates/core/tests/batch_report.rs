mod common;

use std::fs;

use rubric_core::report::{write_csv, write_csv_to};
use rubric_core::services::{collect_archives, run_batch, BatchSummary, Evaluator};
use tempfile::tempdir;

use common::{linked_page, write_zip};

#[test]
fn collects_files_sorted_and_skips_directories() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("b.ZIP"), b"x").unwrap();
    fs::write(dir.path().join("a.zip"), b"x").unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();

    let names: Vec<String> = collect_archives(dir.path())
        .unwrap()
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["a.zip", "b.ZIP"]);
}

#[cfg(unix)]
#[test]
fn symlinked_archives_are_graded() {
    let store = tempdir().unwrap();
    let dir = tempdir().unwrap();
    let page = linked_page();
    let target = write_zip(store.path(), "real.zip", &[("index.html", page.as_str())]);
    std::os::unix::fs::symlink(&target, dir.path().join("linked.zip")).unwrap();
    std::os::unix::fs::symlink(store.path().join("gone.zip"), dir.path().join("m.zip")).unwrap();
    fs::write(dir.path().join("z.zip"), b"garbage").unwrap();

    let rows = run_batch(dir.path(), &Evaluator::default()).unwrap();
    let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["linked.zip", "m.zip", "z.zip"]);
    let linked = rows[0].evaluation.as_ref().expect("linked archive evaluated");
    assert_eq!(linked.stats.internal_link, 2);
    assert!(rows[1].evaluation.is_none());
    assert!(rows[2].evaluation.is_none());
}

#[test]
fn corrupted_archive_gets_empty_row_and_batch_continues() {
    let dir = tempdir().unwrap();
    let page = linked_page();
    write_zip(dir.path(), "alice.zip", &[("index.html", page.as_str())]);
    fs::write(dir.path().join("bob.zip"), b"this is not a zip").unwrap();

    let rows = run_batch(dir.path(), &Evaluator::default()).expect("batch");
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].name, "alice.zip");
    assert!(rows[0].evaluation.is_some());
    assert_eq!(rows[1].name, "bob.zip");
    assert!(rows[1].evaluation.is_none());
    assert!(rows[1].error.is_some());

    let mut out = Vec::new();
    write_csv_to(&rows, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], ",name,summary,info");
    assert!(lines[1].starts_with("0,alice.zip,\"{"));
    assert!(lines[1].contains("\"\"html_num\"\":\"\"fail\"\""));
    assert!(lines[1].contains("\"\"internal_link\"\":2"));
    assert_eq!(lines[2], "1,bob.zip,,");
}

#[test]
fn csv_cells_parse_back_to_json() {
    let dir = tempdir().unwrap();
    let page = linked_page();
    write_zip(dir.path(), "carol.zip", &[("index.html", page.as_str()), ("s.css", "a{b:c}")]);
    let rows = run_batch(dir.path(), &Evaluator::default()).unwrap();

    let report = dir.path().join("out").join("report.csv");
    fs::create_dir_all(report.parent().unwrap()).unwrap();
    write_csv(&rows, &report).unwrap();

    let mut reader = csv::Reader::from_path(&report).unwrap();
    let record = reader.records().next().unwrap().unwrap();
    assert_eq!(&record[1], "carol.zip");
    let summary: serde_json::Value = serde_json::from_str(&record[2]).unwrap();
    let info: serde_json::Value = serde_json::from_str(&record[3]).unwrap();
    assert_eq!(summary["alt"], "pass");
    assert_eq!(info["css"], 1);
}

#[test]
fn empty_directory_yields_header_only() {
    let dir = tempdir().unwrap();
    let rows = run_batch(dir.path(), &Evaluator::default()).unwrap();
    assert!(rows.is_empty());

    let mut out = Vec::new();
    write_csv_to(&rows, &mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), ",name,summary,info\n");
}

#[test]
fn missing_input_directory_is_an_error() {
    let dir = tempdir().unwrap();
    assert!(run_batch(&dir.path().join("nope"), &Evaluator::default()).is_err());
}

#[test]
fn summary_counts_passes_and_failures() {
    let dir = tempdir().unwrap();
    let page = linked_page();
    write_zip(dir.path(), "a.zip", &[("index.html", page.as_str())]);
    write_zip(dir.path(), "b.zip", &[("readme.txt", "no html")]);
    fs::write(dir.path().join("c.zip"), b"garbage").unwrap();

    let rows = run_batch(dir.path(), &Evaluator::default()).unwrap();
    let summary = BatchSummary::from_rows(&rows);
    assert_eq!(summary.archives, 3);
    assert_eq!(summary.evaluated, 2);
    assert_eq!(summary.failed, 1);
    assert_eq!(summary.passes["alt"], 1);
    assert_eq!(summary.passes["head_meta"], 1);
    assert_eq!(summary.passes["html_num"], 0);
    assert!(!summary.generated_at.is_empty());
}
