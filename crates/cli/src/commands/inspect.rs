use std::collections::BTreeMap;

use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use rubric_core::model::{Richness, StatisticsRecord, Verdict};
use rubric_core::services::Evaluator;
use serde::Serialize;

use crate::{load_rubric, resolve_path, sha256_file};

/// Everything `inspect` knows about one archive.
#[derive(Debug, Serialize)]
pub struct ArchiveSnapshot {
    pub archive: String,
    pub sha256: String,
    pub evaluated_at: String,
    /// Number of files per extension bucket.
    pub files: BTreeMap<String, usize>,
    pub summary: Verdict,
    pub info: StatisticsRecord,
    pub richness: Richness,
}

/// Evaluate a single archive and print its buckets, statistics, and verdict.
pub fn inspect_command(archive: &str, rubric: Option<&str>, json: bool) -> Result<()> {
    let path = resolve_path(archive)?;
    if !path.is_file() {
        return Err(anyhow!("Archive does not exist: {}", path.display()));
    }

    let evaluator = Evaluator::new(load_rubric(rubric)?);
    let index = evaluator
        .index_path(&path)
        .with_context(|| format!("Failed to index archive {}", path.display()))?;
    let evaluation = evaluator.evaluate_index(&index);

    let snapshot = ArchiveSnapshot {
        archive: path.display().to_string(),
        sha256: sha256_file(&path)?,
        evaluated_at: Utc::now().to_rfc3339(),
        files: index.bucket_sizes(),
        summary: evaluation.verdict,
        info: evaluation.stats,
        richness: evaluation.richness,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    print_snapshot(&snapshot);
    Ok(())
}

fn print_snapshot(snapshot: &ArchiveSnapshot) {
    println!("Archive: {}", snapshot.archive);
    println!("SHA-256: {}", snapshot.sha256);
    println!();

    println!("Files:");
    if snapshot.files.is_empty() {
        println!("  (none)");
    }
    for (ext, count) in &snapshot.files {
        let label = if ext.is_empty() { "(no extension)" } else { ext.as_str() };
        println!("  {label}: {count}");
    }
    println!();

    let info = &snapshot.info;
    println!("Statistics:");
    println!("  html_num: {}", info.html_num);
    println!("  internal_link: {}", info.internal_link);
    println!("  external_link: {}", info.external_link);
    println!("  image: {}", info.image);
    println!("  head_meta: {}", info.head_meta);
    println!("  alt_ck: {}", info.alt_ck);
    println!("  css: {}", info.css);
    println!("  js_code_line: {}", info.js_code_line);
    for (name, count) in info.feature_counters() {
        println!("  {name}: {count}");
    }
    println!("  table_ck: {}", info.table_ck);
    println!("  media_type: {}", join_set(&info.media_type));
    println!("  iframe_types: {}", join_set(&info.iframe_types));
    println!();

    println!("Checks ({}/{} passed):", snapshot.summary.passed(), Verdict::CHECK_NAMES.len());
    for (name, outcome) in snapshot.summary.checks() {
        println!("  - {name}: {}", outcome.as_str());
    }
    println!("Richness: {}/{}", snapshot.richness.score, snapshot.richness.max);
}

fn join_set(set: &std::collections::BTreeSet<String>) -> String {
    if set.is_empty() {
        "-".to_string()
    } else {
        set.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
    }
}
