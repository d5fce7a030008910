use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::model::{Evaluation, Verdict};
use crate::services::evaluation::Evaluator;

/// Result for one input file of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    /// File name of the archive inside the input directory.
    pub name: String,
    /// `None` when the archive could not be indexed.
    pub evaluation: Option<Evaluation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Totals over a finished batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchSummary {
    pub generated_at: String,
    pub archives: usize,
    pub evaluated: usize,
    pub failed: usize,
    /// Number of evaluated archives passing each check.
    pub passes: BTreeMap<String, usize>,
}

impl BatchSummary {
    pub fn from_rows(rows: &[ReportRow]) -> Self {
        let mut passes: BTreeMap<String, usize> =
            Verdict::CHECK_NAMES.iter().map(|name| (name.to_string(), 0)).collect();
        let mut evaluated = 0;

        for eval in rows.iter().filter_map(|row| row.evaluation.as_ref()) {
            evaluated += 1;
            for (name, outcome) in eval.verdict.checks() {
                if outcome.is_pass() {
                    *passes.entry(name.to_string()).or_default() += 1;
                }
            }
        }

        Self {
            generated_at: Utc::now().to_rfc3339(),
            archives: rows.len(),
            evaluated,
            failed: rows.len() - evaluated,
            passes,
        }
    }
}

/// Regular files directly inside `dir`, sorted by file name.
///
/// Every file is treated as a candidate archive regardless of extension.
/// Symlinks are followed; subdirectories are skipped. An entry whose target
/// cannot be resolved is kept so it is reported as a failed row.
pub fn collect_archives(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut archives = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        match fs::metadata(&path) {
            Ok(meta) if !meta.is_file() => {
                tracing::debug!(path = %path.display(), "skipping non-file entry");
                continue;
            }
            Ok(_) => {}
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "unresolvable entry");
            }
        }
        archives.push(path);
    }
    archives.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(archives)
}

/// Evaluate every archive in `dir`, one row per file in name order.
///
/// A failing archive becomes a row without an evaluation; only failing to
/// list `dir` itself is an error.
pub fn run_batch(dir: &Path, evaluator: &Evaluator) -> std::io::Result<Vec<ReportRow>> {
    let archives = collect_archives(dir)?;
    tracing::info!(dir = %dir.display(), archives = archives.len(), "grading archives");

    let rows = archives
        .iter()
        .map(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string());

            match evaluator.evaluate_path(path) {
                Ok(evaluation) => {
                    tracing::info!(
                        archive = %name,
                        passed = evaluation.verdict.passed(),
                        richness = evaluation.richness.score,
                        "evaluated archive"
                    );
                    ReportRow { name, evaluation: Some(evaluation), error: None }
                }
                Err(err) => {
                    tracing::warn!(archive = %name, error = %err, "failed to evaluate archive");
                    ReportRow { name, evaluation: None, error: Some(err.to_string()) }
                }
            }
        })
        .collect();

    Ok(rows)
}
