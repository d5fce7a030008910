use std::path::Path;

use anyhow::{anyhow, Context, Result};
use rubric_core::report::write_csv;
use rubric_core::services::{run_batch, BatchSummary, Evaluator};
use serde::Serialize;

use crate::{load_rubric, resolve_path};

/// JSON output of `grade --json`.
#[derive(Debug, Serialize)]
pub struct GradeOutput {
    pub input_dir: String,
    pub report: String,
    #[serde(flatten)]
    pub summary: BatchSummary,
}

/// Grade every archive in `in_dir` and write the CSV report to `out`.
///
/// Per-archive failures become empty report rows; only an unreadable input
/// directory or an unwritable report fails the command.
pub fn grade_command(in_dir: &str, out: &str, rubric: Option<&str>, json: bool) -> Result<()> {
    let dir = resolve_path(in_dir)?;
    if !dir.is_dir() {
        return Err(anyhow!("Input directory does not exist: {}", dir.display()));
    }
    let report_path = resolve_path(out)?;

    let evaluator = Evaluator::new(load_rubric(rubric)?);
    let rows = run_batch(&dir, &evaluator)
        .with_context(|| format!("Failed to read input directory {}", dir.display()))?;
    write_csv(&rows, &report_path)
        .with_context(|| format!("Failed to write report {}", report_path.display()))?;

    let summary = BatchSummary::from_rows(&rows);
    if json {
        let output = GradeOutput {
            input_dir: dir.display().to_string(),
            report: report_path.display().to_string(),
            summary,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_summary(&dir, &report_path, &summary);
    Ok(())
}

fn print_summary(dir: &Path, report: &Path, summary: &BatchSummary) {
    println!("Graded {} archive(s) from {}", summary.archives, dir.display());
    println!("  Evaluated: {}", summary.evaluated);
    println!("  Failed:    {}", summary.failed);
    println!("  Report:    {}", report.display());
    if summary.evaluated == 0 {
        return;
    }
    println!("Passing archives per check:");
    for (check, count) in &summary.passes {
        println!("  - {check}: {count}/{}", summary.evaluated);
    }
}
