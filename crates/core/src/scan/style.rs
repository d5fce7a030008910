//! CSS scanner counting `{ ... }` rule blocks.

use std::sync::LazyLock;

use regex::Regex;

use crate::archive::SourceFile;
use crate::model::StatisticsRecord;
use crate::scan::ContentScanner;

/// An opening brace, at least one non-`}` character, a closing brace.
static RULE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[^}]+\}").unwrap_or_else(|e| panic!("rule block regex: {e}")));

/// Counts brace-delimited rule blocks in `.css` files.
///
/// Textual heuristic: nested braces, braces in comments and braces in strings
/// are all counted as they fall.
#[derive(Debug, Clone, Copy, Default)]
pub struct StyleScanner;

impl StyleScanner {
    pub fn count_rule_blocks(content: &[u8]) -> u64 {
        let text = String::from_utf8_lossy(content);
        RULE_BLOCK.find_iter(&text).count() as u64
    }
}

impl ContentScanner for StyleScanner {
    fn name(&self) -> &'static str {
        "style"
    }

    fn extension(&self) -> &'static str {
        ".css"
    }

    fn scan(&self, files: &[SourceFile], stats: &mut StatisticsRecord) {
        for file in files {
            let blocks = Self::count_rule_blocks(&file.content);
            tracing::debug!(file = %file.name, blocks, "counted style rule blocks");
            stats.css += blocks;
        }
    }
}
