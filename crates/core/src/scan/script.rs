//! JavaScript scanner counting line-like units.

use crate::archive::SourceFile;
use crate::model::StatisticsRecord;
use crate::scan::{ContentScanner, LineCounting};

/// Counts line-like units in `.js` files.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptScanner {
    counting: LineCounting,
}

impl ScriptScanner {
    pub fn new(counting: LineCounting) -> Self {
        Self { counting }
    }

    pub fn count_lines(&self, content: &[u8]) -> u64 {
        match self.counting {
            LineCounting::Lines => line_segments(content),
            LineCounting::Legacy => legacy_line_segments(content),
        }
    }
}

impl ContentScanner for ScriptScanner {
    fn name(&self) -> &'static str {
        "script"
    }

    fn extension(&self) -> &'static str {
        ".js"
    }

    fn scan(&self, files: &[SourceFile], stats: &mut StatisticsRecord) {
        for file in files {
            let lines = self.count_lines(&file.content);
            tracing::debug!(file = %file.name, lines, "counted script lines");
            stats.js_code_line += lines;
        }
    }
}

/// Segments between `\n` bytes: `"a\nb"` is 2, `""` is 1, `"a\n"` is 2.
pub fn line_segments(content: &[u8]) -> u64 {
    content.iter().filter(|&&b| b == b'\n').count() as u64 + 1
}

/// Segments between the two-character sequence `\n` in the bytes-literal
/// rendering of `content` (see [`bytes_literal`]). Also counts a literal
/// backslash followed by `n` in the source text.
pub fn legacy_line_segments(content: &[u8]) -> u64 {
    bytes_literal(content).matches("\\n").count() as u64 + 1
}

/// Render bytes as a Python-style bytes literal, e.g. `b'let x;\n'`.
///
/// Single quotes delimit the literal unless the content has a single quote
/// and no double quote. Backslash, the delimiter, tab, newline and carriage
/// return are escaped; other bytes outside printable ASCII become `\xNN`.
pub fn bytes_literal(content: &[u8]) -> String {
    let quote = if content.contains(&b'\'') && !content.contains(&b'"') { '"' } else { '\'' };

    let mut out = String::with_capacity(content.len() + 3);
    out.push('b');
    out.push(quote);
    for &byte in content {
        match byte {
            b'\\' => out.push_str("\\\\"),
            b'\t' => out.push_str("\\t"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b if b as char == quote => {
                out.push('\\');
                out.push(quote);
            }
            0x20..=0x7e => out.push(byte as char),
            _ => out.push_str(&format!("\\x{byte:02x}")),
        }
    }
    out.push(quote);
    out
}
