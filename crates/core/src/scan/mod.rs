//! Per-file-type content scanners.
//!
//! Each scanner consumes one extension bucket of a [`FileIndex`] and adds its
//! counts into a shared [`StatisticsRecord`]. Scanners operate on whatever
//! bytes they are given and cannot fail; malformed content only yields lower
//! (or approximate) counts.
//!
//! [`FileIndex`]: crate::archive::FileIndex

pub mod html;
pub mod script;
pub mod style;

use serde::{Deserialize, Serialize};

use crate::archive::{FileIndex, SourceFile};
use crate::model::StatisticsRecord;

pub use html::HtmlScanner;
pub use script::ScriptScanner;
pub use style::StyleScanner;

/// How per-document HTML counters that historically reset on every document
/// (`list_ck`, `inline_code`, `code`, `tooltips`) are combined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accumulation {
    /// Keep the value from the last HTML document scanned.
    #[default]
    LastDocument,
    /// Sum across all HTML documents like every other counter.
    Sum,
}

/// How script files are split into line-like units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineCounting {
    /// Segments between `\n` terminators in the decoded text.
    #[default]
    Lines,
    /// Segments between escaped `\n` sequences in the Python-style bytes
    /// literal rendering of the file.
    Legacy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    pub accumulation: Accumulation,
    pub line_counting: LineCounting,
}

/// Trait implemented by content scanners; each owns one file extension.
pub trait ContentScanner: Send + Sync {
    fn name(&self) -> &'static str;

    /// Extension bucket this scanner consumes (leading dot included).
    fn extension(&self) -> &'static str;

    fn scan(&self, files: &[SourceFile], stats: &mut StatisticsRecord);
}

/// Ordered set of scanners; they run in registration order.
#[derive(Default)]
pub struct ScannerRegistry {
    scanners: Vec<Box<dyn ContentScanner>>,
}

impl ScannerRegistry {
    pub fn new() -> Self {
        Self { scanners: Vec::new() }
    }

    pub fn register<S: ContentScanner + 'static>(&mut self, scanner: S) -> &mut Self {
        self.scanners.push(Box::new(scanner));
        self
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.scanners.iter().map(|s| s.name()).collect()
    }

    /// Run every scanner over its bucket of `index`, starting from a fresh record.
    pub fn run(&self, index: &FileIndex) -> StatisticsRecord {
        let mut stats = StatisticsRecord::new();
        for scanner in &self.scanners {
            let files = index.bucket(scanner.extension());
            tracing::debug!(
                scanner = scanner.name(),
                files = files.len(),
                "running content scanner"
            );
            scanner.scan(files, &mut stats);
        }
        stats
    }
}

/// HTML, style and script scanners configured from `options`.
pub fn default_scanners(options: &ScanOptions) -> ScannerRegistry {
    let mut registry = ScannerRegistry::new();
    registry
        .register(HtmlScanner::new(options.accumulation))
        .register(StyleScanner)
        .register(ScriptScanner::new(options.line_counting));
    registry
}
