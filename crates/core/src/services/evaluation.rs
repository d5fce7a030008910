use std::path::Path;

use crate::archive::{ArchiveError, FileIndex};
use crate::model::Evaluation;
use crate::rubric::{self, RubricConfig};
use crate::scan::{default_scanners, ScannerRegistry};

/// Coordinator that ties a rubric configuration to a scanner pipeline.
///
/// Each call works on a fresh statistics record; nothing is shared between
/// archives, so evaluating the same bytes twice gives identical results.
pub struct Evaluator {
    config: RubricConfig,
    scanners: ScannerRegistry,
}

impl Evaluator {
    pub fn new(config: RubricConfig) -> Self {
        let scanners = default_scanners(&config.scan);
        Self { config, scanners }
    }

    /// Use a custom scanner pipeline instead of the default html/style/script set.
    pub fn with_scanners(config: RubricConfig, scanners: ScannerRegistry) -> Self {
        Self { config, scanners }
    }

    pub fn config(&self) -> &RubricConfig {
        &self.config
    }

    pub fn scanner_names(&self) -> Vec<&'static str> {
        self.scanners.names()
    }

    pub fn index_path(&self, path: impl AsRef<Path>) -> Result<FileIndex, ArchiveError> {
        FileIndex::open(path, &self.config.limits)
    }

    pub fn evaluate_path(&self, path: impl AsRef<Path>) -> Result<Evaluation, ArchiveError> {
        let index = self.index_path(path)?;
        Ok(self.evaluate_index(&index))
    }

    pub fn evaluate_bytes(&self, bytes: &[u8]) -> Result<Evaluation, ArchiveError> {
        let index = FileIndex::from_bytes(bytes, &self.config.limits)?;
        Ok(self.evaluate_index(&index))
    }

    /// Scan an already-built index and apply the rubric. Cannot fail.
    pub fn evaluate_index(&self, index: &FileIndex) -> Evaluation {
        let stats = self.scanners.run(index);
        let verdict = rubric::evaluate(&stats, &self.config.thresholds);
        let richness = rubric::richness(&stats, &self.config.thresholds);
        Evaluation { stats, verdict, richness }
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(RubricConfig::default())
    }
}
