//! Per-file and per-run results of the rewrite pipeline.

use std::path::PathBuf;

use super::pipeline_config::Variant;
use super::stages::{ImportOutcome, InjectionOutcome};

/// What each stage did to one file's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StageReport {
    /// Import augmentation result
    pub import: ImportOutcome,
    /// Style declaration openers rewritten
    pub style_declarations: usize,
    /// Boilerplate injection result
    pub injection: InjectionOutcome,
    /// Registry accesses rewritten to theme accesses
    pub substitutions: usize,
}

impl StageReport {
    /// True if no stage changed anything.
    pub fn is_noop(&self) -> bool {
        self.import == ImportOutcome::Skipped
            && self.style_declarations == 0
            && self.injection == InjectionOutcome::default()
            && self.substitutions == 0
    }
}

/// Rewritten content of one file plus the stage report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformation {
    /// New file content
    pub content: String,
    /// What produced it
    pub report: StageReport,
}

/// Processing status of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// No eligibility marker; file untouched
    Ineligible,
    /// Eligible and transformed
    Processed {
        /// Transformed content differs from the original
        changed: bool,
        /// Content was written back to disk
        written: bool,
        /// Stage details
        report: StageReport,
    },
}

/// Result for a single discovered file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    /// File path as discovered
    pub path: PathBuf,
    /// What happened to it
    pub status: FileStatus,
}

impl FileOutcome {
    /// Stage report, if the file was processed.
    pub fn report(&self) -> Option<&StageReport> {
        match &self.status {
            FileStatus::Processed { report, .. } => Some(report),
            FileStatus::Ineligible => None,
        }
    }
}

/// Aggregate of one pipeline invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// Variant that ran
    pub variant: Variant,
    /// Every discovered file, in discovery order
    pub outcomes: Vec<FileOutcome>,
}

impl RunSummary {
    /// Start an empty summary
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            outcomes: Vec::new(),
        }
    }

    /// Number of discovered files
    pub fn files_discovered(&self) -> usize {
        self.outcomes.len()
    }

    /// Number of eligible files
    pub fn files_eligible(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.status != FileStatus::Ineligible)
            .count()
    }

    /// Number of files whose content changed (or would change)
    pub fn files_changed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, FileStatus::Processed { changed: true, .. }))
            .count()
    }

    /// Number of files written back to disk
    pub fn files_written(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o.status, FileStatus::Processed { written: true, .. }))
            .count()
    }

    /// Total registry accesses rewritten
    pub fn total_substitutions(&self) -> usize {
        self.outcomes
            .iter()
            .filter_map(FileOutcome::report)
            .map(|r| r.substitutions)
            .sum()
    }

    /// Files that received a prepended import
    pub fn prepended_imports(&self) -> usize {
        self.outcomes
            .iter()
            .filter_map(FileOutcome::report)
            .filter(|r| r.import == ImportOutcome::Prepended)
            .count()
    }
}
