//! Build result types.
//!
//! Contains types for representing the outcome of build operations.

use std::path::PathBuf;
use std::time::Duration;

/// Status of a single header target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildStatus {
    /// Header generated and written
    Success,
    /// Header failed; no file was written
    Failed(String),
}

impl BuildStatus {
    /// Check if the status indicates success.
    pub fn is_success(&self) -> bool {
        matches!(self, BuildStatus::Success)
    }

    /// Check if the status indicates failure.
    pub fn is_failure(&self) -> bool {
        matches!(self, BuildStatus::Failed(_))
    }
}

impl std::fmt::Display for BuildStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildStatus::Success => write!(f, "success"),
            BuildStatus::Failed(err) => write!(f, "failed: {}", err),
        }
    }
}

/// Result of building a single header target.
#[derive(Debug, Clone)]
pub struct TargetResult {
    /// Header file name from the manifest
    pub target_id: String,
    /// Build status
    pub status: BuildStatus,
    /// Output file written (empty on failure)
    pub outputs: Vec<PathBuf>,
    /// Number of sprite tables in the header
    pub tables: usize,
    /// Build duration
    pub duration: Duration,
}

impl TargetResult {
    /// Create a successful result.
    pub fn success(target_id: String, output: PathBuf, tables: usize, duration: Duration) -> Self {
        Self { target_id, status: BuildStatus::Success, outputs: vec![output], tables, duration }
    }

    /// Create a failed result.
    pub fn failed(target_id: String, error: String, duration: Duration) -> Self {
        Self { target_id, status: BuildStatus::Failed(error), outputs: vec![], tables: 0, duration }
    }
}

/// Aggregate result of a build run.
#[derive(Debug, Clone, Default)]
pub struct BuildResult {
    /// Per-target results, in manifest order
    pub targets: Vec<TargetResult>,
    /// Wall-clock duration of the whole run
    pub total_duration: Duration,
}

impl BuildResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of targets that built successfully.
    pub fn success_count(&self) -> usize {
        self.targets.iter().filter(|t| t.status.is_success()).count()
    }

    /// Number of targets that failed.
    pub fn failure_count(&self) -> usize {
        self.targets.iter().filter(|t| t.status.is_failure()).count()
    }

    /// True when every target built.
    pub fn is_success(&self) -> bool {
        self.failure_count() == 0
    }

    /// Failed targets, for error reporting.
    pub fn failures(&self) -> impl Iterator<Item = &TargetResult> {
        self.targets.iter().filter(|t| t.status.is_failure())
    }
}
