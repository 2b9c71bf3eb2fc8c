//! Parallel build execution.
//!
//! Header targets share no state (each reads its own source images and
//! writes its own file), so a batch build is embarrassingly parallel:
//! every target goes to the rayon pool at once and results are
//! reassembled in manifest order.

use crate::build::{BuildContext, BuildPipeline, BuildResult};
use rayon::prelude::*;
use std::time::Instant;
use thiserror::Error;

/// Error setting up the worker pool.
#[derive(Debug, Error)]
pub enum ParallelError {
    #[error("failed to build worker pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}

/// Default number of parallel jobs (uses available parallelism).
fn default_jobs() -> usize {
    std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
}

/// Parallel build executor.
pub struct ParallelBuild {
    pipeline: BuildPipeline,
    /// Number of parallel jobs
    jobs: usize,
}

impl ParallelBuild {
    /// Create a new parallel build.
    pub fn new(context: BuildContext) -> Self {
        Self { pipeline: BuildPipeline::new(context), jobs: default_jobs() }
    }

    /// Set the number of parallel jobs.
    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs.max(1);
        self
    }

    /// Get the number of parallel jobs.
    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// Run the build with all header targets in flight concurrently.
    ///
    /// Unlike the sequential pipeline there is no fail-fast: by the
    /// time one target reports failure its siblings are already
    /// running, and per-target isolation makes finishing them harmless.
    pub fn run(&self) -> Result<BuildResult, ParallelError> {
        let start = Instant::now();

        let pool = rayon::ThreadPoolBuilder::new().num_threads(self.jobs).build()?;
        let headers = &self.pipeline.context().manifest().headers;
        let targets = pool.install(|| {
            headers.par_iter().map(|header| self.pipeline.build_header(header)).collect()
        });

        Ok(BuildResult { targets, total_duration: start.elapsed() })
    }
}
