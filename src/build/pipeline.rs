//! Build pipeline: sprite conversion and header emission.
//!
//! One sprite runs load -> extract -> resample -> encode; one header
//! target converts its sprites and writes the rendered file. Failures
//! are scoped to the header target: a bad sprite fails its header and
//! nothing else, and a failed header writes no output at all.

use crate::build::{BuildContext, BuildResult, TargetResult};
use crate::codec::encode;
use crate::config::{HeaderConfig, SpriteConfig};
use crate::emit::{render_header, SpriteTable};
use crate::grid::{extract, GridError};
use crate::import::{load_image, ImportError};
use crate::output::write_header;
use crate::resample::{resample, ResampleError};
use std::path::Path;
use std::time::Instant;
use thiserror::Error;

/// Error converting a single sprite.
#[derive(Debug, Error)]
pub enum SpriteError {
    #[error(transparent)]
    Import(#[from] ImportError),
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Resample(#[from] ResampleError),
}

/// Convert one manifest sprite into an encoded table.
///
/// Pure apart from reading the source image; produces no output files.
pub fn convert_sprite(images_dir: &Path, sprite: &SpriteConfig) -> Result<SpriteTable, SpriteError> {
    let source_path = images_dir.join(&sprite.file);
    let grid = load_image(&source_path)?;
    let grid = extract(&grid, sprite.region.map(|r| r.to_region()))?;
    let grid = resample(&grid, sprite.width, sprite.height)?;
    let codes = encode(&grid);

    Ok(SpriteTable {
        name: sprite.name.clone(),
        label: sprite.label.clone(),
        source: sprite.file.clone(),
        width: grid.width(),
        height: grid.height(),
        codes,
    })
}

/// Build pipeline for executing manifest builds.
pub struct BuildPipeline {
    context: BuildContext,
    /// Stop on first failed target
    fail_fast: bool,
    /// Plan and report without writing files
    dry_run: bool,
}

impl BuildPipeline {
    /// Create a new build pipeline.
    pub fn new(context: BuildContext) -> Self {
        Self { context, fail_fast: false, dry_run: false }
    }

    /// Set fail-fast mode (stop on first error).
    pub fn with_fail_fast(mut self, fail_fast: bool) -> Self {
        self.fail_fast = fail_fast;
        self
    }

    /// Set dry-run mode (convert nothing, write nothing).
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn context(&self) -> &BuildContext {
        &self.context
    }

    /// Build one header target end to end.
    ///
    /// Every sprite in the group must convert before anything is
    /// written; the first sprite failure fails the whole target.
    pub fn build_header(&self, header: &HeaderConfig) -> TargetResult {
        let start = Instant::now();
        let images_dir = self.context.images_dir();

        let mut tables = Vec::with_capacity(header.sprites.len());
        for sprite in &header.sprites {
            if self.context.verbose() {
                println!("[+] Converting {} -> {}", sprite.file, sprite.name);
            }
            match convert_sprite(&images_dir, sprite) {
                Ok(table) => tables.push(table),
                Err(e) => {
                    return TargetResult::failed(
                        header.file.clone(),
                        format!("sprite '{}': {}", sprite.name, e),
                        start.elapsed(),
                    );
                }
            }
        }

        let mut format = self.context.header_format();
        format.banner = header.banner.clone();
        let text = render_header(&tables, &format);

        let out_path = self.context.out_dir().join(&header.file);
        if let Err(e) = write_header(&out_path, &text) {
            return TargetResult::failed(header.file.clone(), e.to_string(), start.elapsed());
        }

        TargetResult::success(header.file.clone(), out_path, tables.len(), start.elapsed())
    }

    /// Run the build pipeline over every header in the manifest.
    pub fn build(&self) -> BuildResult {
        let start = Instant::now();
        let mut result = BuildResult::new();

        for header in &self.context.manifest().headers {
            if self.dry_run {
                println!("  would build {} ({} tables)", header.file, header.sprites.len());
                continue;
            }
            let target = self.build_header(header);
            let failed = target.status.is_failure();
            result.targets.push(target);
            if failed && self.fail_fast {
                break;
            }
        }

        result.total_duration = start.elapsed();
        result
    }
}
