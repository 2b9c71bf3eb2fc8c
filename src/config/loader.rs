//! Manifest loading and discovery for `sprites.toml`
//!
//! Provides functions to find, load, and merge configuration.

use super::schema::Manifest;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Manifest file name searched for by [`find_manifest`].
pub const MANIFEST_FILE: &str = "sprites.toml";

/// Manifest loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("failed to read manifest: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error
    #[error("failed to parse sprites.toml: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error
    #[error("manifest validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// CLI arguments that can override manifest values
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override output directory
    pub out: Option<PathBuf>,
    /// Override image source directory
    pub images: Option<PathBuf>,
    /// Override the placement annotation ("" clears it)
    pub placement: Option<String>,
    /// Override codes-per-line
    pub line_width: Option<usize>,
}

/// Find `sprites.toml` by walking up from the current working directory.
pub fn find_manifest() -> Option<PathBuf> {
    let cwd = env::current_dir().ok()?;
    find_manifest_from(cwd)
}

/// Find `sprites.toml` by walking up from `start`.
pub fn find_manifest_from(start: PathBuf) -> Option<PathBuf> {
    let mut dir = Some(start.as_path());
    while let Some(current) = dir {
        let candidate = current.join(MANIFEST_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }
        dir = current.parent();
    }
    None
}

/// Load and validate a manifest from `path`.
pub fn load_manifest(path: &Path) -> Result<Manifest, ConfigError> {
    let text = fs::read_to_string(path)?;
    let manifest: Manifest = toml::from_str(&text)?;
    let errors = manifest.validate();
    if !errors.is_empty() {
        return Err(ConfigError::Validation(errors));
    }
    Ok(manifest)
}

/// Apply CLI overrides on top of a loaded manifest.
pub fn merge_cli_overrides(manifest: &mut Manifest, overrides: &CliOverrides) {
    if let Some(out) = &overrides.out {
        manifest.project.out = out.clone();
    }
    if let Some(images) = &overrides.images {
        manifest.project.images = images.clone();
    }
    if let Some(placement) = &overrides.placement {
        manifest.project.placement = placement.clone();
    }
    if let Some(line_width) = overrides.line_width {
        manifest.project.line_width = line_width;
    }
}
