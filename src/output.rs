//! Generated-file writing and output path rules

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for output operations
#[derive(Debug, Error)]
pub enum OutputError {
    /// IO error during file operations
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Write generated header text to a file, creating parent directories.
///
/// The text is written in one call; callers must only pass fully
/// rendered headers, so a crash or earlier pipeline failure never
/// leaves a partial table on disk.
pub fn write_header(path: &Path, text: &str) -> Result<(), OutputError> {
    let wrap = |source: io::Error| OutputError::Io { path: path.display().to_string(), source };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(wrap)?;
        }
    }
    fs::write(path, text).map_err(wrap)
}

/// Output path for single-sprite convert mode.
///
/// | Scenario | Output |
/// |----------|--------|
/// | `-o out.h` | `out.h` |
/// | `-o dir/` | `dir/{identifier}.h` |
/// | no `-o` | stdout (caller handles `None`) |
pub fn convert_output_path(identifier: &str, output_arg: Option<&Path>) -> Option<PathBuf> {
    let output = output_arg?;
    let is_dir = output.as_os_str().to_string_lossy().ends_with('/') || output.is_dir();
    if is_dir {
        Some(output.join(format!("{}.h", identifier)))
    } else {
        Some(output.to_path_buf())
    }
}
