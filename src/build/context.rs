//! Build context: manifest plus resolved project paths.

use crate::config::Manifest;
use crate::emit::{HeaderFormat, TableFormat};
use std::path::PathBuf;

/// Everything a build needs to run: the manifest and the directory its
/// relative paths resolve against.
#[derive(Debug, Clone)]
pub struct BuildContext {
    manifest: Manifest,
    project_root: PathBuf,
    verbose: bool,
}

impl BuildContext {
    /// Create a new build context.
    pub fn new(manifest: Manifest, project_root: PathBuf) -> Self {
        Self { manifest, project_root, verbose: false }
    }

    /// Enable verbose progress output.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    pub fn project_root(&self) -> &PathBuf {
        &self.project_root
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Source image directory, resolved against the project root.
    pub fn images_dir(&self) -> PathBuf {
        self.resolve(&self.manifest.project.images)
    }

    /// Output directory, resolved against the project root.
    pub fn out_dir(&self) -> PathBuf {
        self.resolve(&self.manifest.project.out)
    }

    fn resolve(&self, path: &std::path::Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.project_root.join(path)
        }
    }

    /// Header format derived from the project settings.
    ///
    /// Empty `include`/`placement` strings mean "omit entirely"; the
    /// banner is per-header and filled in by the pipeline.
    pub fn header_format(&self) -> HeaderFormat {
        let project = &self.manifest.project;
        HeaderFormat {
            include: (!project.include.is_empty()).then(|| project.include.clone()),
            banner: None,
            table: TableFormat {
                line_width: project.line_width,
                placement: (!project.placement.is_empty()).then(|| project.placement.clone()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ProjectConfig;

    #[test]
    fn test_paths_resolve_against_root() {
        let manifest = Manifest::default();
        let ctx = BuildContext::new(manifest, PathBuf::from("/proj"));
        assert_eq!(ctx.images_dir(), PathBuf::from("/proj/art"));
        assert_eq!(ctx.out_dir(), PathBuf::from("/proj/generated"));
    }

    #[test]
    fn test_absolute_paths_win() {
        let manifest = Manifest {
            project: ProjectConfig { out: PathBuf::from("/abs/out"), ..Default::default() },
            headers: vec![],
        };
        let ctx = BuildContext::new(manifest, PathBuf::from("/proj"));
        assert_eq!(ctx.out_dir(), PathBuf::from("/abs/out"));
    }

    #[test]
    fn test_empty_placement_clears_annotation() {
        let manifest = Manifest {
            project: ProjectConfig {
                placement: String::new(),
                include: String::new(),
                ..Default::default()
            },
            headers: vec![],
        };
        let ctx = BuildContext::new(manifest, PathBuf::from("."));
        let format = ctx.header_format();
        assert_eq!(format.table.placement, None);
        assert_eq!(format.include, None);
    }
}
