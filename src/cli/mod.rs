//! Command-line interface implementation
//!
//! This module provides the CLI entry point and dispatches to submodules
//! for specific command implementations.

mod build;
mod convert;
mod info;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use glob::glob;

/// Exit codes
pub(crate) const EXIT_SUCCESS: u8 = 0;
pub(crate) const EXIT_ERROR: u8 = 1;

/// Image extensions the `image` crate decodes that sprite sources use.
const IMAGE_EXTENSIONS: &[&str] = &["png", "gif", "bmp"];

/// Find all sprite source images in a directory (recursively).
pub fn find_image_files(dir: &std::path::Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    let dir_str = dir.display().to_string();

    for ext in IMAGE_EXTENSIONS {
        if let Ok(paths) = glob(&format!("{}/**/*.{}", dir_str, ext)) {
            files.extend(paths.filter_map(Result::ok));
        }
    }

    files.sort();
    files
}

/// Sprite565 - compile PNG sprites into PROGMEM RGB565 tables
#[derive(Parser)]
#[command(name = "sprite565")]
#[command(about = "Sprite565 - compile PNG sprites into PROGMEM RGB565 tables for firmware")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Convert a single image to one RGB565 table
    Convert {
        /// Source image file
        input: PathBuf,

        /// Target width in pixels
        width: u32,

        /// Target height in pixels
        height: u32,

        /// C identifier for the generated array
        name: String,

        /// Output file or directory (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Human label rendered as a leading comment
        #[arg(short, long)]
        label: Option<String>,

        /// Atlas crop "left,top,right,bottom", applied before resizing
        #[arg(short, long, value_parser = convert::parse_region)]
        region: Option<crate::grid::Region>,

        /// Storage-placement annotation (empty string omits it)
        #[arg(long, default_value = "PROGMEM")]
        placement: String,

        /// Color codes per generated line
        #[arg(long, default_value = "16")]
        line_width: usize,

        /// Emit a full header file (#pragma once + include) instead of
        /// the bare table
        #[arg(long)]
        header: bool,
    },

    /// Build every header in the sprites.toml manifest
    Build {
        /// Manifest path (searched upward from the cwd if omitted)
        #[arg(short, long)]
        manifest: Option<PathBuf>,

        /// Override the output directory
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Override the source image directory
        #[arg(short, long)]
        images: Option<PathBuf>,

        /// Number of parallel jobs (defaults to available parallelism)
        #[arg(short, long)]
        jobs: Option<usize>,

        /// Build headers one at a time, stopping at the first failure
        #[arg(long)]
        fail_fast: bool,

        /// Report what would be built without converting anything
        #[arg(long)]
        dry_run: bool,

        /// Print each sprite as it converts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Summarize a manifest and cross-check it against the image dir
    Info {
        /// Manifest path (searched upward from the cwd if omitted)
        #[arg(short, long)]
        manifest: Option<PathBuf>,
    },
}

/// CLI entry point: parse args and dispatch.
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            width,
            height,
            name,
            output,
            label,
            region,
            placement,
            line_width,
            header,
        } => convert::run_convert(
            &input, width, height, &name, output.as_deref(), label, region, &placement,
            line_width, header,
        ),
        Commands::Build { manifest, out, images, jobs, fail_fast, dry_run, verbose } => {
            build::run_build(
                manifest.as_deref(),
                out,
                images,
                jobs,
                fail_fast,
                dry_run,
                verbose,
            )
        }
        Commands::Info { manifest } => info::run_info(manifest.as_deref()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_cli_parses_convert() {
        let cli = Cli::try_parse_from([
            "sprite565", "convert", "fish.png", "30", "25", "fish_idle", "-o", "out.h",
        ])
        .unwrap();
        match cli.command {
            Commands::Convert { width, height, name, .. } => {
                assert_eq!(width, 30);
                assert_eq!(height, 25);
                assert_eq!(name, "fish_idle");
            }
            _ => panic!("expected convert"),
        }
    }

    #[test]
    fn test_cli_rejects_bad_region() {
        let result = Cli::try_parse_from([
            "sprite565", "convert", "fish.png", "8", "8", "fish", "--region", "1,2,3",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_find_image_files_filters_extensions() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("a.png"), b"").unwrap();
        std::fs::write(temp.path().join("b.txt"), b"").unwrap();
        std::fs::create_dir(temp.path().join("sub")).unwrap();
        std::fs::write(temp.path().join("sub/c.bmp"), b"").unwrap();

        let files = find_image_files(temp.path());
        let names: Vec<_> = files
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(String::from))
            .collect();
        assert_eq!(names, vec!["a.png", "c.bmp"]);
    }
}
