//! Manifest build command

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use super::{EXIT_ERROR, EXIT_SUCCESS};
use crate::build::{BuildContext, BuildPipeline, ParallelBuild};
use crate::config::{find_manifest, load_manifest, merge_cli_overrides, CliOverrides};

/// Run the build command
pub fn run_build(
    manifest_arg: Option<&Path>,
    out: Option<PathBuf>,
    images: Option<PathBuf>,
    jobs: Option<usize>,
    fail_fast: bool,
    dry_run: bool,
    verbose: bool,
) -> ExitCode {
    let manifest_path = match manifest_arg {
        Some(path) => path.to_path_buf(),
        None => match find_manifest() {
            Some(path) => path,
            None => {
                eprintln!("Error: no sprites.toml found (searched upward from the cwd)");
                eprintln!("Create one or pass --manifest");
                return ExitCode::from(EXIT_ERROR);
            }
        },
    };
    if verbose {
        println!("Using manifest: {}", manifest_path.display());
    }

    let mut manifest = match load_manifest(&manifest_path) {
        Ok(manifest) => manifest,
        Err(e) => {
            eprintln!("Error loading manifest: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let overrides = CliOverrides { out, images, ..Default::default() };
    merge_cli_overrides(&mut manifest, &overrides);

    let project_root = manifest_path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    let context = BuildContext::new(manifest, project_root).with_verbose(verbose);

    let images_dir = context.images_dir();
    if !images_dir.exists() {
        eprintln!("Error: image directory not found: {}", images_dir.display());
        eprintln!("Create the directory or specify a different path with --images");
        return ExitCode::from(EXIT_ERROR);
    }

    // fail-fast implies sequential execution; parallel targets are
    // already in flight by the time one fails
    let result = if fail_fast || dry_run {
        if dry_run {
            println!("Dry run - would build:");
        }
        BuildPipeline::new(context).with_fail_fast(fail_fast).with_dry_run(dry_run).build()
    } else {
        let mut build = ParallelBuild::new(context);
        if let Some(jobs) = jobs {
            build = build.with_jobs(jobs);
        }
        match build.run() {
            Ok(result) => result,
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_ERROR);
            }
        }
    };

    if dry_run {
        return ExitCode::from(EXIT_SUCCESS);
    }

    for target in &result.targets {
        if target.status.is_success() {
            println!("[OK] {} ({} tables)", target.target_id, target.tables);
        } else {
            eprintln!("[FAIL] {} - {}", target.target_id, target.status);
        }
    }
    println!(
        "Built {} of {} headers in {:.2?}",
        result.success_count(),
        result.targets.len(),
        result.total_duration
    );

    if result.is_success() {
        ExitCode::from(EXIT_SUCCESS)
    } else {
        ExitCode::from(EXIT_ERROR)
    }
}
