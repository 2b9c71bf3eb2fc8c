//! Manifest inspection command

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use super::{find_image_files, EXIT_ERROR, EXIT_SUCCESS};
use crate::config::{find_manifest, load_manifest};

/// Run the info command: summarize the manifest and cross-check the
/// catalog against what is actually on disk.
pub fn run_info(manifest_arg: Option<&Path>) -> ExitCode {
    let manifest_path = match manifest_arg.map(Path::to_path_buf).or_else(find_manifest) {
        Some(path) => path,
        None => {
            eprintln!("Error: no sprites.toml found (searched upward from the cwd)");
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let manifest = match load_manifest(&manifest_path) {
        Ok(manifest) => manifest,
        Err(e) => {
            eprintln!("Error loading manifest: {}", e);
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let project_root = manifest_path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."));
    let images_dir = if manifest.project.images.is_absolute() {
        manifest.project.images.clone()
    } else {
        project_root.join(&manifest.project.images)
    };

    println!("Manifest: {}", manifest_path.display());
    println!("Images:   {}", images_dir.display());
    println!("Output:   {}", project_root.join(&manifest.project.out).display());
    println!();

    let mut referenced = HashSet::new();
    for header in &manifest.headers {
        println!("{} ({} tables)", header.file, header.sprites.len());
        for sprite in &header.sprites {
            referenced.insert(images_dir.join(&sprite.file));
            let exists = images_dir.join(&sprite.file).is_file();
            let marker = if exists { " " } else { "!" };
            println!(
                "  {}{} {}x{} <- {}",
                marker, sprite.name, sprite.width, sprite.height, sprite.file
            );
        }
    }

    let missing: Vec<_> = referenced.iter().filter(|p| !p.is_file()).collect();
    let on_disk = find_image_files(&images_dir);
    let unreferenced: Vec<_> = on_disk.iter().filter(|p| !referenced.contains(*p)).collect();

    if !missing.is_empty() {
        println!("\n{} referenced image(s) missing from {}", missing.len(), images_dir.display());
    }
    if !unreferenced.is_empty() {
        println!("\nImages on disk but not in the manifest:");
        for path in &unreferenced {
            println!("  {}", path.display());
        }
    }

    if missing.is_empty() {
        ExitCode::from(EXIT_SUCCESS)
    } else {
        ExitCode::from(EXIT_ERROR)
    }
}
