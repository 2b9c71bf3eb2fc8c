//! Manifest schema for `sprites.toml`
//!
//! A manifest is the catalog of sprite assets for one firmware project:
//! where the source PNGs live, where generated headers go, and which
//! tables each header contains. Example:
//!
//! ```toml
//! [project]
//! images = "art/pngs"
//! out = "src/sprites/generated"
//!
//! [[header]]
//! file = "clownfish_frames.h"
//! banner = "CLOWNFISH SPRITES - Generated from PNG"
//!
//! [[header.sprite]]
//! name = "clownfish_idle_f0"
//! file = "Clownfish_idle_sprite_frame_1.png"
//! label = "IDLE Frame 0"
//! width = 30
//! height = 25
//! ```

use crate::emit::DEFAULT_LINE_WIDTH;
use crate::grid::Region;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level manifest structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Project-wide settings
    #[serde(default)]
    pub project: ProjectConfig,
    /// Generated header files
    #[serde(default, rename = "header")]
    pub headers: Vec<HeaderConfig>,
}

/// Project-wide settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Directory containing source images, relative to the manifest
    #[serde(default = "default_images_dir")]
    pub images: PathBuf,
    /// Directory for generated headers, relative to the manifest
    #[serde(default = "default_out_dir")]
    pub out: PathBuf,
    /// Include emitted after `#pragma once`; empty string disables it
    #[serde(default = "default_include")]
    pub include: String,
    /// Storage-placement annotation; empty string disables it
    #[serde(default = "default_placement")]
    pub placement: String,
    /// Color codes per generated line
    #[serde(default = "default_line_width")]
    pub line_width: usize,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            images: default_images_dir(),
            out: default_out_dir(),
            include: default_include(),
            placement: default_placement(),
            line_width: default_line_width(),
        }
    }
}

fn default_images_dir() -> PathBuf {
    PathBuf::from("art")
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("generated")
}

fn default_include() -> String {
    "<Arduino.h>".to_string()
}

fn default_placement() -> String {
    "PROGMEM".to_string()
}

fn default_line_width() -> usize {
    DEFAULT_LINE_WIDTH
}

/// One generated header file and the tables it contains.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeaderConfig {
    /// Output file name, relative to `project.out`
    pub file: String,
    /// Banner comment at the top of the file
    #[serde(default)]
    pub banner: Option<String>,
    /// Sprite tables, in emission order
    #[serde(default, rename = "sprite")]
    pub sprites: Vec<SpriteConfig>,
}

/// One sprite table.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpriteConfig {
    /// C identifier for the generated array
    pub name: String,
    /// Source image file, relative to `project.images`
    pub file: String,
    /// Human label for the generated comment
    #[serde(default)]
    pub label: Option<String>,
    /// Target width in pixels
    pub width: u32,
    /// Target height in pixels
    pub height: u32,
    /// Atlas crop, applied before resizing
    #[serde(default)]
    pub region: Option<RegionConfig>,
}

/// Atlas crop bounds in source pixel coordinates (half-open).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegionConfig {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl RegionConfig {
    pub fn to_region(self) -> Region {
        Region::new(self.left, self.top, self.right, self.bottom)
    }
}

/// Check that a table name is a valid C identifier.
pub fn is_c_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl Manifest {
    /// Validate manifest-level invariants, collecting every problem.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.project.line_width == 0 {
            errors.push("project.line_width must be at least 1".to_string());
        }

        let mut seen_names = std::collections::HashSet::new();
        let mut seen_files = std::collections::HashSet::new();

        for header in &self.headers {
            if header.file.is_empty() {
                errors.push("header.file must not be empty".to_string());
            }
            if !seen_files.insert(header.file.clone()) {
                errors.push(format!("duplicate header file '{}'", header.file));
            }
            if header.sprites.is_empty() {
                errors.push(format!("header '{}' declares no sprites", header.file));
            }
            for sprite in &header.sprites {
                if !is_c_identifier(&sprite.name) {
                    errors.push(format!(
                        "sprite name '{}' is not a valid C identifier",
                        sprite.name
                    ));
                }
                if !seen_names.insert(sprite.name.clone()) {
                    errors.push(format!("duplicate sprite name '{}'", sprite.name));
                }
                if sprite.width == 0 || sprite.height == 0 {
                    errors.push(format!(
                        "sprite '{}' has zero target dimension {}x{}",
                        sprite.name, sprite.width, sprite.height
                    ));
                }
                if let Some(region) = &sprite.region {
                    if region.left >= region.right || region.top >= region.bottom {
                        errors.push(format!("sprite '{}' has an empty region", sprite.name));
                    }
                }
            }
        }

        errors
    }

    /// All sprite entries across all headers.
    pub fn sprites(&self) -> impl Iterator<Item = &SpriteConfig> {
        self.headers.iter().flat_map(|h| h.sprites.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sprite(name: &str) -> SpriteConfig {
        SpriteConfig {
            name: name.to_string(),
            file: "fish.png".to_string(),
            label: None,
            width: 16,
            height: 16,
            region: None,
        }
    }

    #[test]
    fn test_c_identifier_rules() {
        assert!(is_c_identifier("clownfish_idle_f0"));
        assert!(is_c_identifier("_private"));
        assert!(!is_c_identifier("0start"));
        assert!(!is_c_identifier("has-dash"));
        assert!(!is_c_identifier(""));
    }

    #[test]
    fn test_validate_accepts_minimal_manifest() {
        let manifest = Manifest {
            project: ProjectConfig::default(),
            headers: vec![HeaderConfig {
                file: "fish.h".to_string(),
                banner: None,
                sprites: vec![sprite("fish_idle")],
            }],
        };
        assert!(manifest.validate().is_empty());
    }

    #[test]
    fn test_validate_flags_duplicates_and_bad_names() {
        let manifest = Manifest {
            project: ProjectConfig::default(),
            headers: vec![HeaderConfig {
                file: "fish.h".to_string(),
                banner: None,
                sprites: vec![sprite("fish"), sprite("fish"), sprite("1bad")],
            }],
        };
        let errors = manifest.validate();
        assert!(errors.iter().any(|e| e.contains("duplicate sprite name")));
        assert!(errors.iter().any(|e| e.contains("not a valid C identifier")));
    }

    #[test]
    fn test_validate_flags_zero_dimensions_and_empty_region() {
        let mut bad = sprite("fish");
        bad.width = 0;
        bad.region = Some(RegionConfig { left: 4, top: 0, right: 4, bottom: 8 });
        let manifest = Manifest {
            project: ProjectConfig::default(),
            headers: vec![HeaderConfig {
                file: "fish.h".to_string(),
                banner: None,
                sprites: vec![bad],
            }],
        };
        let errors = manifest.validate();
        assert!(errors.iter().any(|e| e.contains("zero target dimension")));
        assert!(errors.iter().any(|e| e.contains("empty region")));
    }

    #[test]
    fn test_parse_example_manifest() {
        let toml_src = r#"
            [project]
            images = "art/pngs"
            out = "src/sprites/generated"

            [[header]]
            file = "clownfish_frames.h"
            banner = "CLOWNFISH SPRITES - Generated from PNG"

            [[header.sprite]]
            name = "clownfish_idle_f0"
            file = "Clownfish_idle_sprite_frame_1.png"
            label = "IDLE Frame 0"
            width = 30
            height = 25

            [[header.sprite]]
            name = "particle_crumb"
            file = "Particle_effects_collection.png"
            width = 8
            height = 8
            region = { left = 0, top = 0, right = 512, bottom = 512 }
        "#;
        let manifest: Manifest = toml::from_str(toml_src).unwrap();
        assert_eq!(manifest.headers.len(), 1);
        assert_eq!(manifest.headers[0].sprites.len(), 2);
        let crumb = &manifest.headers[0].sprites[1];
        assert_eq!(crumb.region.unwrap().to_region().width(), 512);
        assert_eq!(manifest.project.line_width, 16);
        assert_eq!(manifest.project.placement, "PROGMEM");
    }
}
