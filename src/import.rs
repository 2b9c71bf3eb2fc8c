//! Source image loading
//!
//! Thin wrapper around the `image` crate: decode a sprite source file
//! into a [`PixelGrid`] of RGBA samples. Everything downstream of this
//! module is format-agnostic.

use crate::grid::PixelGrid;
use image::io::Reader as ImageReader;
use std::io;
use std::path::Path;
use thiserror::Error;

/// Error type for source image loading
#[derive(Debug, Error)]
pub enum ImportError {
    /// IO error opening the file
    #[error("failed to open {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    /// Upstream decoder failure, surfaced opaquely
    #[error("failed to decode {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: image::ImageError,
    },
}

/// Decode an image file into an RGBA pixel grid.
pub fn load_image(path: &Path) -> Result<PixelGrid, ImportError> {
    let reader = ImageReader::open(path).map_err(|source| ImportError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let image = reader.decode().map_err(|source| ImportError::Decode {
        path: path.display().to_string(),
        source,
    })?;
    Ok(PixelGrid::from_image(&image.to_rgba8()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_image(Path::new("no/such/sprite.png")).unwrap_err();
        assert!(matches!(err, ImportError::Io { .. }));
    }

    #[test]
    fn test_garbage_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.png");
        std::fs::write(&path, b"not a png at all").unwrap();
        let err = load_image(&path).unwrap_err();
        assert!(matches!(err, ImportError::Decode { .. }));
    }

    #[test]
    fn test_round_trip_through_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dot.png");
        let mut img = image::RgbaImage::new(2, 1);
        img.put_pixel(0, 0, image::Rgba([255, 0, 0, 255]));
        img.put_pixel(1, 0, image::Rgba([0, 0, 0, 0]));
        img.save(&path).unwrap();

        let grid = load_image(&path).unwrap();
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.height(), 1);
        assert_eq!(grid.get(0, 0), image::Rgba([255, 0, 0, 255]));
    }
}
