//! Nearest-neighbor resampling
//!
//! Sprite art is flat color regions and hard edges; any interpolating
//! filter would smear blended pixels across transparency boundaries and
//! defeat the color-key classification in [`crate::codec`]. Resizing
//! therefore always picks the single nearest source pixel, the same
//! policy the rest of the pixel-art toolchain uses for scaling.

use crate::grid::PixelGrid;
use thiserror::Error;

/// Error type for resampling
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResampleError {
    /// Target width or height of zero
    #[error("invalid target dimensions {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Resize a grid to exactly `target_width` x `target_height`.
///
/// When the grid already has the target size it is returned unchanged,
/// so a no-op resize accumulates no resampling error. Otherwise each
/// destination pixel (dx, dy) samples the source at
/// `(dx * src_w / dst_w, dy * src_h / dst_h)` with truncating integer
/// division, clamped to the source bounds.
pub fn resample(
    grid: &PixelGrid,
    target_width: u32,
    target_height: u32,
) -> Result<PixelGrid, ResampleError> {
    if target_width == 0 || target_height == 0 {
        return Err(ResampleError::InvalidDimensions {
            width: target_width,
            height: target_height,
        });
    }
    if target_width == grid.width() && target_height == grid.height() {
        return Ok(grid.clone());
    }

    let mut pixels = Vec::with_capacity((target_width as usize) * (target_height as usize));
    for dy in 0..target_height {
        let sy = nearest_index(dy, grid.height(), target_height);
        for dx in 0..target_width {
            let sx = nearest_index(dx, grid.width(), target_width);
            pixels.push(grid.get(sx, sy));
        }
    }
    Ok(PixelGrid::from_pixels(target_width, target_height, pixels))
}

/// Map a destination index to its nearest source index.
///
/// Truncating scale by `source / target`, clamped to the last source
/// index. u64 arithmetic keeps the product exact for any u32 sizes.
fn nearest_index(dst: u32, source: u32, target: u32) -> u32 {
    let scaled = (dst as u64) * (source as u64) / (target as u64);
    (scaled as u32).min(source - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn gradient(width: u32, height: u32) -> PixelGrid {
        let pixels = (0..height)
            .flat_map(|y| (0..width).map(move |x| Rgba([x as u8, y as u8, 0, 255])))
            .collect();
        PixelGrid::from_pixels(width, height, pixels)
    }

    #[test]
    fn test_same_size_is_identity() {
        let grid = gradient(5, 7);
        let out = resample(&grid, 5, 7).unwrap();
        assert_eq!(out, grid);
    }

    #[test]
    fn test_downscale_4x4_to_2x2_picks_truncated_indices() {
        let grid = gradient(4, 4);
        let out = resample(&grid, 2, 2).unwrap();
        // dst (0,0) -> src (0*4/2, 0*4/2) = (0,0); dst (1,1) -> (2,2)
        assert_eq!(out.get(0, 0), Rgba([0, 0, 0, 255]));
        assert_eq!(out.get(1, 1), Rgba([2, 2, 0, 255]));
    }

    #[test]
    fn test_upscale_duplicates_pixels() {
        let grid = gradient(2, 1);
        let out = resample(&grid, 4, 1).unwrap();
        assert_eq!(out.get(0, 0), Rgba([0, 0, 0, 255]));
        assert_eq!(out.get(1, 0), Rgba([0, 0, 0, 255]));
        assert_eq!(out.get(2, 0), Rgba([1, 0, 0, 255]));
        assert_eq!(out.get(3, 0), Rgba([1, 0, 0, 255]));
    }

    #[test]
    fn test_last_index_is_clamped() {
        let grid = gradient(1, 1);
        let out = resample(&grid, 3, 3).unwrap();
        assert_eq!(out.get(2, 2), grid.get(0, 0));
    }

    #[test]
    fn test_zero_target_rejected() {
        let grid = gradient(4, 4);
        let err = resample(&grid, 0, 4).unwrap_err();
        assert_eq!(err, ResampleError::InvalidDimensions { width: 0, height: 4 });
    }
}
