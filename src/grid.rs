//! Pixel grids and atlas regions
//!
//! A [`PixelGrid`] is a rectangular, row-major grid of RGBA samples with
//! explicit dimensions. A [`Region`] carves a sub-grid out of an atlas
//! image (a single image packing several sprites).

use image::{Rgba, RgbaImage};
use thiserror::Error;

/// Error type for grid operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Region exceeds the source grid's dimensions
    #[error("region ({left},{top})-({right},{bottom}) out of bounds for {width}x{height} grid")]
    OutOfBounds { left: u32, top: u32, right: u32, bottom: u32, width: u32, height: u32 },
    /// Region with zero or negative extent
    #[error("region ({left},{top})-({right},{bottom}) is empty")]
    EmptyRegion { left: u32, top: u32, right: u32, bottom: u32 },
}

/// A sub-rectangle of an atlas image, in source pixel coordinates.
///
/// Bounds are half-open: `left <= x < right`, `top <= y < bottom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Region {
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self { left, top, right, bottom }
    }

    /// Width of the region (`right - left`).
    pub fn width(&self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    /// Height of the region (`bottom - top`).
    pub fn height(&self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }
}

/// A rectangular grid of RGBA samples, row-major, with explicit dimensions.
///
/// Invariant: `pixels.len() == width * height`. Constructors uphold
/// this; accessors rely on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<Rgba<u8>>,
}

impl PixelGrid {
    /// Create a grid from row-major samples.
    ///
    /// # Panics
    ///
    /// Panics if `pixels.len() != width * height`. This is a programming
    /// error, not a data error: every code path that builds a grid
    /// controls both the dimensions and the sample vector.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Rgba<u8>>) -> Self {
        assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize),
            "pixel count must equal width * height"
        );
        Self { width, height, pixels }
    }

    /// Create a grid from a decoded RGBA image.
    pub fn from_image(image: &RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        let pixels = image.pixels().copied().collect();
        Self { width, height, pixels }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Sample at (x, y). Caller must stay in bounds.
    pub fn get(&self, x: u32, y: u32) -> Rgba<u8> {
        debug_assert!(x < self.width && y < self.height);
        self.pixels[(y as usize) * (self.width as usize) + (x as usize)]
    }

    /// Row-major samples.
    pub fn pixels(&self) -> &[Rgba<u8>] {
        &self.pixels
    }
}

/// Carve a region out of a source grid.
///
/// With no region this is the identity (the atlas *is* the sprite).
/// With a region, bounds are validated before any sampling happens, so
/// a bad region never yields a partial or garbage grid.
pub fn extract(source: &PixelGrid, region: Option<Region>) -> Result<PixelGrid, GridError> {
    let Some(region) = region else {
        return Ok(source.clone());
    };

    if region.left >= region.right || region.top >= region.bottom {
        return Err(GridError::EmptyRegion {
            left: region.left,
            top: region.top,
            right: region.right,
            bottom: region.bottom,
        });
    }
    if region.right > source.width() || region.bottom > source.height() {
        return Err(GridError::OutOfBounds {
            left: region.left,
            top: region.top,
            right: region.right,
            bottom: region.bottom,
            width: source.width(),
            height: source.height(),
        });
    }

    let width = region.width();
    let height = region.height();
    let mut pixels = Vec::with_capacity((width as usize) * (height as usize));
    for y in 0..height {
        for x in 0..width {
            pixels.push(source.get(region.left + x, region.top + y));
        }
    }
    Ok(PixelGrid::from_pixels(width, height, pixels))
}
