//! RGB565 pixel codec with color-key transparency
//!
//! Firmware draws sprites from flat `uint16_t` tables with no alpha
//! channel; transparency is signaled by the reserved code
//! [`TRANSPARENT`] (`0xF81F`, magenta), which renderers skip instead of
//! drawing. Every pixel of a grid is classified transparent or opaque,
//! and opaque pixels are truncated to RGB565.
//!
//! The transparency rule is tied to the art-export pipeline that
//! produced the source PNGs and must not be "improved": see
//! [`is_transparent`].

use crate::grid::PixelGrid;
use image::Rgba;

/// Reserved color code meaning "skip this pixel".
///
/// Protocol-level constant shared with the firmware renderer; no other
/// code is reserved.
pub const TRANSPARENT: u16 = 0xF81F;

/// Alpha values below this are background.
const ALPHA_THRESHOLD: u8 = 128;

/// Channel floor for the near-white background test.
const NEAR_WHITE: u8 = 250;

/// Classify a sample as color-key transparent.
///
/// Two clauses, both required by the art-export pipeline:
///
/// 1. alpha below 128 - ordinary transparency;
/// 2. all channels above 250 *and* alpha strictly below 255 - near-white
///    anti-aliasing fringe from the exporter, treated as background.
///
/// The asymmetry in clause 2 is deliberate: a fully opaque near-white
/// pixel (alpha == 255) is legitimate foreground, e.g. a white
/// highlight, and is kept.
pub fn is_transparent(pixel: Rgba<u8>) -> bool {
    let [r, g, b, a] = pixel.0;
    if a < ALPHA_THRESHOLD {
        return true;
    }
    r > NEAR_WHITE && g > NEAR_WHITE && b > NEAR_WHITE && a < 255
}

/// Pack RGB888 into RGB565: 5 bits red, 6 bits green, 5 bits blue.
///
/// Low-order bits are truncated, not rounded. Firmware compares colors
/// bit-for-bit against these tables, so the truncation must reproduce
/// byte-exactly.
pub fn rgb888_to_rgb565(r: u8, g: u8, b: u8) -> u16 {
    let r5 = (r >> 3) as u16;
    let g6 = (g >> 2) as u16;
    let b5 = (b >> 3) as u16;
    (r5 << 11) | (g6 << 5) | b5
}

/// Encode one sample to its color code.
///
/// Opaque pixels never produce [`TRANSPARENT`]: the one RGB565 value
/// that collides with the sentinel (opaque magenta, R 248..=255,
/// G 0..=3, B 248..=255) has its lowest blue bit cleared and encodes
/// as `0xF81E` instead.
pub fn encode_pixel(pixel: Rgba<u8>) -> u16 {
    if is_transparent(pixel) {
        return TRANSPARENT;
    }
    let [r, g, b, _] = pixel.0;
    let code = rgb888_to_rgb565(r, g, b);
    if code == TRANSPARENT {
        code & !1
    } else {
        code
    }
}

/// Encode a grid to its row-major color-code sequence.
///
/// Total over any valid grid; the output length is always
/// `width * height`.
pub fn encode(grid: &PixelGrid) -> Vec<u16> {
    grid.pixels().iter().map(|&p| encode_pixel(p)).collect()
}

/// Expand an RGB565 code back to RGB888 by shifting into the high bits.
///
/// Inverse of the truncation in [`rgb888_to_rgb565`] up to the dropped
/// low bits; used by tests to check quantization idempotence and by the
/// `info` preview.
pub fn rgb565_to_rgb888(code: u16) -> (u8, u8, u8) {
    let r = ((code >> 11) & 0x1F) as u8;
    let g = ((code >> 5) & 0x3F) as u8;
    let b = (code & 0x1F) as u8;
    (r << 3, g << 2, b << 3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::PixelGrid;

    #[test]
    fn test_low_alpha_is_transparent() {
        assert_eq!(encode_pixel(Rgba([255, 0, 0, 127])), TRANSPARENT);
        assert_eq!(encode_pixel(Rgba([0, 0, 0, 0])), TRANSPARENT);
    }

    #[test]
    fn test_alpha_threshold_boundary() {
        // 127 transparent, 128 opaque
        assert_eq!(encode_pixel(Rgba([0, 0, 0, 127])), TRANSPARENT);
        assert_eq!(encode_pixel(Rgba([0, 0, 0, 128])), 0x0000);
    }

    #[test]
    fn test_near_white_fringe_is_transparent() {
        assert_eq!(encode_pixel(Rgba([253, 253, 253, 200])), TRANSPARENT);
        assert_eq!(encode_pixel(Rgba([251, 251, 251, 254])), TRANSPARENT);
    }

    #[test]
    fn test_fully_opaque_white_is_kept() {
        // alpha == 255 exactly: legitimate white highlight
        assert_eq!(encode_pixel(Rgba([255, 255, 255, 255])), 0xFFFF);
    }

    #[test]
    fn test_near_white_needs_all_three_channels() {
        // one channel at 250 fails the > 250 test
        assert_eq!(encode_pixel(Rgba([250, 253, 253, 200])), rgb888_to_rgb565(250, 253, 253));
    }

    #[test]
    fn test_quantization_truncates() {
        assert_eq!(encode_pixel(Rgba([255, 0, 0, 255])), 0xF800);
        assert_eq!(encode_pixel(Rgba([0, 255, 0, 255])), 0x07E0);
        assert_eq!(encode_pixel(Rgba([0, 0, 255, 255])), 0x001F);
        // low bits dropped, not rounded
        assert_eq!(rgb888_to_rgb565(0x07, 0x03, 0x07), 0x0000);
    }

    #[test]
    fn test_opaque_magenta_dodges_sentinel() {
        assert_eq!(encode_pixel(Rgba([255, 0, 255, 255])), 0xF81E);
        assert_eq!(encode_pixel(Rgba([248, 3, 248, 255])), 0xF81E);
    }

    #[test]
    fn test_opaque_pixels_never_encode_to_sentinel() {
        // sweep the channel extremes plus the near-white band
        let samples = [0u8, 1, 3, 7, 127, 128, 247, 248, 250, 251, 252, 253, 254, 255];
        for &r in &samples {
            for &g in &samples {
                for &b in &samples {
                    let code = encode_pixel(Rgba([r, g, b, 255]));
                    assert_ne!(code, TRANSPARENT, "opaque ({r},{g},{b}) hit the sentinel");
                }
            }
        }
    }

    #[test]
    fn test_quantization_is_idempotent() {
        let samples = [0u8, 9, 37, 128, 200, 247, 255];
        for &r in &samples {
            for &g in &samples {
                for &b in &samples {
                    let code = rgb888_to_rgb565(r, g, b);
                    let (er, eg, eb) = rgb565_to_rgb888(code);
                    assert_eq!(rgb888_to_rgb565(er, eg, eb), code);
                }
            }
        }
    }

    #[test]
    fn test_encode_length_matches_grid() {
        let pixels = vec![Rgba([10, 20, 30, 255]); 6];
        let grid = PixelGrid::from_pixels(3, 2, pixels);
        assert_eq!(encode(&grid).len(), 6);
    }

    #[test]
    fn test_encode_row_major_order() {
        let grid = PixelGrid::from_pixels(
            2,
            1,
            vec![Rgba([255, 0, 0, 255]), Rgba([0, 0, 0, 0])],
        );
        assert_eq!(encode(&grid), vec![0xF800, 0xF81F]);
    }
}
