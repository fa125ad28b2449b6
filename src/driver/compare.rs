//! Pixel comparison of capture artifacts.
//!
//! Used to verify that before/after screenshots of a state transition are
//! visually distinct, so a scenario cannot pass on two identical captures.

use std::path::Path;

use image::RgbImage;

use crate::driver::types::ScenarioResult;

/// Count pixels that differ between two images.
///
/// Images of different dimensions differ in every pixel of the larger area.
pub fn differing_pixels(a: &RgbImage, b: &RgbImage) -> u64 {
    if a.dimensions() != b.dimensions() {
        let (aw, ah) = a.dimensions();
        let (bw, bh) = b.dimensions();
        return u64::from(aw.max(bw)) * u64::from(ah.max(bh));
    }

    a.pixels()
        .zip(b.pixels())
        .filter(|(pa, pb)| pa != pb)
        .count() as u64
}

/// Whether two PNG artifacts on disk are visually distinct
pub fn artifacts_differ(a: &Path, b: &Path) -> ScenarioResult<bool> {
    let image_a = image::open(a)?.to_rgb8();
    let image_b = image::open(b)?.to_rgb8();
    Ok(differing_pixels(&image_a, &image_b) > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, color: [u8; 3]) -> RgbImage {
        RgbImage::from_pixel(width, height, image::Rgb(color))
    }

    #[test]
    fn test_identical_images_do_not_differ() {
        let a = solid(32, 32, [10, 20, 30]);
        let b = solid(32, 32, [10, 20, 30]);
        assert_eq!(differing_pixels(&a, &b), 0);
    }

    #[test]
    fn test_single_pixel_change_is_detected() {
        let a = solid(32, 32, [10, 20, 30]);
        let mut b = solid(32, 32, [10, 20, 30]);
        b.put_pixel(5, 7, image::Rgb([255, 0, 0]));
        assert_eq!(differing_pixels(&a, &b), 1);
    }

    #[test]
    fn test_dimension_mismatch_differs() {
        let a = solid(32, 32, [0, 0, 0]);
        let b = solid(64, 32, [0, 0, 0]);
        assert_eq!(differing_pixels(&a, &b), 64 * 32);
    }
}
