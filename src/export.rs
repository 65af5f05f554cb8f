//! Grayscale heightmap export of a displaced surface.

use std::path::Path;

use glam::Vec3;
use image::{GrayImage, ImageResult, Luma};

use crate::params::GridConfig;

/// Render the populated region of `positions` as one pixel per vertex.
///
/// Heights are normalized to the min/max of the populated region; a perfectly
/// flat surface renders mid-gray.
pub fn heightmap(config: &GridConfig, positions: &[Vec3]) -> GrayImage {
    let populated = &positions[..config.populated_len().min(positions.len())];
    let (lo, hi) = populated
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.y), hi.max(p.y))
        });
    let range = hi - lo;

    let mut img = GrayImage::new(config.x_size as u32, config.z_size as u32);
    for (i, p) in populated.iter().enumerate() {
        let t = if range > f32::EPSILON {
            (p.y - lo) / range
        } else {
            0.5
        };
        let gray = (t * 255.0).round().clamp(0.0, 255.0) as u8;
        img.put_pixel(
            (i % config.x_size) as u32,
            (i / config.x_size) as u32,
            Luma([gray]),
        );
    }
    img
}

/// Write the heightmap to `path` (format from the extension)
pub fn save_heightmap(config: &GridConfig, positions: &[Vec3], path: &Path) -> ImageResult<()> {
    heightmap(config, positions).save(path)
}
