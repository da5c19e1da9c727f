use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};

/// Horizontal bands of solid color, `rows` pixels tall each, all `width` wide
pub fn banded_image(width: u32, bands: &[([u8; 3], u32)]) -> RgbImage {
    let height: u32 = bands.iter().map(|(_, rows)| rows).sum();
    let mut img = RgbImage::new(width, height);
    let mut y = 0;
    for (rgb, rows) in bands {
        for row in y..y + rows {
            for x in 0..width {
                img.put_pixel(x, row, Rgb(*rgb));
            }
        }
        y += rows;
    }
    img
}

/// Smooth two-axis gradient with far more distinct colors than any palette
pub fn gradient_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x * 255 / width.max(1)) as u8,
            (y * 255 / height.max(1)) as u8,
            ((x + y) * 127 / (width + height).max(1)) as u8,
        ])
    })
}

/// Save `img` as a PNG inside `dir` and return its path
pub fn save_png(dir: &Path, name: &str, img: &RgbImage) -> PathBuf {
    let path = dir.join(format!("{}.png", name));
    img.save(&path)
        .unwrap_or_else(|e| panic!("Failed to save test image {}: {}", name, e));
    path
}
