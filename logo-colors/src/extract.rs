use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::imageops::FilterType;
use image::RgbImage;
use kmeans_colors::get_kmeans;
use log::{debug, error};
use palette::{FromColor, IntoColor, Lab, Srgb};

use crate::color::{sort_by_prevalence, Color};

pub const LOGO_PATH: &str = "images/logo.jpg";
pub const DEFAULT_COLOR_COUNT: usize = 5;

/// Images are shrunk to this square before quantizing
pub const CANVAS_SIZE: u32 = 150;

// palette indices are stored as bytes
const MAX_COLORS: usize = 256;

const KMEANS_MAX_ITER: usize = 20;
const KMEANS_CONVERGE: f32 = 1e-4;
const KMEANS_SEED: u64 = 0;

#[derive(Debug, Clone)]
pub struct ExtractorConfig {
    pub image_path: PathBuf,
    pub color_count: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        ExtractorConfig {
            image_path: PathBuf::from(LOGO_PATH),
            color_count: DEFAULT_COLOR_COUNT,
        }
    }
}

/// Best-effort palette extraction: errors are logged and yield no colors.
pub fn dominant_colors<P: AsRef<Path>>(image_path: P, color_count: usize) -> Vec<Color> {
    match try_dominant_colors(&image_path, color_count) {
        Ok(colors) => colors,
        Err(e) => {
            error!("Error: {:#}", e);
            Vec::new()
        }
    }
}

pub fn try_dominant_colors<P: AsRef<Path>>(
    image_path: P,
    color_count: usize,
) -> Result<Vec<Color>> {
    let path = image_path.as_ref();
    let img = image::open(path)
        .with_context(|| format!("Failed to open image: {}", path.display()))?;

    let canvas = img
        .resize_exact(CANVAS_SIZE, CANVAS_SIZE, FilterType::CatmullRom)
        .to_rgb8();

    Ok(quantize(&canvas, color_count))
}

/// Reduce `image` to at most `color_count` colors and rank them by pixel count.
pub fn quantize(image: &RgbImage, color_count: usize) -> Vec<Color> {
    let k = color_count.min(MAX_COLORS);
    if k == 0 || image.width() == 0 || image.height() == 0 {
        return Vec::new();
    }

    // Distinct colors in first-seen order
    let mut histogram: Vec<Color> = Vec::new();
    let mut slots: HashMap<[u8; 3], usize> = HashMap::new();
    for pixel in image.pixels() {
        let slot = *slots.entry(pixel.0).or_insert_with(|| {
            histogram.push(Color::new(pixel.0, 0));
            histogram.len() - 1
        });
        histogram[slot].count += 1;
    }

    let mut colors = if histogram.len() <= k {
        // already within budget, the palette is exact
        histogram
    } else {
        cluster(image, k)
    };

    sort_by_prevalence(&mut colors);
    debug!("Quantized to {} colors", colors.len());
    colors
}

fn cluster(image: &RgbImage, k: usize) -> Vec<Color> {
    let lab_pixels: Vec<Lab> = image
        .pixels()
        .map(|p| {
            let srgb = Srgb::new(p[0], p[1], p[2]).into_format::<f32>();
            srgb.into_color()
        })
        .collect();

    let kmeans = get_kmeans(
        k,
        KMEANS_MAX_ITER,
        KMEANS_CONVERGE,
        false,
        &lab_pixels,
        KMEANS_SEED,
    );

    let mut counts = vec![0u32; kmeans.centroids.len()];
    for &index in &kmeans.indices {
        counts[index as usize] += 1;
    }

    // Centroids that round to the same RGB value are one palette color
    let mut colors: Vec<Color> = Vec::new();
    for (centroid, count) in kmeans.centroids.iter().zip(counts) {
        if count == 0 {
            continue;
        }
        let rgb: Srgb<u8> = Srgb::<f32>::from_color(*centroid).into_format();
        let rgb = [rgb.red, rgb.green, rgb.blue];
        match colors.iter_mut().find(|c| c.rgb == rgb) {
            Some(existing) => existing.count += count,
            None => colors.push(Color::new(rgb, count)),
        }
    }
    colors
}
