#![allow(dead_code)]

use std::fs;
use std::path::Path;

use image::{Rgb, RgbImage};

pub const RED: Rgb<u8> = Rgb([255, 0, 0]);
pub const GRAY: Rgb<u8> = Rgb([40, 40, 40]);

/// A uniformly gray image, so drawn pixels stand out from untouched ones.
pub fn gray_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, GRAY)
}

/// Writes a gray image; the format follows the extension.
pub fn write_gray_image(path: &Path, width: u32, height: u32) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    gray_image(width, height).save(path).expect("write image file");
}

pub fn write_labels(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    fs::write(path, content).expect("write label file");
}

/// Pixels that differ between two same-sized images.
pub fn changed_pixels(before: &RgbImage, after: &RgbImage) -> Vec<(u32, u32)> {
    before
        .enumerate_pixels()
        .filter(|(x, y, pixel)| after.get_pixel(*x, *y) != *pixel)
        .map(|(x, y, _)| (x, y))
        .collect()
}
