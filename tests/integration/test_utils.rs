//! Test utilities for integration tests.
//!
//! Helpers for building slide-like images: a white page with a coloured
//! block of content somewhere inside it.

use std::io::Cursor;
use std::path::{Path, PathBuf};

use image::{ImageFormat, Rgb, RgbImage};

use slide_crop::CropRect;

pub const INK: Rgb<u8> = Rgb([30, 60, 90]);
pub const PAPER: Rgb<u8> = Rgb([255, 255, 255]);

/// A white `width x height` page with `content` (inclusive) filled with [`INK`].
pub fn slide_image(width: u32, height: u32, content: CropRect) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let (x, y) = (x as usize, y as usize);
        if (content.left..=content.right).contains(&x) && (content.top..=content.bottom).contains(&y)
        {
            INK
        } else {
            PAPER
        }
    })
}

pub fn blank_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_pixel(width, height, PAPER)
}

pub fn encode(image: &RgbImage, format: ImageFormat) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    image.write_to(&mut out, format).unwrap();
    out.into_inner()
}

/// Write `image` as PNG into `dir/name` and return the path.
pub fn write_png(dir: &Path, name: &str, image: &RgbImage) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, encode(image, ImageFormat::Png)).unwrap();
    path
}

pub fn read_rgb(path: &Path) -> RgbImage {
    image::open(path).unwrap().into_rgb8()
}

pub fn is_png(bytes: &[u8]) -> bool {
    bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A])
}
