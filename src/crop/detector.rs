//! Border detection.
//!
//! A column (or row) is background iff every pixel in it is pure white
//! (`r == g == b == 255`). The detected bounds are the first and last
//! non-background columns (rows), widened by `padding` and clamped to the
//! image. When an axis has no content at all its bounds stay at the full
//! extent, so an all-white image is never cropped.

use rayon::prelude::*;
use tracing::debug;

use crate::pixel::PixelBuffer;

use super::{CropOptions, CropRect};

/// Result of a border scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Detection {
    /// Content occupies a strict sub-rectangle; crop to it.
    Crop(CropRect),
    /// The padded bounds cover the whole image; nothing to crop.
    FullExtent,
}

/// Scans a [`PixelBuffer`] for uniform white borders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderDetector {
    scan_width: bool,
    scan_height: bool,
    padding: usize,
}

impl BorderDetector {
    pub fn new(scan_width: bool, scan_height: bool, padding: usize) -> Self {
        Self {
            scan_width,
            scan_height,
            padding,
        }
    }

    pub fn from_options(options: &CropOptions) -> Self {
        Self::new(options.scan_width, options.scan_height, options.padding)
    }

    /// Padded, clamped content bounds. Axes that are not scanned keep
    /// their full extent.
    pub fn bounds(&self, buffer: &PixelBuffer) -> CropRect {
        let (width, height) = buffer.dimensions();
        let mut rect = CropRect::full(width, height);

        if self.scan_width {
            let (left, right) = content_span(width, |x| column_has_content(buffer, x));
            rect.left = left.saturating_sub(self.padding);
            rect.right = right.saturating_add(self.padding).min(width - 1);
        }

        if self.scan_height {
            let (top, bottom) = content_span(height, |y| row_has_content(buffer, y));
            rect.top = top.saturating_sub(self.padding);
            rect.bottom = bottom.saturating_add(self.padding).min(height - 1);
        }

        rect
    }

    pub fn detect(&self, buffer: &PixelBuffer) -> Detection {
        let rect = self.bounds(buffer);
        let (width, height) = buffer.dimensions();

        debug!(
            left = rect.left,
            top = rect.top,
            right = rect.right,
            bottom = rect.bottom,
            width,
            height,
            "detected content bounds"
        );

        if rect.is_full_extent(width, height) {
            Detection::FullExtent
        } else {
            Detection::Crop(rect)
        }
    }
}

/// First and last index in `0..len` where `has_content` holds, or
/// `(0, len - 1)` when it holds nowhere.
fn content_span<F>(len: usize, has_content: F) -> (usize, usize)
where
    F: Fn(usize) -> bool + Sync + Send,
{
    let first = (0..len).into_par_iter().find_first(|&i| has_content(i));
    let last = (0..len).into_par_iter().find_last(|&i| has_content(i));
    (first.unwrap_or(0), last.unwrap_or(len - 1))
}

fn column_has_content(buffer: &PixelBuffer, x: usize) -> bool {
    (0..buffer.height()).any(|y| !buffer[(x, y)].is_white())
}

fn row_has_content(buffer: &PixelBuffer, y: usize) -> bool {
    buffer.row(y).iter().any(|p| !p.is_white())
}
