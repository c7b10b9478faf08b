//! Owned pixel grid.
//!
//! Pixels are stored row-major in a single allocation, so row `y` occupies
//! `pixels[y * width..(y + 1) * width]`. Rows are disjoint slices, which is
//! what lets the loader fill them in parallel without locking.

use std::ops::{Index, IndexMut};

use crate::error::RasterError;

use super::Pixel;

/// A fixed-size 2D grid of [`Pixel`]s.
///
/// Width and height are set at construction and never change. Every cell in
/// range holds a defined pixel; new buffers start out [`Pixel::BLACK`].
///
/// [`get`](Self::get) and [`set`](Self::set) are bounds-checked and return
/// [`RasterError::OutOfBounds`]. Indexing with `buffer[(x, y)]` panics on
/// out-of-range coordinates, like slice indexing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
}

impl PixelBuffer {
    /// Create a buffer of `width x height` zero-valued pixels.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError::InvalidDimensions`] if either dimension is zero
    /// or the pixel count overflows.
    pub fn new(width: usize, height: usize) -> Result<Self, RasterError> {
        Self::filled(width, height, Pixel::BLACK)
    }

    /// Create a buffer with every cell set to `pixel`.
    pub fn filled(width: usize, height: usize, pixel: Pixel) -> Result<Self, RasterError> {
        let len = cell_count(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![pixel; len],
        })
    }

    /// Wrap an existing row-major pixel vector.
    pub fn from_pixels(
        width: usize,
        height: usize,
        pixels: Vec<Pixel>,
    ) -> Result<Self, RasterError> {
        let expected = cell_count(width, height)?;
        if pixels.len() != expected {
            return Err(RasterError::BufferSize {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)` in pixels.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Read the pixel at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<Pixel, RasterError> {
        self.offset(x, y).map(|i| self.pixels[i])
    }

    /// Overwrite the pixel at `(x, y)`. No other cell is touched.
    pub fn set(&mut self, x: usize, y: usize, pixel: Pixel) -> Result<(), RasterError> {
        let i = self.offset(x, y)?;
        self.pixels[i] = pixel;
        Ok(())
    }

    /// Row `y` as a slice of `width` pixels.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: usize) -> &[Pixel] {
        let start = y * self.width;
        &self.pixels[start..start + self.width]
    }

    /// All pixels, row-major.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// All pixels, row-major, mutable. Chunking this by `width` yields one
    /// disjoint slice per row.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// Copy the `width x height` region at `(x, y)` of `source` into a new buffer.
    ///
    /// Returns `None` when `width` or `height` is zero or the requested size
    /// overflows. Parts of the request
    /// that fall outside `source` are not an error: those cells keep their
    /// default (black) value. A region entirely outside `source` therefore
    /// yields an all-black buffer of the requested size.
    pub fn crop(
        source: &PixelBuffer,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    ) -> Option<PixelBuffer> {
        let mut output = PixelBuffer::new(width, height).ok()?;

        let x_end = x.saturating_add(width).min(source.width);
        let y_end = y.saturating_add(height).min(source.height);
        if x >= x_end || y >= y_end {
            return Some(output);
        }

        let span = x_end - x;
        for sy in y..y_end {
            let src = &source.row(sy)[x..x_end];
            let dst_start = (sy - y) * output.width;
            output.pixels[dst_start..dst_start + span].copy_from_slice(src);
        }

        Some(output)
    }

    fn offset(&self, x: usize, y: usize) -> Result<usize, RasterError> {
        if self.contains(x, y) {
            Ok(y * self.width + x)
        } else {
            Err(RasterError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// `width * height`, rejecting zero sizes and sizes no allocation can hold.
fn cell_count(width: usize, height: usize) -> Result<usize, RasterError> {
    let bytes = width
        .checked_mul(height)
        .and_then(|len| len.checked_mul(std::mem::size_of::<Pixel>()));
    match bytes {
        Some(bytes) if bytes > 0 && bytes <= isize::MAX as usize => Ok(width * height),
        _ => Err(RasterError::InvalidDimensions { width, height }),
    }
}

impl Index<(usize, usize)> for PixelBuffer {
    type Output = Pixel;

    #[inline]
    fn index(&self, (x, y): (usize, usize)) -> &Pixel {
        assert!(self.contains(x, y), "pixel ({x}, {y}) out of bounds");
        &self.pixels[y * self.width + x]
    }
}

impl IndexMut<(usize, usize)> for PixelBuffer {
    #[inline]
    fn index_mut(&mut self, (x, y): (usize, usize)) -> &mut Pixel {
        assert!(self.contains(x, y), "pixel ({x}, {y}) out of bounds");
        &mut self.pixels[y * self.width + x]
    }
}
