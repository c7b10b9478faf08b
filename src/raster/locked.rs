use image::RgbImage;
use tracing::trace;

use crate::error::RasterError;
use crate::pixel::Pixel;

use super::{scan_line_stride, BLUE_OFFSET, BYTES_PER_PIXEL, GREEN_OFFSET, RED_OFFSET};

/// What a lock session does with the bitmap's pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockMode {
    /// Copy pixels in; discard changes on release.
    ReadOnly,
    /// Start from zeroed scan lines; write everything back on release.
    WriteOnly,
    /// Copy pixels in and write them back on release.
    ReadWrite,
}

impl LockMode {
    fn reads(self) -> bool {
        matches!(self, LockMode::ReadOnly | LockMode::ReadWrite)
    }

    fn writes(self) -> bool {
        matches!(self, LockMode::WriteOnly | LockMode::ReadWrite)
    }
}

/// Scoped raw-access session over a bitmap.
///
/// Holds the pixels as 24bpp scan lines (`stride` bytes each, B-G-R per
/// pixel). Release happens in `Drop`, so every exit path unlocks.
///
/// Shared references are `Sync`: many threads may [`get`](Self::get)
/// concurrently while the lock is held.
pub struct LockedRaster<'b> {
    image: &'b mut RgbImage,
    mode: LockMode,
    width: usize,
    height: usize,
    stride: usize,
    data: Vec<u8>,
}

impl<'b> LockedRaster<'b> {
    pub(super) fn acquire(image: &'b mut RgbImage, mode: LockMode) -> Self {
        let width = image.width() as usize;
        let height = image.height() as usize;
        let stride = scan_line_stride(width);
        let mut data = vec![0u8; stride * height];

        if mode.reads() {
            let src_row_len = width * BYTES_PER_PIXEL;
            for (src, dst) in image
                .as_raw()
                .chunks_exact(src_row_len.max(1))
                .zip(data.chunks_exact_mut(stride.max(1)))
            {
                for (rgb, bgr) in src
                    .chunks_exact(BYTES_PER_PIXEL)
                    .zip(dst.chunks_exact_mut(BYTES_PER_PIXEL))
                {
                    bgr[RED_OFFSET] = rgb[0];
                    bgr[GREEN_OFFSET] = rgb[1];
                    bgr[BLUE_OFFSET] = rgb[2];
                }
            }
        }

        trace!(width, height, stride, ?mode, "raster locked");

        Self {
            image,
            mode,
            width,
            height,
            stride,
            data,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Bytes per scan line, including alignment padding.
    #[inline]
    pub fn stride(&self) -> usize {
        self.stride
    }

    #[inline]
    pub fn mode(&self) -> LockMode {
        self.mode
    }

    /// Raw scan line `y`, padding included.
    pub fn scan_line(&self, y: usize) -> Option<&[u8]> {
        (y < self.height).then(|| &self.data[y * self.stride..(y + 1) * self.stride])
    }

    /// Read the pixel at `(x, y)` from locked memory.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Result<Pixel, RasterError> {
        let at = self.address(x, y)?;
        Ok(Pixel::new(
            self.data[at + RED_OFFSET],
            self.data[at + GREEN_OFFSET],
            self.data[at + BLUE_OFFSET],
        ))
    }

    /// Write the pixel at `(x, y)` into locked memory.
    ///
    /// Under [`LockMode::ReadOnly`] the write is visible through this guard
    /// but is not copied back to the bitmap.
    #[inline]
    pub fn set(&mut self, x: usize, y: usize, pixel: Pixel) -> Result<(), RasterError> {
        let at = self.address(x, y)?;
        self.data[at + RED_OFFSET] = pixel.r;
        self.data[at + GREEN_OFFSET] = pixel.g;
        self.data[at + BLUE_OFFSET] = pixel.b;
        Ok(())
    }

    /// End the session now instead of at scope exit.
    pub fn unlock(self) {}

    #[inline]
    fn address(&self, x: usize, y: usize) -> Result<usize, RasterError> {
        if x < self.width && y < self.height {
            Ok(y * self.stride + x * BYTES_PER_PIXEL)
        } else {
            Err(RasterError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            })
        }
    }

    fn write_back(&mut self) {
        let row_len = self.width * BYTES_PER_PIXEL;
        let stride = self.stride.max(1);
        for (dst, src) in self
            .image
            .chunks_exact_mut(row_len.max(1))
            .zip(self.data.chunks_exact(stride))
        {
            for (rgb, bgr) in dst
                .chunks_exact_mut(BYTES_PER_PIXEL)
                .zip(src.chunks_exact(BYTES_PER_PIXEL))
            {
                rgb[0] = bgr[RED_OFFSET];
                rgb[1] = bgr[GREEN_OFFSET];
                rgb[2] = bgr[BLUE_OFFSET];
            }
        }
    }
}

impl Drop for LockedRaster<'_> {
    fn drop(&mut self) {
        if self.mode.writes() {
            self.write_back();
        }
        trace!(mode = ?self.mode, "raster unlocked");
    }
}

impl std::fmt::Debug for LockedRaster<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LockedRaster")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("stride", &self.stride)
            .field("mode", &self.mode)
            .finish_non_exhaustive()
    }
}
