//! Decoded image → [`PixelBuffer`].

use image::RgbImage;
use rayon::prelude::*;
use tracing::debug;

use crate::error::{CodecError, CropError, RasterError};
use crate::pixel::{Pixel, PixelBuffer};
use crate::raster::{Bitmap, LockMode, LockedRaster};

/// How the loader copies rows out of the locked raster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Parallelism {
    /// One rayon task per row.
    #[default]
    Parallel,
    /// Rows copied in order on the calling thread.
    Sequential,
}

/// Decodes encoded images into [`PixelBuffer`]s.
///
/// Alpha, if the source has it, is dropped. Every output cell is written by
/// exactly one row task, and each task owns a disjoint row slice of the
/// buffer, so the parallel copy needs no locking. The lock is held for the
/// whole copy and released before the buffer is returned.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageLoader {
    parallelism: Parallelism,
}

impl ImageLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parallelism(parallelism: Parallelism) -> Self {
        Self { parallelism }
    }

    pub fn parallelism(&self) -> Parallelism {
        self.parallelism
    }

    /// Decode `bytes` and copy every pixel into a new buffer.
    ///
    /// # Errors
    ///
    /// - [`CodecError::Decode`] if the bytes are not a readable image
    /// - [`RasterError::InvalidDimensions`] if the image is empty
    pub fn load(&self, bytes: &[u8]) -> Result<PixelBuffer, CropError> {
        let decoded = image::load_from_memory(bytes).map_err(|e| CodecError::Decode {
            message: e.to_string(),
        })?;
        let mut image = decoded.into_rgb8();
        debug!(
            width = image.width(),
            height = image.height(),
            parallelism = ?self.parallelism,
            "decoded image"
        );
        self.load_image(&mut image)
    }

    /// Copy an already decoded image into a new buffer.
    pub fn load_image(&self, image: &mut RgbImage) -> Result<PixelBuffer, CropError> {
        let mut bitmap = Bitmap::new(image);
        let mut buffer = PixelBuffer::new(bitmap.width(), bitmap.height())?;
        let width = buffer.width();

        let locked = bitmap.lock(LockMode::ReadOnly);
        let fill_row = |(y, row): (usize, &mut [Pixel])| copy_row(&locked, y, row);

        match self.parallelism {
            Parallelism::Parallel => buffer
                .pixels_mut()
                .par_chunks_exact_mut(width)
                .enumerate()
                .try_for_each(fill_row)?,
            Parallelism::Sequential => buffer
                .pixels_mut()
                .chunks_exact_mut(width)
                .enumerate()
                .try_for_each(fill_row)?,
        }
        locked.unlock();

        Ok(buffer)
    }
}

fn copy_row(locked: &LockedRaster<'_>, y: usize, row: &mut [Pixel]) -> Result<(), RasterError> {
    for (x, cell) in row.iter_mut().enumerate() {
        *cell = locked.get(x, y)?;
    }
    Ok(())
}
