//! [`PixelBuffer`] → encoded image.
//!
//! The pixel copy is single-threaded; encoding dominates the cost.

use std::io::Cursor;

use bytes::Bytes;
use image::RgbImage;
use tracing::debug;

use crate::error::{CodecError, CropError};
use crate::pixel::PixelBuffer;
use crate::raster::{Bitmap, LockMode};

use super::OutputFormat;

/// Encodes [`PixelBuffer`]s as 24-bit RGB images. Output is always opaque.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageWriter {
    format: OutputFormat,
}

impl ImageWriter {
    /// Writer producing PNG.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_format(format: OutputFormat) -> Self {
        Self { format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Copy `buffer` into a freshly allocated 24bpp raster.
    pub fn write_image(&self, buffer: &PixelBuffer) -> Result<RgbImage, CropError> {
        let (width, height) = buffer.dimensions();
        let (w, h) = match (u32::try_from(width), u32::try_from(height)) {
            (Ok(w), Ok(h)) => (w, h),
            _ => {
                return Err(CodecError::Encode {
                    message: format!("{width}x{height} exceeds the codec's size limit"),
                }
                .into())
            }
        };

        let mut image = RgbImage::new(w, h);
        {
            let mut bitmap = Bitmap::new(&mut image);
            let mut locked = bitmap.lock(LockMode::WriteOnly);
            for y in 0..height {
                for (x, pixel) in buffer.row(y).iter().enumerate() {
                    locked.set(x, y, *pixel)?;
                }
            }
        }

        Ok(image)
    }

    /// Copy `buffer` into a raster and encode it.
    pub fn write(&self, buffer: &PixelBuffer) -> Result<Bytes, CropError> {
        let image = self.write_image(buffer)?;

        let mut output = Cursor::new(Vec::new());
        image
            .write_to(&mut output, self.format.image_format())
            .map_err(|e| CodecError::Encode {
                message: e.to_string(),
            })?;

        let output = output.into_inner();
        debug!(
            width = buffer.width(),
            height = buffer.height(),
            format = ?self.format,
            bytes = output.len(),
            "encoded image"
        );
        Ok(Bytes::from(output))
    }
}
