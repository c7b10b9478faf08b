use image::{Rgb, RgbImage};

use crate::error::RasterError;
use crate::pixel::Pixel;

use super::{LockMode, LockedRaster};

/// Access adapter over a borrowed `RgbImage`.
///
/// The adapter never owns the image; the caller allocates it and disposes of
/// it after the adapter (and any lock it handed out) is gone.
#[derive(Debug)]
pub struct Bitmap<'a> {
    image: &'a mut RgbImage,
}

impl<'a> Bitmap<'a> {
    pub fn new(image: &'a mut RgbImage) -> Self {
        Self { image }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.image.width() as usize
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.image.height() as usize
    }

    /// Read one pixel through the codec's generic accessor.
    pub fn get_pixel(&self, x: usize, y: usize) -> Result<Pixel, RasterError> {
        let (cx, cy) = self.coords(x, y)?;
        let Rgb(rgb) = *self.image.get_pixel(cx, cy);
        Ok(Pixel::from(rgb))
    }

    /// Write one pixel through the codec's generic accessor.
    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: Pixel) -> Result<(), RasterError> {
        let (cx, cy) = self.coords(x, y)?;
        self.image.put_pixel(cx, cy, Rgb(pixel.into()));
        Ok(())
    }

    /// Begin a raw-access session. The lock is released when the returned
    /// guard is dropped or passed to [`LockedRaster::unlock`].
    pub fn lock(&mut self, mode: LockMode) -> LockedRaster<'_> {
        LockedRaster::acquire(self.image, mode)
    }

    fn coords(&self, x: usize, y: usize) -> Result<(u32, u32), RasterError> {
        let (width, height) = (self.width(), self.height());
        if x < width && y < height {
            Ok((x as u32, y as u32))
        } else {
            Err(RasterError::OutOfBounds {
                x,
                y,
                width,
                height,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unlocked_get_set() {
        let mut image = RgbImage::new(3, 2);
        let mut bitmap = Bitmap::new(&mut image);
        assert_eq!((bitmap.width(), bitmap.height()), (3, 2));

        bitmap.set_pixel(2, 1, Pixel::new(9, 8, 7)).unwrap();
        assert_eq!(bitmap.get_pixel(2, 1).unwrap(), Pixel::new(9, 8, 7));
        assert_eq!(bitmap.get_pixel(0, 0).unwrap(), Pixel::BLACK);
        drop(bitmap);

        assert_eq!(image.get_pixel(2, 1), &Rgb([9, 8, 7]));
    }

    #[test]
    fn test_unlocked_out_of_bounds() {
        let mut image = RgbImage::new(3, 2);
        let mut bitmap = Bitmap::new(&mut image);
        assert!(bitmap.get_pixel(3, 0).is_err());
        assert!(matches!(
            bitmap.set_pixel(0, 2, Pixel::WHITE),
            Err(RasterError::OutOfBounds { x: 0, y: 2, .. })
        ));
    }

    #[test]
    fn test_unlocked_usable_after_unlock() {
        let mut image = RgbImage::new(2, 2);
        let mut bitmap = Bitmap::new(&mut image);

        let mut locked = bitmap.lock(LockMode::ReadWrite);
        locked.set(1, 1, Pixel::new(1, 2, 3)).unwrap();
        locked.unlock();

        assert_eq!(bitmap.get_pixel(1, 1).unwrap(), Pixel::new(1, 2, 3));
    }
}
