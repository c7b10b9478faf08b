//! Bulk pixel access over a decoded bitmap.
//!
//! A [`Bitmap`] borrows an `image::RgbImage` owned by someone else and
//! exposes two access paths:
//!
//! - **Unlocked**: [`Bitmap::get_pixel`] / [`Bitmap::set_pixel`] go through
//!   the codec's own per-pixel accessors. Always correct, slower.
//! - **Locked**: [`Bitmap::lock`] returns a [`LockedRaster`] guard holding a
//!   24bpp scan-line copy of the pixels, addressed as
//!   `y * stride + x * BYTES_PER_PIXEL` with bytes stored B, G, R. Dropping
//!   the guard releases the lock (writing pixels back when the mode asks for
//!   it) on every exit path, including `?` and panics.
//!
//! The guard mutably borrows the bitmap, so the unlocked accessors cannot be
//! used while a lock is held and a second lock cannot be taken.

mod bitmap;
mod locked;

pub use bitmap::Bitmap;
pub use locked::{LockMode, LockedRaster};

/// Bytes per pixel in a locked scan line (24bpp, no alpha).
pub const BYTES_PER_PIXEL: usize = 3;

/// Scan lines are padded to a multiple of this many bytes.
pub const SCAN_LINE_ALIGNMENT: usize = 4;

/// Offset of the blue byte within a locked pixel.
pub const BLUE_OFFSET: usize = 0;

/// Offset of the green byte within a locked pixel.
pub const GREEN_OFFSET: usize = 1;

/// Offset of the red byte within a locked pixel.
pub const RED_OFFSET: usize = 2;

/// Byte length of one scan line for an image `width` pixels wide:
/// `width * 3` rounded up to the next multiple of 4.
#[inline]
pub fn scan_line_stride(width: usize) -> usize {
    (width * BYTES_PER_PIXEL).next_multiple_of(SCAN_LINE_ALIGNMENT)
}
