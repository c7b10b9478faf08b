use serde::Serialize;

use crate::pixel::PixelBuffer;

/// Inclusive pixel bounds `[left, right] x [top, bottom]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CropRect {
    pub left: usize,
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
}

impl CropRect {
    pub fn new(left: usize, top: usize, right: usize, bottom: usize) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// The rectangle covering every pixel of a `width x height` image.
    ///
    /// `width` and `height` must be non-zero.
    pub fn full(width: usize, height: usize) -> Self {
        Self::new(0, 0, width - 1, height - 1)
    }

    /// Number of columns kept (`right - left + 1`), or 0 when `right < left`.
    #[inline]
    pub fn width(&self) -> usize {
        inclusive_span(self.left, self.right)
    }

    /// Number of rows kept (`bottom - top + 1`), or 0 when `bottom < top`.
    #[inline]
    pub fn height(&self) -> usize {
        inclusive_span(self.top, self.bottom)
    }

    /// True when the bounds are inverted on either axis.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.right < self.left || self.bottom < self.top
    }

    /// True iff this spans the whole `width x height` image, i.e. cropping
    /// to it would change nothing.
    pub fn is_full_extent(&self, width: usize, height: usize) -> bool {
        self.left == 0
            && self.top == 0
            && width.checked_sub(1) == Some(self.right)
            && height.checked_sub(1) == Some(self.bottom)
    }

    /// Copy the covered region of `source` into a new buffer.
    ///
    /// Returns `None` for an inverted rectangle.
    pub fn apply(&self, source: &PixelBuffer) -> Option<PixelBuffer> {
        if self.is_empty() {
            return None;
        }
        PixelBuffer::crop(source, self.left, self.top, self.width(), self.height())
    }
}

#[inline]
fn inclusive_span(start: usize, end: usize) -> usize {
    end.checked_sub(start).map_or(0, |d| d.saturating_add(1))
}
