//! RGB pixel value.

/// A single RGB pixel with three 8-bit channels.
///
/// Equality is component-wise. There is no alpha channel; alpha present in
/// decoded images is dropped on load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    /// Pure white (255, 255, 255).
    pub const WHITE: Pixel = Pixel::new(255, 255, 255);

    /// Pure black (0, 0, 0), also the value of a freshly allocated cell.
    pub const BLACK: Pixel = Pixel::new(0, 0, 0);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Exact whiteness test: `r == g == b == 255`, no tolerance.
    #[inline]
    pub fn is_white(self) -> bool {
        self == Self::WHITE
    }

    /// Channel-wise inverse (`255 - c`).
    #[inline]
    pub fn invert(self) -> Self {
        Self {
            r: 255 - self.r,
            g: 255 - self.g,
            b: 255 - self.b,
        }
    }
}

impl From<[u8; 3]> for Pixel {
    #[inline]
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<Pixel> for [u8; 3] {
    #[inline]
    fn from(p: Pixel) -> Self {
        [p.r, p.g, p.b]
    }
}
