/// Axis-aligned rectangle of device pixels (top-left origin, +Y down).
///
/// `x`/`y` address the top-left pixel; the rectangle covers
/// `[x, x + width) × [y, y + height)`.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    #[inline]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Number of pixels covered, or `None` if it does not fit in `usize`.
    #[inline]
    pub fn area(self) -> Option<usize> {
        (self.width as usize).checked_mul(self.height as usize)
    }
}
