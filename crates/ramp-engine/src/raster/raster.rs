use crate::coords::PixelRect;

use super::PixelFormat;

/// Filled pixels for one device rectangle.
///
/// Borrows the render context's buffer: it is a view, not a copy, and cannot
/// outlive the next fill or the context itself.
#[derive(Debug, Copy, Clone)]
pub struct Raster<'a> {
    rect: PixelRect,
    format: PixelFormat,
    pixels: &'a [u32],
}

impl<'a> Raster<'a> {
    pub(crate) fn new(rect: PixelRect, format: PixelFormat, pixels: &'a [u32]) -> Self {
        debug_assert_eq!(rect.area(), Some(pixels.len()));
        Self { rect, format, pixels }
    }

    /// Device rectangle these pixels cover.
    #[inline]
    pub fn rect(&self) -> PixelRect {
        self.rect
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.rect.width as usize
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.rect.height as usize
    }

    #[inline]
    pub fn format(&self) -> PixelFormat {
        self.format
    }

    /// Row-major pixel words, `width` per row, no padding.
    #[inline]
    pub fn pixels(&self) -> &'a [u32] {
        self.pixels
    }

    /// Row `y`, counted from the top of the rectangle.
    #[inline]
    pub fn row(&self, y: usize) -> &'a [u32] {
        let w = self.width();
        &self.pixels[y * w..(y + 1) * w]
    }

    /// Pixel at `(x, y)` relative to the rectangle's top-left corner.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> u32 {
        self.pixels[y * self.width() + x]
    }

    /// Native-endian bytes of the pixel words.
    #[inline]
    pub fn as_bytes(&self) -> &'a [u8] {
        bytemuck::cast_slice(self.pixels)
    }

    /// Straight RGBA bytes, 4 per pixel. Formats without alpha produce `a = 255`.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let opaque = !self.format.has_alpha();
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for &px in self.pixels {
            let a = if opaque { 0xFF } else { (px >> 24) as u8 };
            out.extend_from_slice(&[(px >> 16) as u8, (px >> 8) as u8, px as u8, a]);
        }
        out
    }
}
