use bytemuck::{Pod, Zeroable};

/// Packed straight-alpha sRGB color, laid out as `0xAARRGGBB`.
///
/// Invariant:
/// - channels are straight (not premultiplied) 8-bit values.
///
/// Rationale:
/// - one `u32` per pixel is what raster buffers store, so table entries and
///   output pixels share the same representation with no per-pixel conversion.
#[repr(transparent)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Argb(pub u32);

impl Argb {
    pub const TRANSPARENT: Argb = Argb(0x0000_0000);
    pub const BLACK: Argb = Argb(0xFF00_0000);
    pub const WHITE: Argb = Argb(0xFFFF_FFFF);
    pub const RED: Argb = Argb(0xFFFF_0000);
    pub const GREEN: Argb = Argb(0xFF00_FF00);
    pub const BLUE: Argb = Argb(0xFF00_00FF);

    #[inline]
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Fully opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(0xFF, r, g, b)
    }

    #[inline]
    pub const fn a(self) -> u8 {
        (self.0 >> 24) as u8
    }

    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 16) as u8
    }

    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 8) as u8
    }

    #[inline]
    pub const fn b(self) -> u8 {
        self.0 as u8
    }

    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a() == 0xFF
    }

    /// Applies `f` to red, green and blue; alpha is left untouched.
    #[inline]
    pub fn map_rgb(self, f: impl Fn(u8) -> u8) -> Self {
        Self::new(self.a(), f(self.r()), f(self.g()), f(self.b()))
    }

    /// Straight `[r, g, b, a]` bytes.
    #[inline]
    pub const fn to_rgba8(self) -> [u8; 4] {
        [self.r(), self.g(), self.b(), self.a()]
    }
}

impl From<u32> for Argb {
    #[inline]
    fn from(value: u32) -> Self {
        Argb(value)
    }
}

impl From<Argb> for u32 {
    #[inline]
    fn from(value: Argb) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_unpack_in_argb_order() {
        let c = Argb(0x80_11_22_33);
        assert_eq!((c.a(), c.r(), c.g(), c.b()), (0x80, 0x11, 0x22, 0x33));
        assert_eq!(Argb::new(0x80, 0x11, 0x22, 0x33), c);
    }

    #[test]
    fn rgb_is_opaque() {
        assert!(Argb::rgb(1, 2, 3).is_opaque());
        assert!(!Argb::new(0xFE, 1, 2, 3).is_opaque());
    }

    #[test]
    fn map_rgb_keeps_alpha() {
        let c = Argb::new(0x40, 10, 20, 30).map_rgb(|v| v * 2);
        assert_eq!(c, Argb::new(0x40, 20, 40, 60));
    }

    #[test]
    fn rgba8_reorders_bytes() {
        assert_eq!(Argb::new(4, 1, 2, 3).to_rgba8(), [1, 2, 3, 4]);
    }
}
