/// Layout of the 32-bit words in a raster buffer.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PixelFormat {
    /// 24-bit `0x00RRGGBB`; the top byte is zero and carries no meaning.
    Rgb,
    /// 32-bit straight-alpha `0xAARRGGBB`.
    Argb,
}

impl PixelFormat {
    pub const COUNT: usize = 2;
    pub const ALL: [PixelFormat; Self::COUNT] = [PixelFormat::Rgb, PixelFormat::Argb];

    #[inline]
    pub const fn has_alpha(self) -> bool {
        matches!(self, PixelFormat::Argb)
    }

    /// Converts a packed `0xAARRGGBB` color to this format's word.
    #[inline]
    pub const fn pack(self, argb: u32) -> u32 {
        match self {
            PixelFormat::Rgb => argb & 0x00FF_FFFF,
            PixelFormat::Argb => argb,
        }
    }

    /// Stable index for per-format storage.
    #[inline]
    pub(crate) const fn slot(self) -> usize {
        match self {
            PixelFormat::Rgb => 0,
            PixelFormat::Argb => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_pack_drops_alpha() {
        assert_eq!(PixelFormat::Rgb.pack(0x80_12_34_56), 0x00_12_34_56);
        assert_eq!(PixelFormat::Argb.pack(0x80_12_34_56), 0x80_12_34_56);
    }

    #[test]
    fn slots_are_distinct() {
        assert_ne!(PixelFormat::Rgb.slot(), PixelFormat::Argb.slot());
        assert!(PixelFormat::ALL.iter().all(|f| f.slot() < PixelFormat::ALL.len()));
    }
}
