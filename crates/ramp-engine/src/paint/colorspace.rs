//! sRGB ↔ linear-light conversion on 8-bit channels.
//!
//! Both directions are 256-entry tables computed once on first use and
//! shared read-only by every thread afterwards.

use std::sync::LazyLock;

use super::Argb;

struct ConversionTables {
    to_linear: [u8; 256],
    to_srgb: [u8; 256],
}

static TABLES: LazyLock<ConversionTables> = LazyLock::new(ConversionTables::compute);

impl ConversionTables {
    fn compute() -> Self {
        let mut to_linear = [0u8; 256];
        let mut to_srgb = [0u8; 256];

        for c in 0..256 {
            let x = c as f64 / 255.0;
            to_linear[c] = quantize(decode_srgb(x));
            to_srgb[c] = quantize(encode_srgb(x));
        }

        log::trace!("sRGB/linear conversion tables computed");
        Self { to_linear, to_srgb }
    }
}

/// sRGB transfer function, inverse direction.
#[inline]
fn decode_srgb(x: f64) -> f64 {
    if x <= 0.04045 {
        x / 12.92
    } else {
        ((x + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB transfer function, forward direction.
#[inline]
fn encode_srgb(x: f64) -> f64 {
    if x <= 0.0031308 {
        12.92 * x
    } else {
        1.055 * x.powf(1.0 / 2.4) - 0.055
    }
}

#[inline]
fn quantize(v: f64) -> u8 {
    (v * 255.0 + 0.5).floor().clamp(0.0, 255.0) as u8
}

/// Converts one sRGB-encoded channel to linear light.
#[inline]
pub fn srgb_to_linear(c: u8) -> u8 {
    TABLES.to_linear[c as usize]
}

/// Converts one linear-light channel to sRGB encoding.
#[inline]
pub fn linear_to_srgb(c: u8) -> u8 {
    TABLES.to_srgb[c as usize]
}

/// Converts the color channels of `c` to linear light; alpha is unchanged.
#[inline]
pub fn argb_to_linear(c: Argb) -> Argb {
    let t = &*TABLES;
    c.map_rgb(|v| t.to_linear[v as usize])
}

/// Converts the color channels of `c` to sRGB; alpha is unchanged.
#[inline]
pub fn argb_to_srgb(c: Argb) -> Argb {
    let t = &*TABLES;
    c.map_rgb(|v| t.to_srgb[v as usize])
}
