//! Paint model: packed colors, gradient definitions and geometry.
//!
//! Scope:
//! - color representation (straight-alpha packed `0xAARRGGBB`)
//! - sRGB/linear conversion tables
//! - validated gradient stop lists
//! - linear and radial position geometry
//! - gradient paints that create render contexts

pub mod color;
pub mod colorspace;
pub mod geometry;
pub mod gradient;
#[allow(clippy::module_inception)]
mod paint;

pub use color::Argb;
pub use geometry::{GradientGeometry, LinearGeometry, RadialGeometry};
pub use gradient::{ColorSpace, CycleMethod, GradientError, GradientSpec};
pub use paint::{GradientPaint, LinearGradientPaint, RadialGradientPaint};
