//! Ramp engine crate.
//!
//! CPU rasterization of multi-stop linear and radial gradient paints.
//!
//! Data flows one way:
//! - [`paint::GradientSpec`] validates and normalizes stops
//! - [`lut::LookupTable`] is built once per spec and memoized on it
//! - [`raster::GradientContext`] resolves every device pixel through the table
//!   into a buffer borrowed from [`raster::RasterCache`]
//!
//! ```
//! use ramp_engine::coords::{Affine, PixelRect, Vec2};
//! use ramp_engine::paint::{Argb, ColorSpace, CycleMethod, LinearGradientPaint};
//!
//! let paint = LinearGradientPaint::linear(
//!     Vec2::zero(),
//!     Vec2::new(64.0, 0.0),
//!     &[0.0, 1.0],
//!     &[Argb::BLACK, Argb::WHITE],
//!     CycleMethod::Reflect,
//!     ColorSpace::Srgb,
//!     Affine::IDENTITY,
//! )
//! .unwrap();
//!
//! let mut ctx = paint.create_context(&Affine::IDENTITY, None);
//! let raster = ctx.fill(PixelRect::new(0, 0, 128, 1)).unwrap();
//! assert_eq!(raster.pixels().len(), 128);
//! ```

pub mod coords;
pub mod logging;
pub mod lut;
pub mod paint;
pub mod raster;
