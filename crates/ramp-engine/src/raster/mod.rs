//! Raster fill: turning a gradient into device pixels.
//!
//! - [`GradientContext`] walks a device rectangle, maps each pixel center back
//!   to gradient space and writes the resolved color
//! - [`RasterCache`] pools the output buffers so repeated fills do not allocate
//! - [`Raster`] is the borrowed result, tagged with its [`PixelFormat`]

mod cache;
mod context;
mod format;
#[allow(clippy::module_inception)]
mod raster;

pub use cache::{RasterCache, RasterCacheConfig};
pub use context::{GradientContext, RasterError};
pub use format::PixelFormat;
pub use raster::Raster;
