use std::fmt;
use std::sync::Arc;

use crate::coords::{Affine, PixelRect, Vec2};
use crate::lut::LookupTable;
use crate::paint::{GradientGeometry, GradientSpec};

use super::{PixelFormat, Raster, RasterCache};

/// Failure of a single fill request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    /// The requested rectangle has zero width or height.
    EmptyRect(PixelRect),
    /// The requested rectangle has more pixels than can be addressed.
    TooLarge(PixelRect),
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::EmptyRect(r) => {
                write!(f, "cannot fill empty rectangle {}x{} at ({}, {})", r.width, r.height, r.x, r.y)
            }
            RasterError::TooLarge(r) => {
                write!(f, "rectangle {}x{} is too large to fill", r.width, r.height)
            }
        }
    }
}

impl std::error::Error for RasterError {}

/// Per-operation state for filling device pixels with one gradient.
///
/// Lifecycle:
/// - construction resolves the lookup table (memoized on the spec) and inverts
///   the device-from-gradient transform once
/// - [`fill`](Self::fill) may be called any number of times; each call reuses
///   the context's buffer, growing it through the cache when needed
/// - dropping (or [`dispose`](Self::dispose)) returns the buffer to the cache
///
/// A context is single-threaded; create one per thread from a shared spec.
pub struct GradientContext<'c, G> {
    table: Arc<LookupTable>,
    geometry: G,
    /// Gradient-from-device coefficients `[m00, m10, m01, m11, m02, m12]`.
    inverse: [f32; 6],
    format: PixelFormat,
    cache: &'c RasterCache,
    buffer: Option<Vec<u32>>,
}

impl<'c, G: GradientGeometry> GradientContext<'c, G> {
    /// Creates a context for filling `spec` through `geometry`.
    ///
    /// `device_transform` maps user space to device space. If the combined
    /// device-from-gradient transform is singular, identity is used instead and a
    /// warning is logged; the render is wrong but nothing fails.
    ///
    /// `preferred` is a hint only. The format is dictated by the spec's
    /// transparency: opaque stops give [`PixelFormat::Rgb`].
    pub fn new(
        spec: &GradientSpec,
        geometry: G,
        device_transform: &Affine,
        preferred: Option<PixelFormat>,
        cache: &'c RasterCache,
    ) -> Self {
        let table = spec.lookup_table();
        let format = table.pixel_format();

        if let Some(preferred) = preferred.filter(|&p| p != format) {
            log::debug!("preferred pixel format {preferred:?} ignored; gradient needs {format:?}");
        }

        let device_from_gradient = device_transform.concat(spec.transform());
        let inverse = match device_from_gradient.invert() {
            Some(inv) => inv,
            None => {
                log::warn!("gradient transform {device_from_gradient:?} is not invertible; using identity");
                Affine::IDENTITY
            }
        };

        Self {
            table,
            geometry,
            inverse: inverse.coefficients(),
            format,
            cache,
            buffer: None,
        }
    }

    #[inline]
    pub fn pixel_format(&self) -> PixelFormat {
        self.format
    }

    #[inline]
    pub fn lookup_table(&self) -> &LookupTable {
        &self.table
    }

    #[inline]
    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// Gradient-from-device coefficients `[m00, m10, m01, m11, m02, m12]`.
    #[inline]
    pub fn inverse_coefficients(&self) -> [f32; 6] {
        self.inverse
    }

    /// Fills `rect` and returns a view of the pixels.
    ///
    /// Each device pixel is sampled at its center. The returned raster borrows
    /// the context's buffer and is overwritten by the next fill.
    pub fn fill(&mut self, rect: PixelRect) -> Result<Raster<'_>, RasterError> {
        if rect.is_empty() {
            return Err(RasterError::EmptyRect(rect));
        }
        let len = rect.area().ok_or(RasterError::TooLarge(rect))?;

        let mut buffer = match self.buffer.take() {
            Some(buf) if buf.len() >= len => buf,
            Some(buf) => {
                self.cache.release(self.format, buf);
                self.cache.acquire(self.format, len)
            }
            None => self.cache.acquire(self.format, len),
        };

        let [m00, m10, m01, m11, m02, m12] = self.inverse;
        let width = rect.width as usize;

        for (row, line) in buffer[..len].chunks_exact_mut(width).enumerate() {
            let dy = rect.y as f32 + row as f32 + 0.5;
            let row_x = m01 * dy + m02;
            let row_y = m11 * dy + m12;

            for (col, px) in line.iter_mut().enumerate() {
                let dx = rect.x as f32 + col as f32 + 0.5;
                let p = Vec2::new(m00 * dx + row_x, m10 * dx + row_y);
                let color = self.table.resolve(self.geometry.position(p));
                *px = self.format.pack(color.0);
            }
        }

        let buffer = self.buffer.insert(buffer);
        Ok(Raster::new(rect, self.format, &buffer[..len]))
    }

    /// Ends the context, returning its buffer to the cache.
    #[inline]
    pub fn dispose(self) {
        drop(self);
    }
}

impl<G> Drop for GradientContext<'_, G> {
    fn drop(&mut self) {
        if let Some(buf) = self.buffer.take() {
            self.cache.release(self.format, buf);
        }
    }
}
