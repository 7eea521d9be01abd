use std::sync::Arc;

use crate::coords::{Affine, Vec2};
use crate::raster::{GradientContext, PixelFormat, RasterCache};

use super::{
    Argb, ColorSpace, CycleMethod, GradientError, GradientGeometry, GradientSpec, LinearGeometry,
    RadialGeometry,
};

/// A gradient paint: a shared stop list plus the geometry that positions it.
///
/// Cloning is cheap and clones share the spec, and with it the memoized
/// lookup table.
#[derive(Debug, Clone)]
pub struct GradientPaint<G> {
    spec: Arc<GradientSpec>,
    geometry: G,
}

pub type LinearGradientPaint = GradientPaint<LinearGeometry>;
pub type RadialGradientPaint = GradientPaint<RadialGeometry>;

impl<G: GradientGeometry + Clone> GradientPaint<G> {
    #[inline]
    pub fn new(spec: Arc<GradientSpec>, geometry: G) -> Self {
        Self { spec, geometry }
    }

    #[inline]
    pub fn spec(&self) -> &Arc<GradientSpec> {
        &self.spec
    }

    #[inline]
    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.spec.is_opaque()
    }

    /// Creates a render context backed by the process-wide [`RasterCache`].
    pub fn create_context(
        &self,
        device_transform: &Affine,
        preferred: Option<PixelFormat>,
    ) -> GradientContext<'static, G> {
        self.create_context_in(device_transform, preferred, RasterCache::global())
    }

    /// Creates a render context backed by `cache`.
    pub fn create_context_in<'c>(
        &self,
        device_transform: &Affine,
        preferred: Option<PixelFormat>,
        cache: &'c RasterCache,
    ) -> GradientContext<'c, G> {
        GradientContext::new(&self.spec, self.geometry.clone(), device_transform, preferred, cache)
    }
}

impl LinearGradientPaint {
    /// Linear gradient from `start` (first stop) to `end` (last stop).
    #[allow(clippy::too_many_arguments)]
    pub fn linear(
        start: Vec2,
        end: Vec2,
        fractions: &[f32],
        colors: &[Argb],
        cycle_method: CycleMethod,
        color_space: ColorSpace,
        transform: Affine,
    ) -> Result<Self, GradientError> {
        let geometry = LinearGeometry::new(start, end)?;
        let spec = GradientSpec::new(fractions, colors, cycle_method, color_space, transform)?;
        Ok(Self::new(Arc::new(spec), geometry))
    }
}

impl RadialGradientPaint {
    /// Radial gradient from `focus` (first stop) out to the circle (last stop).
    #[allow(clippy::too_many_arguments)]
    pub fn radial(
        center: Vec2,
        radius: f32,
        focus: Vec2,
        fractions: &[f32],
        colors: &[Argb],
        cycle_method: CycleMethod,
        color_space: ColorSpace,
        transform: Affine,
    ) -> Result<Self, GradientError> {
        let geometry = RadialGeometry::new(center, radius, focus)?;
        let spec = GradientSpec::new(fractions, colors, cycle_method, color_space, transform)?;
        Ok(Self::new(Arc::new(spec), geometry))
    }
}
