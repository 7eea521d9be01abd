//! Gradient geometry: maps a gradient-space point to a scalar ramp position.
//!
//! Position `0.0` is the first stop, `1.0` the last; anything outside is
//! handled by the cycle method at lookup time.

use crate::coords::Vec2;

use super::GradientError;

/// Focus points on or outside the circle are pulled back to this fraction of the radius.
const FOCUS_SCALEBACK: f32 = 0.99;

/// Produces the scalar ramp position for a point in gradient space.
pub trait GradientGeometry {
    fn position(&self, p: Vec2) -> f32;
}

/// Position along the axis from `start` (0.0) to `end` (1.0).
///
/// Points are projected perpendicular onto the axis, so lines of equal color are
/// orthogonal to it.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LinearGeometry {
    start: Vec2,
    end: Vec2,
    /// Axis divided by its squared length; a dot product with it yields the position.
    scaled_axis: Vec2,
}

impl LinearGeometry {
    pub fn new(start: Vec2, end: Vec2) -> Result<Self, GradientError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(GradientError::NonFinitePoint);
        }

        let axis = end - start;
        let len_sq = axis.length_squared();
        if len_sq <= 0.0 || !len_sq.is_finite() {
            return Err(GradientError::DegenerateAxis);
        }

        Ok(Self { start, end, scaled_axis: axis * (1.0 / len_sq) })
    }

    #[inline]
    pub fn start(&self) -> Vec2 {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Vec2 {
        self.end
    }
}

impl GradientGeometry for LinearGeometry {
    #[inline]
    fn position(&self, p: Vec2) -> f32 {
        (p - self.start).dot(self.scaled_axis)
    }
}

/// Position measured from `focus` (0.0) out to the circle (1.0).
///
/// For a point `p` the position is `|p - focus|` divided by the distance from
/// the focus to the circle along the ray through `p`. With the focus at the
/// center this is simply `|p - center| / radius`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RadialGeometry {
    center: Vec2,
    radius: f32,
    focus: Vec2,
}

impl RadialGeometry {
    /// Radial geometry with the focus at the center.
    pub fn centered(center: Vec2, radius: f32) -> Result<Self, GradientError> {
        Self::new(center, radius, center)
    }

    pub fn new(center: Vec2, radius: f32, focus: Vec2) -> Result<Self, GradientError> {
        if !center.is_finite() || !focus.is_finite() {
            return Err(GradientError::NonFinitePoint);
        }
        if !(radius > 0.0 && radius.is_finite()) {
            return Err(GradientError::InvalidRadius(radius));
        }

        let offset = focus - center;
        let dist = offset.length();
        let limit = radius * FOCUS_SCALEBACK;
        let focus = if dist > limit {
            log::debug!("radial focus {dist} from center exceeds radius {radius}; pulled back");
            center + offset * (limit / dist)
        } else {
            focus
        };

        Ok(Self { center, radius, focus })
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.center
    }

    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Effective focus, after any pull-back into the circle.
    #[inline]
    pub fn focus(&self) -> Vec2 {
        self.focus
    }
}

impl GradientGeometry for RadialGeometry {
    fn position(&self, p: Vec2) -> f32 {
        let d = p - self.focus;
        let a = d.length_squared();
        if a == 0.0 {
            return 0.0;
        }

        // Solve |focus + s*d - center| = radius for the positive root s; the
        // circle is crossed at focus + s*d, so p sits at 1/s of the way there.
        let fc = self.focus - self.center;
        let b = 2.0 * d.dot(fc);
        let c = fc.length_squared() - self.radius * self.radius;
        let disc = (b * b - 4.0 * a * c).max(0.0);
        let s = (-b + disc.sqrt()) / (2.0 * a);

        1.0 / s
    }
}
