use super::Vec2;

/// 2D affine transform.
///
/// Maps `(x, y)` to:
///
/// ```text
/// x' = m00 * x + m01 * y + m02
/// y' = m10 * x + m11 * y + m12
/// ```
///
/// Stored in `f64` so that concatenation and inversion do not lose precision;
/// the per-pixel path works on the `f32` coefficients from [`Affine::coefficients`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Affine {
    pub m00: f64,
    pub m10: f64,
    pub m01: f64,
    pub m11: f64,
    pub m02: f64,
    pub m12: f64,
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine {
    pub const IDENTITY: Affine = Affine::new(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);

    #[inline]
    pub const fn new(m00: f64, m10: f64, m01: f64, m11: f64, m02: f64, m12: f64) -> Self {
        Self { m00, m10, m01, m11, m02, m12 }
    }

    #[inline]
    pub const fn translate(tx: f64, ty: f64) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    #[inline]
    pub const fn scale(sx: f64, sy: f64) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    /// Rotation by `theta` radians (positive turns +X towards +Y).
    #[inline]
    pub fn rotate(theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self::new(cos, sin, -sin, cos, 0.0, 0.0)
    }

    #[inline]
    pub fn is_finite(&self) -> bool {
        [self.m00, self.m10, self.m01, self.m11, self.m02, self.m12]
            .iter()
            .all(|v| v.is_finite())
    }

    #[inline]
    pub fn determinant(&self) -> f64 {
        self.m00 * self.m11 - self.m01 * self.m10
    }

    /// Returns `self * other`: the result applies `other` first, then `self`.
    pub fn concat(&self, other: &Affine) -> Affine {
        Affine::new(
            self.m00 * other.m00 + self.m01 * other.m10,
            self.m10 * other.m00 + self.m11 * other.m10,
            self.m00 * other.m01 + self.m01 * other.m11,
            self.m10 * other.m01 + self.m11 * other.m11,
            self.m00 * other.m02 + self.m01 * other.m12 + self.m02,
            self.m10 * other.m02 + self.m11 * other.m12 + self.m12,
        )
    }

    /// Inverse transform, or `None` when the matrix is singular or not finite.
    pub fn invert(&self) -> Option<Affine> {
        let det = self.determinant();
        if !det.is_finite() || det.abs() <= f64::MIN_POSITIVE {
            return None;
        }

        let inv = 1.0 / det;
        let m00 = self.m11 * inv;
        let m10 = -self.m10 * inv;
        let m01 = -self.m01 * inv;
        let m11 = self.m00 * inv;
        let m02 = (self.m01 * self.m12 - self.m11 * self.m02) * inv;
        let m12 = (self.m10 * self.m02 - self.m00 * self.m12) * inv;

        let out = Affine::new(m00, m10, m01, m11, m02, m12);
        out.is_finite().then_some(out)
    }

    #[inline]
    pub fn apply(&self, p: Vec2) -> Vec2 {
        let x = p.x as f64;
        let y = p.y as f64;
        Vec2::new(
            (self.m00 * x + self.m01 * y + self.m02) as f32,
            (self.m10 * x + self.m11 * y + self.m12) as f32,
        )
    }

    /// Coefficients as `[m00, m10, m01, m11, m02, m12]`, narrowed to `f32`.
    #[inline]
    pub fn coefficients(&self) -> [f32; 6] {
        [
            self.m00 as f32,
            self.m10 as f32,
            self.m01 as f32,
            self.m11 as f32,
            self.m02 as f32,
            self.m12 as f32,
        ]
    }
}
