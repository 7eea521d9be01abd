use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use crate::coords::Affine;
use crate::lut::LookupTable;

use super::Argb;

/// Behavior for gradient positions outside [0, 1].
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum CycleMethod {
    /// Clamp to the edge stops.
    #[default]
    NoCycle,
    /// Mirror-repeat: every other unit interval runs backwards.
    Reflect,
    /// Sawtooth repeat of the base ramp.
    Repeat,
}

/// Color space in which stops are interpolated.
///
/// Stored table entries are always sRGB regardless of this setting.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub enum ColorSpace {
    #[default]
    Srgb,
    LinearRgb,
}

/// Construction-time failure of a gradient definition.
#[derive(Debug, Clone, PartialEq)]
pub enum GradientError {
    /// `fractions` and `colors` have different lengths.
    LengthMismatch { fractions: usize, colors: usize },
    /// Fewer than two stops were supplied.
    TooFewStops(usize),
    /// A fraction lies outside [0, 1] or is not a number.
    FractionOutOfRange { index: usize, value: f32 },
    /// A fraction is not strictly greater than its predecessor.
    FractionsNotIncreasing { index: usize, previous: f32, value: f32 },
    /// The gradient transform contains a non-finite coefficient.
    NonFiniteTransform,
    /// A geometry point is NaN or infinite.
    NonFinitePoint,
    /// Linear gradient start and end points coincide.
    DegenerateAxis,
    /// Radial gradient radius is not a positive finite number.
    InvalidRadius(f32),
}

impl fmt::Display for GradientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GradientError::LengthMismatch { fractions, colors } => write!(
                f,
                "gradient has {fractions} fractions but {colors} colors"
            ),
            GradientError::TooFewStops(n) => {
                write!(f, "gradient needs at least 2 stops, got {n}")
            }
            GradientError::FractionOutOfRange { index, value } => {
                write!(f, "fraction {index} ({value}) is outside [0, 1]")
            }
            GradientError::FractionsNotIncreasing { index, previous, value } => write!(
                f,
                "fraction {index} ({value}) is not greater than the previous fraction ({previous})"
            ),
            GradientError::NonFiniteTransform => write!(f, "gradient transform is not finite"),
            GradientError::NonFinitePoint => write!(f, "gradient geometry point is not finite"),
            GradientError::DegenerateAxis => {
                write!(f, "linear gradient start and end points are equal")
            }
            GradientError::InvalidRadius(r) => {
                write!(f, "radial gradient radius must be positive, got {r}")
            }
        }
    }
}

impl std::error::Error for GradientError {}

/// Validated, normalized stop list plus the settings that shape a color ramp.
///
/// Invariants (established by [`GradientSpec::new`], never broken afterwards):
/// - `fractions.len() == colors.len() >= 2`
/// - fractions are strictly increasing, `fractions[0] == 0.0`, last is `1.0`
///
/// The lookup table derived from a spec is memoized on it, so render contexts
/// created from the same `Arc<GradientSpec>` share one table.
pub struct GradientSpec {
    fractions: Vec<f32>,
    colors: Vec<Argb>,
    cycle_method: CycleMethod,
    color_space: ColorSpace,
    transform: Affine,
    opaque: bool,

    lookup: RwLock<Option<Arc<LookupTable>>>,
}

impl GradientSpec {
    /// Validates and normalizes a stop list.
    ///
    /// If the first fraction is not `0.0` a stop at `0.0` with a copy of the first
    /// color is prepended; likewise a stop at `1.0` with the last color is appended.
    pub fn new(
        fractions: &[f32],
        colors: &[Argb],
        cycle_method: CycleMethod,
        color_space: ColorSpace,
        transform: Affine,
    ) -> Result<Self, GradientError> {
        if fractions.len() != colors.len() {
            return Err(GradientError::LengthMismatch {
                fractions: fractions.len(),
                colors: colors.len(),
            });
        }
        if colors.len() < 2 {
            return Err(GradientError::TooFewStops(colors.len()));
        }

        let mut previous = None;
        for (index, &value) in fractions.iter().enumerate() {
            // Written this way round so NaN is rejected too.
            if !(0.0..=1.0).contains(&value) {
                return Err(GradientError::FractionOutOfRange { index, value });
            }
            if let Some(previous) = previous {
                if value <= previous {
                    return Err(GradientError::FractionsNotIncreasing { index, previous, value });
                }
            }
            previous = Some(value);
        }

        if !transform.is_finite() {
            return Err(GradientError::NonFiniteTransform);
        }

        let (fractions, colors) = normalize_stops(fractions, colors);
        let opaque = colors.iter().fold(0xFF, |acc, c| acc & c.a()) == 0xFF;

        Ok(Self {
            fractions,
            colors,
            cycle_method,
            color_space,
            transform,
            opaque,
            lookup: RwLock::new(None),
        })
    }

    #[inline]
    pub fn fractions(&self) -> &[f32] {
        &self.fractions
    }

    #[inline]
    pub fn colors(&self) -> &[Argb] {
        &self.colors
    }

    #[inline]
    pub fn cycle_method(&self) -> CycleMethod {
        self.cycle_method
    }

    #[inline]
    pub fn color_space(&self) -> ColorSpace {
        self.color_space
    }

    /// Transform from gradient space to user space.
    #[inline]
    pub fn transform(&self) -> &Affine {
        &self.transform
    }

    /// True when every stop has alpha `0xFF`.
    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.opaque
    }

    /// Returns the memoized lookup table, building it on first use.
    ///
    /// Concurrent first calls may each build a table; only the first one stored
    /// is ever handed out, and readers never observe a partially built table.
    pub fn lookup_table(&self) -> Arc<LookupTable> {
        if let Some(table) = self.lookup.read().unwrap_or_else(PoisonError::into_inner).as_ref() {
            log::trace!("lookup table memo hit");
            return Arc::clone(table);
        }

        log::trace!("lookup table memo miss; building");
        let built = Arc::new(LookupTable::build(self));

        let mut slot = self.lookup.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(slot.get_or_insert(built))
    }

    /// Drops the memoized lookup table. The next [`lookup_table`](Self::lookup_table)
    /// call rebuilds it; contexts already holding the old table keep using it.
    pub fn invalidate_lookup_table(&self) {
        let dropped = self.lookup.write().unwrap_or_else(PoisonError::into_inner).take();
        if dropped.is_some() {
            log::debug!("lookup table memo invalidated");
        }
    }

    /// True if a lookup table is currently memoized.
    pub fn has_lookup_table(&self) -> bool {
        self.lookup.read().unwrap_or_else(PoisonError::into_inner).is_some()
    }
}

impl fmt::Debug for GradientSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GradientSpec")
            .field("fractions", &self.fractions)
            .field("colors", &self.colors)
            .field("cycle_method", &self.cycle_method)
            .field("color_space", &self.color_space)
            .field("transform", &self.transform)
            .field("opaque", &self.opaque)
            .finish_non_exhaustive()
    }
}

/// Anchors the stop list at 0 and 1 by duplicating the edge colors.
fn normalize_stops(fractions: &[f32], colors: &[Argb]) -> (Vec<f32>, Vec<Argb>) {
    let mut out_fractions = Vec::with_capacity(fractions.len() + 2);
    let mut out_colors = Vec::with_capacity(colors.len() + 2);

    if fractions[0] != 0.0 {
        out_fractions.push(0.0);
        out_colors.push(colors[0]);
    }

    out_fractions.extend_from_slice(fractions);
    out_colors.extend_from_slice(colors);

    if fractions[fractions.len() - 1] != 1.0 {
        out_fractions.push(1.0);
        out_colors.push(colors[colors.len() - 1]);
    }

    (out_fractions, out_colors)
}
