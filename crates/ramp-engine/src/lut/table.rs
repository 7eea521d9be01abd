use crate::paint::colorspace::{argb_to_linear, argb_to_srgb};
use crate::paint::{Argb, ColorSpace, CycleMethod, GradientSpec};
use crate::raster::PixelFormat;

use super::interpolate::interpolate;

/// Largest estimated flat-table size that still uses the flat strategy.
pub const MAX_FLAT_TABLE_SIZE: usize = 5000;

/// Entries per interval in the jagged strategy.
pub const JAGGED_INTERVAL_SIZE: usize = 256;

/// Entries given to the smallest interval in the flat strategy.
const MIN_INTERVAL_SLOTS: f32 = 255.0;

/// Which table layout a [`LookupTable`] uses.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Strategy {
    /// One contiguous table, intervals sized proportionally to their length.
    Flat,
    /// One fixed-size table per interval, searched by fraction at lookup time.
    Jagged,
}

#[derive(Debug)]
pub(super) enum Ramp {
    Flat {
        table: Vec<Argb>,
        /// `table.len() - 1`; scales a [0, 1] position into an index.
        fast_size: usize,
    },
    Jagged {
        tables: Vec<Box<[Argb; JAGGED_INTERVAL_SIZE]>>,
        fractions: Vec<f32>,
        intervals: Vec<f32>,
        /// Color returned at position 1.0, which no interval contains.
        last: Argb,
    },
}

/// Precomputed color ramp for one [`GradientSpec`].
///
/// Entries are straight-alpha sRGB whatever space interpolation happened in.
#[derive(Debug)]
pub struct LookupTable {
    pub(super) ramp: Ramp,
    pub(super) cycle_method: CycleMethod,
    pixel_format: PixelFormat,
}

impl LookupTable {
    /// Builds the table, choosing the strategy from the estimated flat size.
    pub fn build(spec: &GradientSpec) -> Self {
        let intervals = intervals(spec.fractions());
        let min = min_interval(&intervals);
        let estimate = estimated_flat_size(&intervals, min);

        let strategy = if estimate <= MAX_FLAT_TABLE_SIZE {
            Strategy::Flat
        } else {
            Strategy::Jagged
        };

        log::debug!(
            "building {strategy:?} lookup table: {} stops, estimated flat size {estimate}",
            spec.fractions().len()
        );

        Self::build_with(spec, strategy)
    }

    /// Builds the table with an explicit strategy, bypassing the size heuristic.
    pub(crate) fn build_with(spec: &GradientSpec, strategy: Strategy) -> Self {
        let linear = spec.color_space() == ColorSpace::LinearRgb;
        let colors: Vec<Argb> = if linear {
            spec.colors().iter().map(|&c| argb_to_linear(c)).collect()
        } else {
            spec.colors().to_vec()
        };

        let intervals = intervals(spec.fractions());

        let mut ramp = match strategy {
            Strategy::Flat => build_flat(&colors, &intervals),
            Strategy::Jagged => build_jagged(&colors, spec.fractions(), intervals),
        };

        if linear {
            ramp.map_entries(argb_to_srgb);
        }

        let pixel_format = if spec.is_opaque() { PixelFormat::Rgb } else { PixelFormat::Argb };

        Self {
            ramp,
            cycle_method: spec.cycle_method(),
            pixel_format,
        }
    }

    #[inline]
    pub fn strategy(&self) -> Strategy {
        match self.ramp {
            Ramp::Flat { .. } => Strategy::Flat,
            Ramp::Jagged { .. } => Strategy::Jagged,
        }
    }

    /// Pixel format chosen from the spec's transparency.
    #[inline]
    pub fn pixel_format(&self) -> PixelFormat {
        self.pixel_format
    }

    #[inline]
    pub fn cycle_method(&self) -> CycleMethod {
        self.cycle_method
    }

    /// Total number of stored entries.
    pub fn len(&self) -> usize {
        match &self.ramp {
            Ramp::Flat { table, .. } => table.len(),
            Ramp::Jagged { tables, .. } => tables.len() * JAGGED_INTERVAL_SIZE,
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Ramp {
    fn map_entries(&mut self, f: impl Fn(Argb) -> Argb) {
        match self {
            Ramp::Flat { table, .. } => table.iter_mut().for_each(|c| *c = f(*c)),
            Ramp::Jagged { tables, last, .. } => {
                tables.iter_mut().flat_map(|t| t.iter_mut()).for_each(|c| *c = f(*c));
                *last = f(*last);
            }
        }
    }
}

fn intervals(fractions: &[f32]) -> Vec<f32> {
    fractions.windows(2).map(|w| w[1] - w[0]).collect()
}

fn min_interval(intervals: &[f32]) -> f32 {
    intervals.iter().copied().fold(1.0, f32::min)
}

/// Slots for one interval: the smallest interval gets 255, the rest proportionally more.
#[inline]
fn interval_slots(interval: f32, min: f32) -> usize {
    (interval / min * MIN_INTERVAL_SLOTS + 0.5) as usize
}

/// Size of the flat table for these intervals (including the trailing end color).
fn estimated_flat_size(intervals: &[f32], min: f32) -> usize {
    intervals
        .iter()
        .map(|&i| interval_slots(i, min))
        .fold(1usize, usize::saturating_add)
}

fn build_flat(colors: &[Argb], intervals: &[f32]) -> Ramp {
    let min = min_interval(intervals);
    let total = estimated_flat_size(intervals, min);

    let mut table = vec![Argb::TRANSPARENT; total];
    let mut offset = 0;
    for (i, &interval) in intervals.iter().enumerate() {
        let n = interval_slots(interval, min);
        interpolate(colors[i], colors[i + 1], &mut table[offset..offset + n]);
        offset += n;
    }
    table[total - 1] = colors[colors.len() - 1];

    Ramp::Flat { fast_size: total - 1, table }
}

fn build_jagged(colors: &[Argb], fractions: &[f32], intervals: Vec<f32>) -> Ramp {
    let tables = (0..intervals.len())
        .map(|i| {
            let mut t = Box::new([Argb::TRANSPARENT; JAGGED_INTERVAL_SIZE]);
            interpolate(colors[i], colors[i + 1], &mut t[..]);
            t
        })
        .collect();

    Ramp::Jagged {
        tables,
        fractions: fractions.to_vec(),
        intervals,
        last: colors[colors.len() - 1],
    }
}
