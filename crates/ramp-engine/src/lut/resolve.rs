use crate::paint::{Argb, CycleMethod};

use super::table::{JAGGED_INTERVAL_SIZE, LookupTable, Ramp};

const JAGGED_INDEX_SCALE: f32 = (JAGGED_INTERVAL_SIZE - 1) as f32;

/// Maps any gradient-space position into [0, 1] according to `cycle`.
///
/// NaN maps to 0.
#[inline]
pub fn normalize_position(position: f32, cycle: CycleMethod) -> f32 {
    if position.is_nan() {
        return 0.0;
    }

    match cycle {
        CycleMethod::NoCycle => position.clamp(0.0, 1.0),
        CycleMethod::Repeat => {
            let p = position.fract();
            if p < 0.0 { p + 1.0 } else if p.is_nan() { 0.0 } else { p }
        }
        CycleMethod::Reflect => {
            let p = position.abs();
            let part = p.trunc();
            let r = p - part;
            if r.is_nan() {
                0.0
            } else if part % 2.0 == 1.0 {
                1.0 - r
            } else {
                r
            }
        }
    }
}

impl LookupTable {
    /// Resolves a raw gradient-space position to a color.
    ///
    /// Applies the cycle method, then indexes the table; no color arithmetic
    /// happens here.
    #[inline]
    pub fn resolve(&self, position: f32) -> Argb {
        let t = normalize_position(position, self.cycle_method);

        match &self.ramp {
            Ramp::Flat { table, fast_size } => {
                let index = ((t * *fast_size as f32) as usize).min(*fast_size);
                table[index]
            }
            Ramp::Jagged { tables, fractions, intervals, last } => {
                for (i, table) in tables.iter().enumerate() {
                    if t < fractions[i + 1] {
                        let local = (t - fractions[i]) / intervals[i];
                        let index = ((local * JAGGED_INDEX_SCALE) as usize).min(JAGGED_INTERVAL_SIZE - 1);
                        return table[index];
                    }
                }
                *last
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Affine;
    use crate::lut::Strategy;
    use crate::paint::{ColorSpace, GradientSpec};

    fn table(fractions: &[f32], colors: &[Argb], cycle: CycleMethod) -> LookupTable {
        let spec = GradientSpec::new(fractions, colors, cycle, ColorSpace::Srgb, Affine::IDENTITY).unwrap();
        LookupTable::build(&spec)
    }

    fn channel_diff(a: Argb, b: Argb) -> i32 {
        let d = |x: u8, y: u8| (x as i32 - y as i32).abs();
        d(a.a(), b.a()).max(d(a.r(), b.r())).max(d(a.g(), b.g())).max(d(a.b(), b.b()))
    }

    // ── normalize_position ────────────────────────────────────────────────

    #[test]
    fn no_cycle_clamps() {
        assert_eq!(normalize_position(-3.0, CycleMethod::NoCycle), 0.0);
        assert_eq!(normalize_position(7.5, CycleMethod::NoCycle), 1.0);
        assert_eq!(normalize_position(0.25, CycleMethod::NoCycle), 0.25);
    }

    #[test]
    fn repeat_wraps_negative_into_unit_range() {
        assert_eq!(normalize_position(2.25, CycleMethod::Repeat), 0.25);
        assert_eq!(normalize_position(-0.25, CycleMethod::Repeat), 0.75);
        assert_eq!(normalize_position(-3.0, CycleMethod::Repeat), 0.0);
    }

    #[test]
    fn reflect_mirrors_odd_intervals() {
        assert_eq!(normalize_position(0.25, CycleMethod::Reflect), 0.25);
        assert_eq!(normalize_position(1.25, CycleMethod::Reflect), 0.75);
        assert_eq!(normalize_position(2.25, CycleMethod::Reflect), 0.25);
        assert_eq!(normalize_position(-1.25, CycleMethod::Reflect), 0.75);
    }

    #[test]
    fn nan_and_infinity_do_not_escape() {
        for cycle in [CycleMethod::NoCycle, CycleMethod::Repeat, CycleMethod::Reflect] {
            let p = normalize_position(f32::NAN, cycle);
            assert!((0.0..=1.0).contains(&p));
            let p = normalize_position(f32::INFINITY, cycle);
            assert!((0.0..=1.0).contains(&p));
            let p = normalize_position(f32::NEG_INFINITY, cycle);
            assert!((0.0..=1.0).contains(&p));
        }
    }

    // ── scenarios ─────────────────────────────────────────────────────────

    #[test]
    fn black_to_white_midpoint_is_gray() {
        let t = table(&[0.0, 1.0], &[Argb::BLACK, Argb::WHITE], CycleMethod::NoCycle);
        let c = t.resolve(0.5);
        assert!(channel_diff(c, Argb::rgb(128, 128, 128)) <= 1, "{c:?}");
        assert_eq!(c.a(), 0xFF);
    }

    #[test]
    fn unanchored_stops_resolve_to_edge_color() {
        let t = table(&[0.3, 0.7], &[Argb::BLUE, Argb::RED], CycleMethod::NoCycle);
        assert_eq!(t.resolve(0.1), Argb::BLUE);
        assert_eq!(t.resolve(0.0), Argb::BLUE);
        assert_eq!(t.resolve(0.9), Argb::RED);
    }

    // ── stop exactness ────────────────────────────────────────────────────

    // Equal quarter intervals give exact slot counts; see table.rs for the
    // one-slot drift of rounded interval sizes.
    #[test]
    fn stops_resolve_exactly_flat() {
        let colors = [Argb::RED, Argb::GREEN, Argb::rgb(10, 20, 30), Argb::new(0x40, 1, 2, 3), Argb::BLUE];
        let fractions = [0.0, 0.25, 0.5, 0.75, 1.0];
        let t = table(&fractions, &colors, CycleMethod::NoCycle);
        assert_eq!(t.strategy(), Strategy::Flat);
        for (f, c) in fractions.iter().zip(colors) {
            assert_eq!(t.resolve(*f), c, "at {f}");
        }
    }

    #[test]
    fn stops_resolve_exactly_jagged() {
        let colors = [Argb::RED, Argb::GREEN, Argb::WHITE, Argb::BLUE];
        let fractions = [0.0, 0.001, 0.5, 1.0];
        let t = table(&fractions, &colors, CycleMethod::NoCycle);
        assert_eq!(t.strategy(), Strategy::Jagged);
        for (f, c) in fractions.iter().zip(colors) {
            assert_eq!(t.resolve(*f), c, "at {f}");
        }
    }

    // ── cycle properties ──────────────────────────────────────────────────

    #[test]
    fn no_cycle_outside_range_uses_edge_stops() {
        let t = table(&[0.0, 0.5, 1.0], &[Argb::RED, Argb::GREEN, Argb::BLUE], CycleMethod::NoCycle);
        assert_eq!(t.resolve(-0.5), Argb::RED);
        assert_eq!(t.resolve(-1000.0), Argb::RED);
        assert_eq!(t.resolve(1.5), Argb::BLUE);
        assert_eq!(t.resolve(1000.0), Argb::BLUE);
    }

    // Dyadic positions survive `p + k` in f32 exactly, so these compare equal.
    #[test]
    fn repeat_is_periodic() {
        let t = table(&[0.0, 0.5, 1.0], &[Argb::RED, Argb::GREEN, Argb::BLUE], CycleMethod::Repeat);
        for p in [0.0f32, 0.125, 0.375, 0.5, 0.8125] {
            for k in [-3.0f32, -1.0, 1.0, 2.0, 5.0] {
                assert_eq!(t.resolve(p), t.resolve(p + k), "p={p} k={k}");
            }
        }
    }

    #[test]
    fn reflect_is_symmetric() {
        let t = table(&[0.0, 0.5, 1.0], &[Argb::RED, Argb::GREEN, Argb::BLUE], CycleMethod::Reflect);
        for p in [0.0f32, 0.125, 0.25, 0.625, 0.875] {
            assert_eq!(t.resolve(p), t.resolve(-p), "p={p}");
            assert_eq!(t.resolve(p), t.resolve(2.0 - p), "p={p}");
        }
    }

    // `p + k` is rounded to f32 before any cycle reduction, so other positions
    // may land one slot away: 3.6 - 3 is not 0.6 in f32.
    #[test]
    fn cycles_hold_within_one_level_for_inexact_positions() {
        let repeat = table(&[0.0, 1.0], &[Argb::BLACK, Argb::WHITE], CycleMethod::Repeat);
        let reflect = table(&[0.0, 1.0], &[Argb::BLACK, Argb::WHITE], CycleMethod::Reflect);

        for p in [0.1f32, 0.3, 0.4, 0.6, 0.7, 0.9] {
            for k in [-3.0f32, -1.0, 1.0, 2.0, 3.0, 5.0] {
                let (a, b) = (repeat.resolve(p), repeat.resolve(p + k));
                assert!(channel_diff(a, b) <= 1, "repeat p={p} k={k}: {a:?} vs {b:?}");
            }
            let (a, b) = (reflect.resolve(p), reflect.resolve(2.0 - p));
            assert!(channel_diff(a, b) <= 1, "reflect p={p}: {a:?} vs {b:?}");
            assert_eq!(reflect.resolve(p), reflect.resolve(-p), "reflect p={p}");
        }
    }

    // ── strategy equivalence ──────────────────────────────────────────────

    #[test]
    fn jagged_matches_flat_reference() {
        let fractions = [0.0, 0.002, 0.5, 1.0];
        let colors = [Argb::BLACK, Argb::RED, Argb::new(0x80, 0x20, 0xF0, 0x10), Argb::WHITE];
        let spec =
            GradientSpec::new(&fractions, &colors, CycleMethod::NoCycle, ColorSpace::Srgb, Affine::IDENTITY)
                .unwrap();

        let jagged = LookupTable::build(&spec);
        assert_eq!(jagged.strategy(), Strategy::Jagged);
        let flat = LookupTable::build_with(&spec, Strategy::Flat);
        assert_eq!(flat.strategy(), Strategy::Flat);

        for i in 0..=1000 {
            let p = i as f32 / 1000.0;
            let (a, b) = (jagged.resolve(p), flat.resolve(p));
            assert!(channel_diff(a, b) <= 3, "p={p}: jagged {a:?} flat {b:?}");
        }
    }
}
