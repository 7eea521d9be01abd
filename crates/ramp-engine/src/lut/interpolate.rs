use crate::paint::Argb;

/// Fills `out` with a ramp from `start` towards `end`.
///
/// Slot `i` holds `start + i * (end - start) / out.len()` per channel, truncated
/// after a `+0.5` bias. Slot 0 is exactly `start`; `end` itself is never
/// written (it is the first slot of the following interval).
pub(crate) fn interpolate(start: Argb, end: Argb, out: &mut [Argb]) {
    if out.is_empty() {
        return;
    }

    let step = 1.0f32 / out.len() as f32;
    let channels = |c: Argb| [c.a() as i32, c.r() as i32, c.g() as i32, c.b() as i32];
    let from = channels(start);
    let to = channels(end);
    let delta = [to[0] - from[0], to[1] - from[1], to[2] - from[2], to[3] - from[3]];

    for (i, slot) in out.iter_mut().enumerate() {
        let ch = |k: usize| (from[k] as f32 + (i as i32 * delta[k]) as f32 * step + 0.5) as u8;
        *slot = Argb::new(ch(0), ch(1), ch(2), ch(3));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_slot_is_start_color() {
        let mut out = [Argb::TRANSPARENT; 10];
        interpolate(Argb::RED, Argb::BLUE, &mut out);
        assert_eq!(out[0], Argb::RED);
    }

    #[test]
    fn black_to_white_over_255_slots_steps_by_one() {
        let mut out = [Argb::TRANSPARENT; 255];
        interpolate(Argb::BLACK, Argb::WHITE, &mut out);
        for (i, c) in out.iter().enumerate() {
            assert_eq!(c.r() as usize, i);
            assert_eq!(c.a(), 0xFF);
        }
    }

    #[test]
    fn rounding_uses_half_up_bias() {
        // 0 + 1 * 255 / 2 = 127.5 -> 128
        let mut out = [Argb::TRANSPARENT; 2];
        interpolate(Argb::BLACK, Argb::WHITE, &mut out);
        assert_eq!(out[1], Argb::rgb(128, 128, 128));
    }

    #[test]
    fn descending_channels_interpolate_down() {
        let mut out = [Argb::TRANSPARENT; 4];
        interpolate(Argb::new(200, 200, 0, 0), Argb::new(0, 0, 0, 0), &mut out);
        assert_eq!(out.map(|c| c.a()), [200, 150, 100, 50]);
    }

    #[test]
    fn empty_output_is_noop() {
        interpolate(Argb::RED, Argb::BLUE, &mut []);
    }
}
