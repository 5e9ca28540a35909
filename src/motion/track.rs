/// Linear mapping from an input domain onto an output range.
///
/// Input is clamped to the domain before interpolating, so overscroll never
/// extrapolates past the output boundaries. NaN input maps to the start of the
/// output range.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Track {
    from: (f64, f64),
    to: (f64, f64),
}

impl Track {
    pub const fn new(from: (f64, f64), to: (f64, f64)) -> Self {
        Self { from, to }
    }

    /// Track over the normalised `[0, 1]` domain.
    pub const fn unit(to: (f64, f64)) -> Self {
        Self::new((0.0, 1.0), to)
    }

    pub fn sample(&self, input: f64) -> f64 {
        let (lo, hi) = self.from;
        let span = hi - lo;
        if span == 0.0 || input.is_nan() {
            return self.to.0;
        }
        let t = ((input - lo) / span).clamp(0.0, 1.0);
        lerp(self.to.0, self.to.1, t)
    }
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_map_to_range_bounds() {
        let track = Track::new((0.0, 800.0), (0.0, -400.0));
        assert_eq!(track.sample(0.0), 0.0);
        assert_eq!(track.sample(800.0), -400.0);
        assert_eq!(track.sample(400.0), -200.0);
    }

    #[test]
    fn input_outside_domain_is_clamped() {
        let track = Track::unit((0.0, 1200.0));
        assert_eq!(track.sample(-0.3), 0.0);
        assert_eq!(track.sample(1.7), 1200.0);
        assert_eq!(track.sample(f64::INFINITY), 1200.0);
        assert_eq!(track.sample(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn nan_input_falls_back_to_range_start() {
        let track = Track::unit((0.0, -700.0));
        assert_eq!(track.sample(f64::NAN), 0.0);
    }

    #[test]
    fn degenerate_domain_does_not_divide_by_zero() {
        let track = Track::new((5.0, 5.0), (1.0, 2.0));
        assert_eq!(track.sample(5.0), 1.0);
        assert_eq!(track.sample(9.0), 1.0);
    }

    #[test]
    fn sampling_is_repeatable_bit_for_bit() {
        let track = Track::unit((0.0, -350.0));
        for i in 0..=1000 {
            let s = i as f64 / 1000.0;
            assert_eq!(track.sample(s).to_bits(), track.sample(s).to_bits());
        }
    }

    #[test]
    fn single_sign_tracks_are_monotonic() {
        let up = Track::unit((0.0, 45.0));
        let down = Track::unit((0.0, -90.0));
        let mut prev_up = up.sample(0.0);
        let mut prev_down = down.sample(0.0);
        for i in 1..=200 {
            let s = i as f64 / 200.0;
            assert!(up.sample(s) >= prev_up);
            assert!(down.sample(s) <= prev_down);
            prev_up = up.sample(s);
            prev_down = down.sample(s);
        }
    }
}
