/// Seconds elapsed since the first rendered frame.
#[derive(Clone, Copy, Debug, Default)]
pub struct ShaderClock {
    start: Option<f64>,
    last: f32,
}

impl ShaderClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances to the frame timestamp `now_ms` and returns elapsed seconds.
    /// Never goes backwards, even if the host hands out an older timestamp.
    pub fn tick(&mut self, now_ms: f64) -> f32 {
        let start = *self.start.get_or_insert(now_ms);
        let elapsed = ((now_ms - start) * 0.001) as f32;
        if elapsed > self.last {
            self.last = elapsed;
        }
        self.last
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_is_time_zero() {
        let mut clock = ShaderClock::new();
        assert_eq!(clock.tick(12_345.0), 0.0);
    }

    #[test]
    fn elapsed_is_measured_in_seconds() {
        let mut clock = ShaderClock::new();
        clock.tick(1_000.0);
        assert_eq!(clock.tick(1_500.0), 0.5);
        assert_eq!(clock.tick(4_000.0), 3.0);
    }

    #[test]
    fn stale_timestamps_do_not_rewind() {
        let mut clock = ShaderClock::new();
        clock.tick(0.0);
        assert_eq!(clock.tick(2_000.0), 2.0);
        assert_eq!(clock.tick(1_000.0), 2.0);
    }
}
