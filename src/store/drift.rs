// Bounded random walk applied to each metric on every poll

/// Per-metric walk: `value + (u - 0.5) * amplitude`, then pinned to `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drift {
    pub amplitude: f64,
    pub min: f64,
    pub max: f64,
}

pub const CPU_DRIFT: Drift = Drift {
    amplitude: 10.0,
    min: 10.0,
    max: 95.0,
};

pub const RAM_DRIFT: Drift = Drift {
    amplitude: 8.0,
    min: 20.0,
    max: 95.0,
};

pub const DISK_DRIFT: Drift = Drift {
    amplitude: 3.0,
    min: 30.0,
    max: 98.0,
};

pub const NETWORK_DRIFT: Drift = Drift {
    amplitude: 50.0,
    min: 50.0,
    max: 500.0,
};

impl Drift {
    /// `u` is a uniform draw in `[0, 1)`.
    pub fn step(&self, value: f64, u: f64) -> f64 {
        (value + (u - 0.5) * self.amplitude).min(self.max).max(self.min)
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_moves_by_at_most_half_the_amplitude() {
        let up = CPU_DRIFT.step(50.0, 0.999_999);
        let down = CPU_DRIFT.step(50.0, 0.0);
        assert!(up <= 55.0 && up > 54.9);
        assert_eq!(down, 45.0);
        assert_eq!(CPU_DRIFT.step(50.0, 0.5), 50.0);
    }

    #[test]
    fn step_pins_to_bounds() {
        assert_eq!(CPU_DRIFT.step(94.0, 0.99), 95.0);
        assert_eq!(CPU_DRIFT.step(11.0, 0.0), 10.0);
        assert_eq!(NETWORK_DRIFT.step(52.0, 0.0), 50.0);
        assert_eq!(DISK_DRIFT.step(98.0, 0.9), 98.0);
    }

    #[test]
    fn step_pulls_out_of_range_values_back_inside() {
        // Raw pushes may leave a metric far outside the walk's range.
        assert_eq!(RAM_DRIFT.step(250.0, 0.5), 95.0);
        assert_eq!(RAM_DRIFT.step(-40.0, 0.5), 20.0);
        assert_eq!(NETWORK_DRIFT.step(999.0, 0.0), 500.0);
    }
}
