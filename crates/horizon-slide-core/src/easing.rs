//! Easing curves for timelines.
//!
//! An easing curve maps linear progress (0.0 to 1.0) onto the progress that is
//! actually shown on screen.

use std::f32::consts::PI;

/// Available easing curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing).
    #[default]
    Linear,
    /// Sinusoidal ease-in-out. Used for popup slides.
    InOutSine,
}

impl Easing {
    /// Apply the curve to a progress value.
    ///
    /// The input is clamped to `0.0..=1.0`. Both curves map 0 to 0 and 1 to 1
    /// and are monotonically non-decreasing in between.
    ///
    /// ```
    /// use horizon_slide_core::Easing;
    ///
    /// assert_eq!(Easing::Linear.apply(0.25), 0.25);
    /// assert!(Easing::InOutSine.apply(0.25) < 0.25);
    /// ```
    #[inline]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Easing::Linear => t,
            Easing::InOutSine => -((PI * t).cos() - 1.0) / 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 2] = [Easing::Linear, Easing::InOutSine];

    #[test]
    fn test_boundaries() {
        for easing in ALL {
            assert!(easing.apply(0.0).abs() < 0.001, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < 0.001, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_monotonic() {
        for easing in ALL {
            let mut last = easing.apply(0.0);
            for step in 1..=100 {
                let value = easing.apply(step as f32 / 100.0);
                assert!(value + 1e-6 >= last, "{easing:?} decreased at step {step}");
                last = value;
            }
        }
    }

    #[test]
    fn test_in_out_sine_midpoint() {
        assert!((Easing::InOutSine.apply(0.5) - 0.5).abs() < 0.001);
        assert!(Easing::InOutSine.apply(0.25) < 0.25);
        assert!(Easing::InOutSine.apply(0.75) > 0.75);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(Easing::Linear.apply(-0.5), 0.0);
        assert_eq!(Easing::InOutSine.apply(1.5), 1.0);
    }
}
