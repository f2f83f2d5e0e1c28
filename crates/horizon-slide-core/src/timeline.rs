//! Frame-driven animation timelines.
//!
//! A [`Timeline`] is a normalized progress clock. It does not read the wall
//! clock itself: the compositor tells it how much time passed since the last
//! frame through [`Timeline::update`], which keeps every animation in lockstep
//! with the repaint cycle.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use horizon_slide_core::{Easing, Timeline, TimelineDirection};
//!
//! let mut timeline = Timeline::new(Duration::from_millis(200));
//! timeline.set_direction(TimelineDirection::Forward);
//! timeline.set_easing(Easing::Linear);
//!
//! timeline.update(Duration::from_millis(50));
//! assert!(timeline.running());
//! assert!((timeline.value() - 0.25).abs() < 1e-6);
//!
//! timeline.update(Duration::from_millis(500));
//! assert!(timeline.done());
//! assert_eq!(timeline.value(), 1.0);
//! ```

use std::time::Duration;

use crate::easing::Easing;
use crate::logging::targets;

/// Duration a timeline uses until told otherwise.
pub const DEFAULT_TIMELINE_DURATION: Duration = Duration::from_millis(1000);

/// The direction in which a timeline runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TimelineDirection {
    /// Progress goes from 0 towards 1.
    #[default]
    Forward,
    /// Progress goes from 1 towards 0.
    Backward,
}

/// A normalized progress clock with a duration, a direction and an easing curve.
///
/// Invariants:
/// - `elapsed <= duration` at all times
/// - [`value`](Self::value) stays within `0.0..=1.0`
/// - [`done`](Self::done) is true exactly when `elapsed >= duration`
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    duration: Duration,
    elapsed: Duration,
    direction: TimelineDirection,
    easing: Easing,
}

impl Timeline {
    /// Create a forward, linear timeline with the given duration.
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            elapsed: Duration::ZERO,
            direction: TimelineDirection::Forward,
            easing: Easing::Linear,
        }
    }

    /// Rewind to the start.
    pub fn reset(&mut self) {
        self.elapsed = Duration::ZERO;
    }

    /// Total duration.
    #[inline]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Change the duration.
    ///
    /// A timeline that is part way through keeps its relative progress: the
    /// elapsed time is rescaled by `new / old`, so live reconfiguration never
    /// makes a running animation jump.
    pub fn set_duration(&mut self, duration: Duration) {
        if duration == self.duration {
            return;
        }

        if !self.elapsed.is_zero() {
            self.elapsed = if self.duration.is_zero() {
                duration
            } else {
                let scaled =
                    self.elapsed.as_nanos() * duration.as_nanos() / self.duration.as_nanos();
                Duration::from_nanos(u64::try_from(scaled).unwrap_or(u64::MAX))
            };
        }
        self.duration = duration;
        self.elapsed = self.elapsed.min(self.duration);

        tracing::trace!(
            target: targets::TIMELINE,
            duration_ms = duration.as_millis() as u64,
            elapsed_ms = self.elapsed.as_millis() as u64,
            "timeline duration changed"
        );
    }

    /// Direction of travel.
    #[inline]
    pub fn direction(&self) -> TimelineDirection {
        self.direction
    }

    /// Change the direction.
    ///
    /// A timeline that has already started is mirrored so the visible value
    /// continues from where it was instead of snapping.
    pub fn set_direction(&mut self, direction: TimelineDirection) {
        if direction == self.direction {
            return;
        }
        if !self.elapsed.is_zero() && !self.done() {
            self.elapsed = self.duration - self.elapsed;
        }
        self.direction = direction;
    }

    /// The easing curve applied by [`value`](Self::value).
    #[inline]
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// Set the easing curve.
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// Time accumulated so far, never more than the duration.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Advance by `delta`.
    ///
    /// Elapsed time is clamped to the duration; once the timeline is done
    /// further updates change nothing.
    pub fn update(&mut self, delta: Duration) {
        if self.done() {
            return;
        }
        self.elapsed = self.elapsed.saturating_add(delta).min(self.duration);
    }

    /// Linear progress in `0.0..=1.0`, before easing and direction.
    pub fn linear_progress(&self) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0) as f32
    }

    /// Eased progress in `0.0..=1.0`.
    ///
    /// A backward timeline starts at 1 and ends at 0.
    pub fn value(&self) -> f32 {
        let t = match self.direction {
            TimelineDirection::Forward => self.linear_progress(),
            TimelineDirection::Backward => 1.0 - self.linear_progress(),
        };
        self.easing.apply(t)
    }

    /// Whether the full duration has elapsed.
    #[inline]
    pub fn done(&self) -> bool {
        self.elapsed >= self.duration
    }

    /// Whether the timeline has started but not yet finished.
    #[inline]
    pub fn running(&self) -> bool {
        !self.elapsed.is_zero() && !self.done()
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new(DEFAULT_TIMELINE_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_new_timeline() {
        let t = Timeline::new(ms(100));
        assert_eq!(t.value(), 0.0);
        assert!(!t.done());
        assert!(!t.running());
        assert_eq!(t.direction(), TimelineDirection::Forward);
    }

    #[test]
    fn test_update_and_done() {
        let mut t = Timeline::new(ms(100));
        t.update(ms(40));
        assert!(t.running());
        assert!(!t.done());
        assert!((t.value() - 0.4).abs() < 1e-6);

        t.update(ms(60));
        assert!(t.done());
        assert!(!t.running());
        assert_eq!(t.value(), 1.0);
    }

    #[test]
    fn test_updates_past_done_are_noops() {
        let mut t = Timeline::new(ms(100));
        t.update(ms(150));
        assert_eq!(t.elapsed(), ms(100));
        t.update(ms(150));
        assert_eq!(t.elapsed(), ms(100));
        assert!(t.done());
    }

    #[test]
    fn test_value_monotonic_with_easing() {
        let mut t = Timeline::new(ms(150));
        t.set_easing(Easing::InOutSine);
        let mut last = t.value();
        for _ in 0..20 {
            t.update(ms(9));
            assert!(t.value() >= last);
            last = t.value();
        }
        assert!(t.done());
    }

    #[test]
    fn test_reset() {
        let mut t = Timeline::new(ms(100));
        t.update(ms(100));
        assert!(t.done());
        t.reset();
        assert!(!t.done());
        assert_eq!(t.value(), 0.0);
    }

    #[test]
    fn test_set_duration_rescales_progress() {
        let mut t = Timeline::new(ms(100));
        t.update(ms(50));
        t.set_duration(ms(300));
        assert_eq!(t.elapsed(), ms(150));
        assert!((t.linear_progress() - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_set_duration_before_start() {
        let mut t = Timeline::new(ms(100));
        t.set_duration(ms(250));
        assert_eq!(t.elapsed(), Duration::ZERO);
        assert_eq!(t.duration(), ms(250));
    }

    #[test]
    fn test_set_duration_keeps_done() {
        let mut t = Timeline::new(ms(100));
        t.update(ms(100));
        t.set_duration(ms(40));
        assert!(t.done());
    }

    #[test]
    fn test_zero_duration_is_done() {
        let mut t = Timeline::new(Duration::ZERO);
        assert!(t.done());
        t.update(ms(16));
        assert_eq!(t.value(), 1.0);
    }

    #[test]
    fn test_backward_direction() {
        let mut t = Timeline::new(ms(100));
        t.set_direction(TimelineDirection::Backward);
        assert_eq!(t.value(), 1.0);
        t.update(ms(25));
        assert!((t.value() - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_direction_change_mirrors_running_timeline() {
        let mut t = Timeline::new(ms(100));
        t.update(ms(30));
        let before = t.value();
        t.set_direction(TimelineDirection::Backward);
        assert!((t.value() - before).abs() < 1e-6);
    }
}
