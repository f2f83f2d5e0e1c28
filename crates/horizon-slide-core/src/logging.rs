//! Logging facilities for Horizon Slide.
//!
//! Horizon Slide uses the `tracing` crate for instrumentation. Nothing is
//! printed unless the host installs a subscriber:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_slide=debug")
//!     .init();
//! ```

/// Span names used throughout Horizon Slide for tracing.
pub mod span_names {
    /// Per-frame pre-paint pass.
    pub const PRE_PAINT: &str = "horizon_slide::pre_paint";
    /// Per-frame paint pass.
    pub const PAINT: &str = "horizon_slide::paint";
    /// Live reconfiguration.
    pub const RECONFIGURE: &str = "horizon_slide::reconfigure";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Root target.
    pub const ROOT: &str = "horizon_slide";
    /// Window lifecycle handling and state transitions.
    pub const EFFECT: &str = "horizon_slide::effect";
    /// Timeline bookkeeping.
    pub const TIMELINE: &str = "horizon_slide::timeline";
    /// Slide metadata parsing.
    pub const PROPERTY: &str = "horizon_slide::property";
    /// Configuration loading.
    pub const CONFIG: &str = "horizon_slide::config";
    /// Performance spans.
    pub const PERF: &str = "horizon_slide::perf";
}

/// A guard that keeps a tracing span entered until dropped.
///
/// Used to time a single pass of the effect.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create and enter a new performance span.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::trace_span!(target: targets::PERF, "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}

/// Macros for common tracing patterns.
///
/// These are thin wrappers around the `tracing` macros with the crate's root
/// target filled in. The calling crate must depend on `tracing`.
#[macro_export]
macro_rules! slide_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: $crate::logging::targets::ROOT, $($arg)*)
    };
}

#[macro_export]
macro_rules! slide_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: $crate::logging::targets::ROOT, $($arg)*)
    };
}

#[macro_export]
macro_rules! slide_info {
    ($($arg:tt)*) => {
        tracing::info!(target: $crate::logging::targets::ROOT, $($arg)*)
    };
}

#[macro_export]
macro_rules! slide_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: $crate::logging::targets::ROOT, $($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perf_span() {
        let _span = PerfSpan::new(span_names::PRE_PAINT);
    }

    #[test]
    fn test_targets_nest_under_root() {
        for target in [targets::EFFECT, targets::TIMELINE, targets::PROPERTY, targets::CONFIG, targets::PERF] {
            let sub = target.strip_prefix(targets::ROOT).and_then(|rest| rest.strip_prefix("::"));
            assert!(sub.is_some_and(|name| !name.is_empty()), "{target} is not under the root target");
        }
    }

    #[test]
    fn test_macros_with_subscriber() {
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter("horizon_slide=trace")
            .with_test_writer()
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            slide_trace!(window = 1, "trace line");
            slide_debug!("debug line");
            slide_info!("info line");
            slide_warn!("warn line");
        });
    }
}
