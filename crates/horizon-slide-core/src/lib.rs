//! Core systems for Horizon Slide.
//!
//! This crate provides the pieces of the sliding popups effect that do not
//! depend on windows or geometry:
//!
//! - **Timeline**: a frame-driven progress clock with duration, direction and easing
//! - **Easing**: the curves a timeline can apply
//! - **Configuration**: default slide durations and the animation speed multiplier
//! - **Logging**: tracing targets and helpers shared by the workspace
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use horizon_slide_core::{Easing, SlideConfig, Timeline};
//!
//! let config = SlideConfig::default();
//! let mut timeline = Timeline::new(config.fade_in_duration());
//! timeline.set_easing(Easing::InOutSine);
//!
//! // One 16ms frame.
//! timeline.update(Duration::from_millis(16));
//! assert!(timeline.running());
//! ```

mod config;
mod easing;
mod error;
pub mod logging;
mod timeline;

pub use config::{
    CONFIG_FILE_NAME, DEFAULT_SLIDE_IN_TIME, DEFAULT_SLIDE_OUT_TIME, SlideConfig,
};
pub use easing::Easing;
pub use error::{SlideError, SlideResult};
pub use logging::PerfSpan;
pub use timeline::{DEFAULT_TIMELINE_DURATION, Timeline, TimelineDirection};
