//! Horizon Slide: edge-sliding show and hide animations for popups.
//!
//! Clients mark a popup (a panel menu, a notification, an on-screen display)
//! with the screen edge it belongs to. When the window is shown it slides in
//! from that edge; when it is closed or hidden it slides back out, even if the
//! client window is already gone by then.
//!
//! The compositor drives the effect through the [`Effect`] trait and offers
//! its services through [`EffectsHost`].
//!
//! # Example
//!
//! ```ignore
//! use horizon_slide::{Effect, SlideConfig, SlidingPopups};
//!
//! let mut effect = SlidingPopups::new(host, SlideConfig::load_or_default()?);
//!
//! effect.window_added(&popup);
//! while effect.is_active() {
//!     effect.pre_paint_window(&popup, &mut pre_paint, frame_time);
//!     effect.paint_window(&popup, &mut region, &mut paint);
//!     effect.post_paint_window(&popup);
//! }
//! ```
//!
//! # Crate Organization
//!
//! - [`horizon_slide_core`]: timelines, easing, configuration, logging
//! - [`render`]: rectangles, quads, regions and per-frame paint data

mod effect;
mod geometry;
mod host;
mod record;
mod sliding_popups;
mod store;
mod window;

pub use effect::Effect;
pub use geometry::SlideGeometry;
pub use host::{EffectsHost, PropertyAtom, WindowFlags};
pub use record::{
    RawSlideFields, SLIDE_PROPERTY_NAME, SlideAttribute, SlideEdge, SlideRecord, resolve_record,
};
pub use sliding_popups::{DEFAULT_SLIDE_LENGTH_LINES, SlidingPopups};
pub use store::{AnimationState, AnimationStore, Disappearing};
pub use window::{WindowHandle, WindowHold, WindowId, WindowLifecycle, WindowState};

pub use horizon_slide_core::{
    Easing, SlideConfig, SlideError, SlideResult, Timeline, TimelineDirection,
};
pub use horizon_slide_render as render;
