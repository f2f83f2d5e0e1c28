//! The sliding popups effect.
//!
//! Popups that asked for it slide in from a screen edge when shown and slide
//! back out when closed or hidden. Each window moves through three states:
//!
//! ```text
//!            shown / added                    close / hide
//!   Idle ─────────────────────► Appearing ───────────────────► Disappearing
//!    ▲                              │                               │
//!    └──── timeline done ───────────┘                               │
//!    └──── timeline done, hold released ────────────────────────────┘
//! ```
//!
//! A show during a close animation restarts the appear animation. Only
//! windows with a slide record (from the legacy property or the native
//! surface attribute) are ever animated.

use std::time::Duration;

use horizon_slide_core::logging::{span_names, targets};
use horizon_slide_core::{Easing, PerfSpan, SlideConfig, Timeline, TimelineDirection, slide_debug};
use horizon_slide_render::{PaintDisabled, Region, WindowPaintData, WindowPrePaintData};

use crate::effect::Effect;
use crate::geometry::SlideGeometry;
use crate::host::{EffectsHost, PropertyAtom, WindowFlags};
use crate::record::{RawSlideFields, SLIDE_PROPERTY_NAME, SlideRecord, resolve_record};
use crate::store::{AnimationState, AnimationStore};
use crate::window::{WindowHandle, WindowId};

/// Default slide length in lines of the default font.
pub const DEFAULT_SLIDE_LENGTH_LINES: f32 = 8.0;

/// Slides popups in and out from a screen edge.
///
/// # Example
///
/// ```ignore
/// let mut effect = SlidingPopups::new(host, SlideConfig::load_or_default()?);
/// effect.window_added(&popup);
/// assert!(effect.is_active());
/// ```
pub struct SlidingPopups<H: EffectsHost> {
    host: H,
    config: SlideConfig,
    store: AnimationStore,
    atom: Option<PropertyAtom>,
    slide_protocol: bool,
    slide_length: f32,
    fade_in: Duration,
    fade_out: Duration,
}

impl<H: EffectsHost> SlidingPopups<H> {
    /// Whether the effect can run on `host` at all.
    pub fn supported(host: &H) -> bool {
        host.animations_supported()
    }

    /// Create the effect and announce the slide property.
    pub fn new(mut host: H, config: SlideConfig) -> Self {
        let slide_protocol = host.slide_protocol_available();
        let slide_length = host.font_line_height() * DEFAULT_SLIDE_LENGTH_LINES;
        let atom = host.announce_support_property(SLIDE_PROPERTY_NAME);
        tracing::debug!(
            target: targets::EFFECT,
            slide_protocol,
            slide_length,
            atom = atom.map(PropertyAtom::as_raw),
            "sliding popups created"
        );

        let mut effect = Self {
            host,
            fade_in: config.fade_in_duration(),
            fade_out: config.fade_out_duration(),
            config: SlideConfig::default(),
            store: AnimationStore::new(),
            atom,
            slide_protocol,
            slide_length,
        };
        effect.reconfigure(config);
        effect
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn config(&self) -> &SlideConfig {
        &self.config
    }

    /// The property atom in use, `None` without a legacy connection.
    pub fn atom(&self) -> Option<PropertyAtom> {
        self.atom
    }

    /// Default slide length for windows that did not pick one.
    pub fn slide_length(&self) -> f32 {
        self.slide_length
    }

    /// Default appear duration after speed scaling.
    pub fn fade_in_duration(&self) -> Duration {
        self.fade_in
    }

    /// Default close duration after speed scaling.
    pub fn fade_out_duration(&self) -> Duration {
        self.fade_out
    }

    /// Apply a new configuration.
    ///
    /// Records without client-chosen durations take the new defaults and
    /// running timelines are rescaled to their record's duration.
    pub fn reconfigure(&mut self, config: SlideConfig) {
        let _span = PerfSpan::new(span_names::RECONFIGURE);
        self.fade_in = config.fade_in_duration();
        self.fade_out = config.fade_out_duration();
        self.config = config;

        let (fade_in, fade_out) = (self.fade_in, self.fade_out);
        for record in self.store.records_mut() {
            record.adopt_default_durations(fade_in, fade_out);
        }

        let durations: Vec<(WindowId, AnimationState)> = self
            .store
            .timelines_mut()
            .map(|(id, state, _)| (id, state))
            .collect();
        for (id, state) in durations {
            let record = self.store.record(id).copied();
            let duration = match (state, record) {
                (AnimationState::Appearing, Some(record)) => record.fade_in,
                (AnimationState::Appearing, None) => fade_in,
                (_, Some(record)) => record.fade_out,
                (_, None) => fade_out,
            };
            let timeline = match state {
                AnimationState::Appearing => self.store.appearing_mut(id),
                _ => self.store.disappearing_mut(id).map(|entry| &mut entry.timeline),
            };
            if let Some(timeline) = timeline {
                timeline.set_duration(duration);
            }
        }

        tracing::info!(
            target: targets::CONFIG,
            fade_in_ms = fade_in.as_millis() as u64,
            fade_out_ms = fade_out.as_millis() as u64,
            speed = self.config.animation_speed,
            "sliding popups reconfigured"
        );
    }

    /// Current animation of `window`.
    pub fn animation_state(&self, window: WindowId) -> AnimationState {
        self.store.animation_state(window)
    }

    /// The slide record of `window`, if it asked to slide.
    pub fn record(&self, window: WindowId) -> Option<&SlideRecord> {
        self.store.record(window)
    }

    /// Flags the effect has set on `window`.
    pub fn flags(&self, window: WindowId) -> WindowFlags {
        self.store.flags(window)
    }

    /// Whether the effect forced background contrast on `window` for its
    /// current appear animation.
    pub fn is_contrast_forced(&self, window: WindowId) -> bool {
        self.store.is_contrast_forced(window)
    }

    /// Eased timeline value of the running animation of `window`.
    pub fn progress(&self, window: WindowId) -> Option<f32> {
        self.store
            .appearing(window)
            .or_else(|| self.store.disappearing(window).map(|entry| &entry.timeline))
            .map(Timeline::value)
    }

    fn set_flags(&mut self, window: &WindowHandle, f: impl FnOnce(&mut WindowFlags)) {
        if let Some(flags) = self.store.update_flags(window.id(), f) {
            self.host.window_flags_changed(window, flags);
        }
    }

    fn slide_timeline(duration: Duration) -> Timeline {
        let mut timeline = Timeline::new(duration);
        timeline.set_direction(TimelineDirection::Forward);
        timeline.set_easing(Easing::InOutSine);
        timeline
    }

    /// Resolve and store the record for `window`, then claim its close animation.
    fn apply_slide_fields(&mut self, window: &WindowHandle, raw: RawSlideFields) {
        let screen = self.host.screen_area(window);
        let record = resolve_record(raw, &window.geometry(), &screen, self.fade_in, self.fade_out);
        tracing::debug!(target: targets::PROPERTY, window = window.id().as_raw(), ?record, "slide record updated");
        self.store.set_record(window.id(), record);

        let grab = self.host.animations_supported();
        self.set_flags(window, |flags| flags.closed_grab |= grab);
    }

    fn geometry_for(&self, window: &WindowHandle) -> Option<SlideGeometry> {
        let record = self.store.record(window.id())?;
        Some(SlideGeometry {
            edge: record.edge,
            window: window.expanded_geometry(),
            screen: self.host.screen_area(window),
            start_offset: record.start_offset,
            slide_length: record.travel(self.slide_length),
        })
    }

    /// Start the appear animation of `window`.
    fn start_for_show(&mut self, window: &WindowHandle) {
        let id = window.id();
        if !window.is_on_current_desktop() || self.store.appearing(id).is_some() {
            return;
        }
        let Some(record) = self.store.record(id).copied() else {
            return;
        };

        if !self.store.flags(id).force_background_contrast && window.has_alpha() {
            self.set_flags(window, |flags| flags.force_background_contrast = true);
            self.store.mark_contrast_forced(id);
        }

        self.store.start_appearing(id, Self::slide_timeline(record.fade_in));

        let grab = self.host.animations_supported();
        self.set_flags(window, |flags| {
            flags.added_grab |= grab;
            flags.closed_grab |= grab;
            flags.force_blur = true;
        });
        self.host.add_repaint_full(window);

        slide_debug!(window = id.as_raw(), edge = ?record.edge, "slide in started");
    }

    /// Start the close animation of `window`.
    fn slide_out(&mut self, window: &WindowHandle) {
        let id = window.id();
        if window.is_on_current_desktop() && !window.is_minimized() && self.store.has_record(id) {
            self.start_for_close(window);
        }
        self.store.unmark_contrast_forced(id);
    }

    fn start_for_close(&mut self, window: &WindowHandle) {
        let id = window.id();
        if let Some(entry) = self.store.disappearing_mut(id) {
            // A window hidden while alive can be destroyed mid slide-out.
            if window.is_deleted() && !entry.holds_window() {
                entry.attach_hold(window.hold());
            }
            tracing::trace!(target: targets::EFFECT, window = id.as_raw(), "already sliding out");
            return;
        }
        let Some(record) = self.store.record(id).copied() else {
            return;
        };

        let hold = window.is_deleted().then(|| window.hold());
        self.store.start_disappearing(id, Self::slide_timeline(record.fade_out), hold);

        let grab = self.host.animations_supported();
        let alpha = window.has_alpha();
        self.set_flags(window, |flags| {
            flags.closed_grab |= grab;
            flags.force_blur = true;
            flags.force_background_contrast |= alpha;
        });
        self.host.add_repaint_full(window);

        slide_debug!(window = id.as_raw(), edge = ?record.edge, deleted = window.is_deleted(), "slide out started");
    }

    fn finish_appearing(&mut self, window: &WindowHandle) {
        let id = window.id();
        self.store.finish_appearing(id);

        let contrast_ours = self.store.is_contrast_forced(id)
            && window.has_alpha()
            && self.store.flags(id).force_background_contrast;
        if contrast_ours {
            self.store.unmark_contrast_forced(id);
        }
        self.set_flags(window, |flags| {
            flags.force_blur = false;
            if contrast_ours {
                flags.force_background_contrast = false;
            }
        });
        tracing::trace!(target: targets::EFFECT, window = id.as_raw(), "slide in finished");
    }

    fn finish_disappearing(&mut self, window: &WindowHandle) {
        let id = window.id();
        // Dropping the entry releases any hold on the window.
        if let Some(entry) = self.store.finish_disappearing(id) {
            tracing::trace!(
                target: targets::EFFECT,
                window = id.as_raw(),
                held = entry.holds_window(),
                "slide out finished"
            );
            self.host.add_repaint_full(window);
        }
    }
}

impl<H: EffectsHost> Effect for SlidingPopups<H> {
    fn window_added(&mut self, window: &WindowHandle) {
        if let Some(atom) = self.atom {
            self.property_notify(Some(window), atom);
        }
        if window.has_surface() {
            self.slide_attribute_changed(Some(window));
        }
        self.start_for_show(window);
    }

    fn window_shown(&mut self, window: &WindowHandle) {
        self.start_for_show(window);
    }

    fn window_closed(&mut self, window: &WindowHandle) {
        self.slide_out(window);
    }

    fn window_hidden(&mut self, window: &WindowHandle) {
        self.slide_out(window);
    }

    fn window_deleted(&mut self, window: &WindowHandle) {
        self.store.remove_window(window.id());
        self.host.add_repaint(window.expanded_geometry());
        tracing::trace!(target: targets::EFFECT, window = window.id().as_raw(), "window forgotten");
    }

    fn property_notify(&mut self, window: Option<&WindowHandle>, atom: PropertyAtom) {
        let Some(window) = window else {
            return;
        };
        if self.atom != Some(atom) {
            return;
        }

        let bytes = self.host.read_property(window, atom);
        match RawSlideFields::from_property_bytes(&bytes) {
            Some(raw) => self.apply_slide_fields(window, raw),
            None => {
                self.set_flags(window, |flags| flags.closed_grab = false);
                self.store.clear_animation(window.id());
                tracing::debug!(target: targets::PROPERTY, window = window.id().as_raw(), "slide property removed");
            }
        }
    }

    fn slide_attribute_changed(&mut self, window: Option<&WindowHandle>) {
        let Some(window) = window else {
            return;
        };
        if !self.slide_protocol || !window.has_surface() {
            return;
        }
        if let Some(attribute) = window.slide_attribute() {
            self.apply_slide_fields(window, RawSlideFields::from(attribute));
        }
    }

    fn connection_changed(&mut self) {
        self.atom = self.host.announce_support_property(SLIDE_PROPERTY_NAME);
        tracing::debug!(target: targets::PROPERTY, atom = self.atom.map(PropertyAtom::as_raw), "slide property re-announced");
    }

    fn pre_paint_window(&mut self, window: &WindowHandle, data: &mut WindowPrePaintData, elapsed: Duration) {
        let _span = PerfSpan::new(span_names::PRE_PAINT);
        let id = window.id();

        let mut progress = None;
        if let Some(timeline) = self.store.appearing_mut(id) {
            timeline.update(elapsed);
            if timeline.done() {
                self.finish_appearing(window);
            } else {
                data.set_transformed();
                progress = Some(1.0 - timeline.value());
            }
        } else if let Some(entry) = self.store.disappearing_mut(id) {
            entry.timeline.update(elapsed);
            if entry.timeline.done() {
                self.finish_disappearing(window);
            } else {
                data.set_transformed();
                data.enable_painting(PaintDisabled::CLOSED | PaintDisabled::DELETED);
                progress = Some(entry.timeline.value());
            }
        }

        let Some(progress) = progress else {
            return;
        };
        if let Some(geometry) = self.geometry_for(window) {
            if geometry.needs_clip() {
                data.quads = geometry.clip_quads(&data.quads, progress);
            }
        }
    }

    fn paint_window(&mut self, window: &WindowHandle, region: &mut Region, data: &mut WindowPaintData) {
        let _span = PerfSpan::new(span_names::PAINT);
        let id = window.id();
        let progress = match self.store.animation_state(id) {
            AnimationState::Appearing => self.store.appearing(id).map(|t| 1.0 - t.value()),
            AnimationState::Disappearing => self.store.disappearing(id).map(|e| e.timeline.value()),
            AnimationState::Idle => None,
        };
        let Some(progress) = progress else {
            return;
        };
        if let Some(geometry) = self.geometry_for(window) {
            geometry.apply_paint(progress, data, region);
        }
    }

    fn post_paint_window(&mut self, window: &WindowHandle) {
        if self.store.animation_state(window.id()) != AnimationState::Idle {
            self.host.add_repaint_full(window);
        }
    }

    fn is_active(&self) -> bool {
        self.store.is_animating()
    }
}
