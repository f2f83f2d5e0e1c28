//! Animation state for every window the effect knows about.
//!
//! A window is in at most one of the appearing and disappearing tables at a
//! time; [`AnimationStore`] only exposes transitions that keep it that way.
//! A disappearing entry owns the [`WindowHold`] taken for it, so removing the
//! entry on any path releases the hold.

use horizon_slide_core::Timeline;
use slotmap::SecondaryMap;

use crate::host::WindowFlags;
use crate::record::SlideRecord;
use crate::window::{WindowHold, WindowId};

/// Which animation a window is playing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Appearing,
    Disappearing,
}

/// A running close animation.
#[derive(Debug)]
pub struct Disappearing {
    pub timeline: Timeline,
    hold: Option<WindowHold>,
}

impl Disappearing {
    /// Whether this animation keeps a deleted window alive.
    pub fn holds_window(&self) -> bool {
        self.hold.is_some()
    }

    /// Attach `hold` unless the animation already holds the window.
    ///
    /// Returns whether the hold was kept.
    pub fn attach_hold(&mut self, hold: WindowHold) -> bool {
        if self.hold.is_some() {
            return false;
        }
        self.hold = Some(hold);
        true
    }
}

#[derive(Debug, Default)]
pub struct AnimationStore {
    records: SecondaryMap<WindowId, SlideRecord>,
    appearing: SecondaryMap<WindowId, Timeline>,
    disappearing: SecondaryMap<WindowId, Disappearing>,
    flags: SecondaryMap<WindowId, WindowFlags>,
    contrast_forced: SecondaryMap<WindowId, ()>,
}

impl AnimationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, id: WindowId) -> Option<&SlideRecord> {
        self.records.get(id)
    }

    pub fn set_record(&mut self, id: WindowId, record: SlideRecord) {
        self.records.insert(id, record);
    }

    pub fn has_record(&self, id: WindowId) -> bool {
        self.records.contains_key(id)
    }

    pub fn records_mut(&mut self) -> impl Iterator<Item = &mut SlideRecord> {
        self.records.values_mut()
    }

    pub fn animation_state(&self, id: WindowId) -> AnimationState {
        if self.appearing.contains_key(id) {
            AnimationState::Appearing
        } else if self.disappearing.contains_key(id) {
            AnimationState::Disappearing
        } else {
            AnimationState::Idle
        }
    }

    pub fn appearing(&self, id: WindowId) -> Option<&Timeline> {
        self.appearing.get(id)
    }

    pub fn appearing_mut(&mut self, id: WindowId) -> Option<&mut Timeline> {
        self.appearing.get_mut(id)
    }

    pub fn disappearing(&self, id: WindowId) -> Option<&Disappearing> {
        self.disappearing.get(id)
    }

    pub fn disappearing_mut(&mut self, id: WindowId) -> Option<&mut Disappearing> {
        self.disappearing.get_mut(id)
    }

    /// Start an appear animation, cancelling any close animation.
    pub fn start_appearing(&mut self, id: WindowId, timeline: Timeline) {
        self.disappearing.remove(id);
        self.appearing.insert(id, timeline);
    }

    /// Start a close animation, cancelling any appear animation.
    pub fn start_disappearing(&mut self, id: WindowId, timeline: Timeline, hold: Option<WindowHold>) {
        self.appearing.remove(id);
        self.disappearing.insert(id, Disappearing { timeline, hold });
    }

    pub fn finish_appearing(&mut self, id: WindowId) -> Option<Timeline> {
        self.appearing.remove(id)
    }

    pub fn finish_disappearing(&mut self, id: WindowId) -> Option<Disappearing> {
        self.disappearing.remove(id)
    }

    /// Iterate all running timelines, appearing first.
    pub fn timelines_mut(&mut self) -> impl Iterator<Item = (WindowId, AnimationState, &mut Timeline)> {
        let appearing = self
            .appearing
            .iter_mut()
            .map(|(id, timeline)| (id, AnimationState::Appearing, timeline));
        let disappearing = self
            .disappearing
            .iter_mut()
            .map(|(id, entry)| (id, AnimationState::Disappearing, &mut entry.timeline));
        appearing.chain(disappearing)
    }

    /// Whether any window is animating.
    pub fn is_animating(&self) -> bool {
        !self.appearing.is_empty() || !self.disappearing.is_empty()
    }

    pub fn flags(&self, id: WindowId) -> WindowFlags {
        self.flags.get(id).copied().unwrap_or_default()
    }

    /// Change the flags of `id`, returning the new value when anything changed.
    pub fn update_flags(&mut self, id: WindowId, f: impl FnOnce(&mut WindowFlags)) -> Option<WindowFlags> {
        let before = self.flags(id);
        let mut after = before;
        f(&mut after);
        if after == before {
            return None;
        }
        if after == WindowFlags::default() {
            self.flags.remove(id);
        } else {
            self.flags.insert(id, after);
        }
        Some(after)
    }

    /// Remember that the effect forced background contrast on `id`.
    pub fn mark_contrast_forced(&mut self, id: WindowId) {
        self.contrast_forced.insert(id, ());
    }

    pub fn unmark_contrast_forced(&mut self, id: WindowId) -> bool {
        self.contrast_forced.remove(id).is_some()
    }

    pub fn is_contrast_forced(&self, id: WindowId) -> bool {
        self.contrast_forced.contains_key(id)
    }

    /// Forget the record and any animation of `id`. Flags are kept.
    pub fn clear_animation(&mut self, id: WindowId) {
        self.appearing.remove(id);
        self.disappearing.remove(id);
        self.records.remove(id);
    }

    /// Forget everything about `id`.
    pub fn remove_window(&mut self, id: WindowId) {
        self.clear_animation(id);
        self.flags.remove(id);
        self.contrast_forced.remove(id);
    }
}
