//! The compositor side of the effect.

use horizon_slide_render::Rect;

use crate::window::WindowHandle;

/// Identifier of a window property negotiated with the compositor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PropertyAtom(u32);

impl PropertyAtom {
    /// Wrap a raw atom. Zero is the "no atom" value and gives `None`.
    pub fn new(raw: u32) -> Option<Self> {
        (raw != 0).then_some(Self(raw))
    }

    #[inline]
    pub fn as_raw(self) -> u32 {
        self.0
    }
}

/// Coordination flags the effect sets on a window for the rest of the
/// compositor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WindowFlags {
    /// Blur behind the window even if the client did not ask for it.
    pub force_blur: bool,
    /// Apply background contrast even if the client did not ask for it.
    pub force_background_contrast: bool,
    /// This effect claimed the window's appear animation; other effects skip it.
    pub added_grab: bool,
    /// This effect claimed the window's close animation; other effects skip it.
    pub closed_grab: bool,
}

/// Services the compositor provides to the effect.
///
/// Everything the effect needs from the outside world goes through this
/// trait, so it can be driven by a real compositor or a test double.
pub trait EffectsHost {
    /// Whether animations are enabled at all.
    fn animations_supported(&self) -> bool {
        true
    }

    /// Whether the native slide protocol is being served.
    fn slide_protocol_available(&self) -> bool {
        false
    }

    /// Register interest in the property called `name`.
    ///
    /// Returns `None` when there is no legacy display connection.
    fn announce_support_property(&mut self, name: &str) -> Option<PropertyAtom>;

    /// Raw contents of `atom` on `window`, empty when the property is unset.
    fn read_property(&self, window: &WindowHandle, atom: PropertyAtom) -> Vec<u8>;

    /// Full-screen area of the output `window` is on.
    fn screen_area(&self, window: &WindowHandle) -> Rect;

    /// Line height of the default font, used for the default slide length.
    fn font_line_height(&self) -> f32;

    /// Schedule a repaint of the whole window.
    fn add_repaint_full(&mut self, window: &WindowHandle);

    /// Schedule a repaint of a screen area.
    fn add_repaint(&mut self, area: Rect);

    /// Called whenever the effect changes the flags it set on `window`.
    fn window_flags_changed(&mut self, _window: &WindowHandle, _flags: WindowFlags) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_atom_is_none() {
        assert_eq!(PropertyAtom::new(0), None);
        assert_eq!(PropertyAtom::new(42).map(PropertyAtom::as_raw), Some(42));
    }
}
