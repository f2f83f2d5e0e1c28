//! The interface between a compositor's event loop and an effect.

use std::time::Duration;

use horizon_slide_render::{Region, WindowPaintData, WindowPrePaintData};

use crate::host::PropertyAtom;
use crate::window::WindowHandle;

/// Window lifecycle and repaint notifications delivered to an effect.
///
/// The compositor calls these from its event loop. Lifecycle methods default
/// to doing nothing; the paint methods default to leaving the data untouched.
pub trait Effect {
    /// A window was mapped for the first time.
    fn window_added(&mut self, _window: &WindowHandle) {}

    /// A previously hidden window became visible again.
    fn window_shown(&mut self, _window: &WindowHandle) {}

    /// A window was closed. It may already be a deletion-pending placeholder.
    fn window_closed(&mut self, _window: &WindowHandle) {}

    /// A window was hidden without being destroyed.
    fn window_hidden(&mut self, _window: &WindowHandle) {}

    /// A window is being reaped for good.
    fn window_deleted(&mut self, _window: &WindowHandle) {}

    /// A legacy window property changed.
    fn property_notify(&mut self, _window: Option<&WindowHandle>, _atom: PropertyAtom) {}

    /// The native slide attribute of a window's surface changed.
    fn slide_attribute_changed(&mut self, _window: Option<&WindowHandle>) {}

    /// The legacy display connection was re-established.
    fn connection_changed(&mut self) {}

    /// First pass of a frame. `elapsed` is the time since the previous frame.
    fn pre_paint_window(&mut self, _window: &WindowHandle, _data: &mut WindowPrePaintData, _elapsed: Duration) {}

    /// Second pass of a frame.
    fn paint_window(&mut self, _window: &WindowHandle, _region: &mut Region, _data: &mut WindowPaintData) {}

    /// Last pass of a frame.
    fn post_paint_window(&mut self, _window: &WindowHandle) {}

    /// Whether the effect currently has work to do.
    fn is_active(&self) -> bool;
}
