//! Host windows as seen by the effect.
//!
//! Windows belong to the compositor. The effect only ever sees a
//! [`WindowHandle`], a cheap shared handle onto the compositor's current view
//! of the window (geometry, desktop, minimized state, slide attribute).
//!
//! # Lifetime extension
//!
//! When a window is destroyed while it should still play its close
//! animation, the compositor keeps a placeholder around in the
//! [`WindowLifecycle::DeletionPending`] state. The effect takes a
//! [`WindowHold`] on such a placeholder: while any hold exists
//! [`WindowHandle::extra_holds`] is non-zero and the compositor must not
//! reap the placeholder. Dropping the hold releases it, so a hold can be
//! released exactly once no matter which path drops it.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use horizon_slide_core::logging::targets;
use horizon_slide_render::Rect;
use parking_lot::RwLock;
use slotmap::new_key_type;

use crate::record::SlideAttribute;

new_key_type! {
    /// A unique identifier for a compositor window.
    ///
    /// The compositor allocates these from its own window table; the effect
    /// uses them to key its side tables.
    pub struct WindowId;
}

impl WindowId {
    /// Convert the WindowId to a raw u64 value.
    #[inline]
    pub fn as_raw(self) -> u64 {
        use slotmap::Key;
        self.data().as_ffi()
    }

    /// Create a WindowId from a raw u64 value.
    ///
    /// This does not check that the window exists.
    #[inline]
    pub fn from_raw(raw: u64) -> Self {
        Self::from(slotmap::KeyData::from_ffi(raw))
    }
}

/// Whether a window is live or only kept around for its exit animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowLifecycle {
    /// The client window exists.
    #[default]
    Alive,
    /// The client window is gone; what remains is a placeholder that can still
    /// be painted.
    DeletionPending,
}

/// The compositor's view of a window.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowState {
    /// Frame geometry in screen coordinates.
    pub geometry: Rect,
    /// Geometry including shadows and other decoration overhang.
    pub expanded_geometry: Rect,
    /// Whether the window is on the desktop currently shown.
    pub on_current_desktop: bool,
    pub minimized: bool,
    /// Whether the window contents carry an alpha channel.
    pub has_alpha: bool,
    /// Whether the window is backed by a native protocol surface.
    pub has_surface: bool,
    pub lifecycle: WindowLifecycle,
    /// Slide request made through the native protocol, if any.
    pub slide_attribute: Option<SlideAttribute>,
}

impl WindowState {
    /// A live window on the current desktop with the given geometry.
    pub fn new(geometry: Rect) -> Self {
        Self {
            geometry,
            expanded_geometry: geometry,
            on_current_desktop: true,
            minimized: false,
            has_alpha: false,
            has_surface: false,
            lifecycle: WindowLifecycle::Alive,
            slide_attribute: None,
        }
    }
}

struct WindowInner {
    id: WindowId,
    state: RwLock<WindowState>,
    extra_holds: AtomicUsize,
}

/// A shared handle to a compositor window.
///
/// Cloning the handle is cheap and all clones observe the same state.
#[derive(Clone)]
pub struct WindowHandle {
    inner: Arc<WindowInner>,
}

impl WindowHandle {
    /// Create a handle for window `id`.
    pub fn new(id: WindowId, state: WindowState) -> Self {
        Self {
            inner: Arc::new(WindowInner {
                id,
                state: RwLock::new(state),
                extra_holds: AtomicUsize::new(0),
            }),
        }
    }

    #[inline]
    pub fn id(&self) -> WindowId {
        self.inner.id
    }

    /// A snapshot of the current state.
    pub fn state(&self) -> WindowState {
        self.inner.state.read().clone()
    }

    /// Modify the state. Used by the compositor side.
    pub fn update(&self, f: impl FnOnce(&mut WindowState)) {
        f(&mut self.inner.state.write());
    }

    pub fn geometry(&self) -> Rect {
        self.inner.state.read().geometry
    }

    pub fn expanded_geometry(&self) -> Rect {
        self.inner.state.read().expanded_geometry
    }

    pub fn is_on_current_desktop(&self) -> bool {
        self.inner.state.read().on_current_desktop
    }

    pub fn is_minimized(&self) -> bool {
        self.inner.state.read().minimized
    }

    pub fn has_alpha(&self) -> bool {
        self.inner.state.read().has_alpha
    }

    pub fn has_surface(&self) -> bool {
        self.inner.state.read().has_surface
    }

    pub fn slide_attribute(&self) -> Option<SlideAttribute> {
        self.inner.state.read().slide_attribute
    }

    pub fn lifecycle(&self) -> WindowLifecycle {
        self.inner.state.read().lifecycle
    }

    /// Whether only a deletion-pending placeholder is left.
    pub fn is_deleted(&self) -> bool {
        self.lifecycle() == WindowLifecycle::DeletionPending
    }

    /// Turn the window into a placeholder awaiting deletion.
    pub fn mark_deleted(&self) {
        self.update(|state| state.lifecycle = WindowLifecycle::DeletionPending);
    }

    /// Number of outstanding [`WindowHold`]s.
    ///
    /// The compositor must not reap a deletion-pending placeholder while this
    /// is non-zero.
    pub fn extra_holds(&self) -> usize {
        self.inner.extra_holds.load(Ordering::Acquire)
    }

    /// Take an extra hold on the window.
    pub fn hold(&self) -> WindowHold {
        let previous = self.inner.extra_holds.fetch_add(1, Ordering::AcqRel);
        tracing::trace!(target: targets::EFFECT, window = self.id().as_raw(), holds = previous + 1, "window hold acquired");
        WindowHold {
            window: self.clone(),
        }
    }

    /// Whether two handles refer to the same window.
    pub fn ptr_eq(&self, other: &WindowHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WindowHandle")
            .field("id", &self.inner.id)
            .field("extra_holds", &self.extra_holds())
            .field("state", &*self.inner.state.read())
            .finish()
    }
}

/// An extra hold keeping a window placeholder alive.
///
/// Released when dropped.
#[derive(Debug)]
pub struct WindowHold {
    window: WindowHandle,
}

impl WindowHold {
    /// The held window.
    pub fn window(&self) -> &WindowHandle {
        &self.window
    }
}

impl Drop for WindowHold {
    fn drop(&mut self) {
        let previous = self.window.inner.extra_holds.fetch_sub(1, Ordering::AcqRel);
        debug_assert!(previous > 0, "window hold released more often than taken");
        tracing::trace!(target: targets::EFFECT, window = self.window.id().as_raw(), holds = previous - 1, "window hold released");
    }
}
