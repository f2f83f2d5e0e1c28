//! Per-frame paint data handed between the compositor and effects.
//!
//! Each frame the compositor walks its windows three times: pre-paint
//! (decide what will be drawn), paint (draw it) and post-paint (schedule the
//! next frame). The pre-paint pass works on [`WindowPrePaintData`], the paint
//! pass on [`WindowPaintData`] plus the window's paint [`Region`](crate::Region).

use glam::Vec2;

use crate::quad::WindowQuadList;

/// Reasons the compositor would skip painting a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaintDisabled(u8);

impl PaintDisabled {
    /// Nothing blocks painting.
    pub const NONE: Self = Self(0);
    /// The window has been closed or hidden.
    pub const CLOSED: Self = Self(1);
    /// The window has been destroyed and only a placeholder remains.
    pub const DELETED: Self = Self(1 << 1);
    /// The window is minimized.
    pub const MINIMIZED: Self = Self(1 << 2);

    #[inline]
    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn insert(&mut self, other: Self) {
        self.0 |= other.0;
    }

    #[inline]
    pub fn remove(&mut self, other: Self) {
        self.0 &= !other.0;
    }
}

impl std::ops::BitOr for PaintDisabled {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// Data for the pre-paint pass of one window.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WindowPrePaintData {
    /// Quads that will be drawn, in window-local coordinates.
    pub quads: WindowQuadList,
    /// Why painting would be skipped, if at all.
    pub disabled: PaintDisabled,
    transformed: bool,
}

impl WindowPrePaintData {
    /// Pre-paint data for a window drawn with the given quads.
    pub fn new(quads: WindowQuadList) -> Self {
        Self {
            quads,
            disabled: PaintDisabled::NONE,
            transformed: false,
        }
    }

    /// Tell the compositor the window will be drawn away from its geometry,
    /// so it cannot take the untransformed fast path.
    pub fn set_transformed(&mut self) {
        self.transformed = true;
    }

    /// Whether an effect asked for a transformed paint.
    #[inline]
    pub fn is_transformed(&self) -> bool {
        self.transformed
    }

    /// Lift the given paint blockers.
    pub fn enable_painting(&mut self, reasons: PaintDisabled) {
        self.disabled.remove(reasons);
    }

    /// Whether the window will be painted at all.
    #[inline]
    pub fn will_paint(&self) -> bool {
        self.disabled.is_empty()
    }
}

/// Data for the paint pass of one window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowPaintData {
    opacity: f32,
    translation: Vec2,
}

impl Default for WindowPaintData {
    fn default() -> Self {
        Self {
            opacity: 1.0,
            translation: Vec2::ZERO,
        }
    }
}

impl WindowPaintData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current opacity in `0.0..=1.0`.
    #[inline]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    /// Multiply the opacity, clamping the result to `0.0..=1.0`.
    pub fn multiply_opacity(&mut self, factor: f32) {
        self.opacity = (self.opacity * factor).clamp(0.0, 1.0);
    }

    /// Offset the window is drawn at, relative to its geometry.
    #[inline]
    pub fn translation(&self) -> Vec2 {
        self.translation
    }

    /// Add to the paint offset.
    pub fn translate(&mut self, dx: f32, dy: f32) {
        self.translation += Vec2::new(dx, dy);
    }
}
