//! Slide geometry: where to cut a sliding window and where to draw it.
//!
//! `progress` below is always the visual progress: 0.0 is the window at rest
//! and 1.0 is the window fully slid off towards its edge. An appearing window
//! runs from 1.0 down to 0.0, a disappearing one from 0.0 up to 1.0.

use horizon_slide_render::{Rect, Region, WindowPaintData, WindowQuadList};

use crate::record::SlideEdge;

/// The geometry of one window's slide for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideGeometry {
    pub edge: SlideEdge,
    /// Expanded window geometry in screen coordinates.
    pub window: Rect,
    /// Area of the screen the window is on.
    pub screen: Rect,
    /// Resolved start offset from the screen edge.
    pub start_offset: f32,
    /// Requested slide length before limiting to the window extent.
    pub slide_length: f32,
}

impl SlideGeometry {
    /// Extent of the window along the slide axis.
    #[inline]
    pub fn extent(&self) -> f32 {
        if self.edge.is_horizontal() {
            self.window.width()
        } else {
            self.window.height()
        }
    }

    /// How far the window actually moves: the slide length, at most the extent.
    #[inline]
    pub fn distance(&self) -> f32 {
        self.slide_length.min(self.extent())
    }

    /// Whether part of the window must be cut off while sliding.
    ///
    /// With a zero offset the window slides out from under the screen edge
    /// and the screen itself hides the moving part.
    #[inline]
    pub fn needs_clip(&self) -> bool {
        self.start_offset > 0.0
    }

    /// Window-local coordinate of the line past which quads are hidden.
    pub fn split_point(&self, progress: f32) -> f32 {
        let moved = self.distance() * progress;
        let (w, s) = (&self.window, &self.screen);
        match self.edge {
            SlideEdge::Left => s.left() + self.start_offset - w.left() + moved,
            SlideEdge::Top => s.top() + self.start_offset - w.top() + moved,
            SlideEdge::Right => s.right() - w.left() - self.start_offset - moved,
            SlideEdge::Bottom => s.bottom() - w.top() - self.start_offset - moved,
        }
    }

    /// Drop the parts of `quads` that have slid past the start line.
    pub fn clip_quads(&self, quads: &WindowQuadList, progress: f32) -> WindowQuadList {
        let split = self.split_point(progress);
        match self.edge {
            SlideEdge::Left => {
                let mut clipped = quads.split_at_x(split);
                clipped.retain(|quad| quad.left() >= split);
                clipped
            }
            SlideEdge::Top => {
                let mut clipped = quads.split_at_y(split);
                clipped.retain(|quad| quad.top() >= split);
                clipped
            }
            SlideEdge::Right => {
                let mut clipped = quads.split_at_x(split);
                clipped.retain(|quad| quad.right() <= split);
                clipped
            }
            SlideEdge::Bottom => {
                let mut clipped = quads.split_at_y(split);
                clipped.retain(|quad| quad.bottom() <= split);
                clipped
            }
        }
    }

    /// Paint offset at `progress`, pointing towards the edge.
    pub fn translation(&self, progress: f32) -> (f32, f32) {
        let moved = self.distance() * progress;
        match self.edge {
            SlideEdge::Left => (-moved, 0.0),
            SlideEdge::Top => (0.0, -moved),
            SlideEdge::Right => (moved, 0.0),
            SlideEdge::Bottom => (0.0, moved),
        }
    }

    /// Opacity factor at `progress`.
    ///
    /// A slide shorter than the window would leave part of it visible at
    /// the end, so such windows also fade.
    pub fn opacity(&self, progress: f32) -> f32 {
        if self.slide_length < self.extent() {
            1.0 - progress
        } else {
            1.0
        }
    }

    /// The screen area the window may be drawn in, from the start line to
    /// the far side of the window.
    pub fn paint_rect(&self) -> Rect {
        let (w, s) = (&self.window, &self.screen);
        let extent = self.extent();
        match self.edge {
            SlideEdge::Left => {
                let split = (s.left() + self.start_offset - w.left()).clamp(0.0, extent);
                Rect::new(w.left() + split, w.top(), w.width() - split, w.height())
            }
            SlideEdge::Top => {
                let split = (s.top() + self.start_offset - w.top()).clamp(0.0, extent);
                Rect::new(w.left(), w.top() + split, w.width(), w.height() - split)
            }
            SlideEdge::Right => {
                let split = (s.right() - w.left() - self.start_offset).clamp(0.0, extent);
                Rect::new(w.left(), w.top(), split, w.height())
            }
            SlideEdge::Bottom => {
                let split = (s.bottom() - w.top() - self.start_offset).clamp(0.0, extent);
                Rect::new(w.left(), w.top(), w.width(), split)
            }
        }
    }

    /// Apply the slide at `progress` to a paint pass.
    pub fn apply_paint(&self, progress: f32, data: &mut WindowPaintData, region: &mut Region) {
        data.multiply_opacity(self.opacity(progress));
        let (dx, dy) = self.translation(progress);
        data.translate(dx, dy);
        *region = Region::from_rect(self.paint_rect());
    }
}
