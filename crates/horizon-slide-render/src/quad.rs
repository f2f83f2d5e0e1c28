//! Window quads.
//!
//! The compositor draws a window as a list of axis-aligned quads in
//! window-local coordinates (the window's expanded geometry starts at 0, 0).
//! Effects that want to hide part of a window split the quads along a line
//! and drop the pieces on one side.

use crate::types::Rect;

/// What part of the window a quad shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowQuadKind {
    /// Client contents.
    #[default]
    Contents,
    /// Server-side decoration.
    Decoration,
    /// Drop shadow outside the frame.
    Shadow,
}

/// A single drawable quad in window-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowQuad {
    rect: Rect,
    kind: WindowQuadKind,
}

impl WindowQuad {
    /// Create a quad covering `rect`.
    pub fn new(rect: Rect, kind: WindowQuadKind) -> Self {
        Self { rect, kind }
    }

    /// The area covered by the quad.
    #[inline]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The part of the window this quad draws.
    #[inline]
    pub fn kind(&self) -> WindowQuadKind {
        self.kind
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.rect.left()
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.rect.top()
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.rect.right()
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.rect.bottom()
    }

    /// Split into the parts left and right of `x`.
    ///
    /// Either side is `None` when the quad lies entirely on the other one.
    pub fn split_at_x(&self, x: f32) -> (Option<WindowQuad>, Option<WindowQuad>) {
        if x <= self.left() {
            return (None, Some(*self));
        }
        if x >= self.right() {
            return (Some(*self), None);
        }
        let r = self.rect;
        let left = Rect::new(r.left(), r.top(), x - r.left(), r.height());
        let right = Rect::new(x, r.top(), r.right() - x, r.height());
        (
            Some(Self::new(left, self.kind)),
            Some(Self::new(right, self.kind)),
        )
    }

    /// Split into the parts above and below `y`.
    pub fn split_at_y(&self, y: f32) -> (Option<WindowQuad>, Option<WindowQuad>) {
        if y <= self.top() {
            return (None, Some(*self));
        }
        if y >= self.bottom() {
            return (Some(*self), None);
        }
        let r = self.rect;
        let top = Rect::new(r.left(), r.top(), r.width(), y - r.top());
        let bottom = Rect::new(r.left(), y, r.width(), r.bottom() - y);
        (
            Some(Self::new(top, self.kind)),
            Some(Self::new(bottom, self.kind)),
        )
    }
}

/// The quads making up one window for one frame.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WindowQuadList {
    quads: Vec<WindowQuad>,
}

impl WindowQuadList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// A list with a single contents quad covering `size` at the origin.
    pub fn covering(width: f32, height: f32) -> Self {
        Self {
            quads: vec![WindowQuad::new(
                Rect::new(0.0, 0.0, width, height),
                WindowQuadKind::Contents,
            )],
        }
    }

    pub fn push(&mut self, quad: WindowQuad) {
        self.quads.push(quad);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.quads.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.quads.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, WindowQuad> {
        self.quads.iter()
    }

    /// Split every quad crossing the vertical line at `x`.
    pub fn split_at_x(&self, x: f32) -> WindowQuadList {
        let quads = self
            .quads
            .iter()
            .flat_map(|quad| {
                let (left, right) = quad.split_at_x(x);
                left.into_iter().chain(right)
            })
            .collect();
        Self { quads }
    }

    /// Split every quad crossing the horizontal line at `y`.
    pub fn split_at_y(&self, y: f32) -> WindowQuadList {
        let quads = self
            .quads
            .iter()
            .flat_map(|quad| {
                let (top, bottom) = quad.split_at_y(y);
                top.into_iter().chain(bottom)
            })
            .collect();
        Self { quads }
    }

    /// Keep only the quads for which `keep` returns true.
    pub fn retain(&mut self, keep: impl FnMut(&WindowQuad) -> bool) {
        self.quads.retain(keep);
    }

    /// Bounding box of all quads, `None` when empty.
    pub fn bounding_rect(&self) -> Option<Rect> {
        self.quads
            .iter()
            .map(WindowQuad::rect)
            .reduce(|acc, rect| acc.union(&rect))
    }
}

impl From<Vec<WindowQuad>> for WindowQuadList {
    fn from(quads: Vec<WindowQuad>) -> Self {
        Self { quads }
    }
}

impl<'a> IntoIterator for &'a WindowQuadList {
    type Item = &'a WindowQuad;
    type IntoIter = std::slice::Iter<'a, WindowQuad>;

    fn into_iter(self) -> Self::IntoIter {
        self.quads.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_quad_at_x() {
        let quad = WindowQuad::new(Rect::new(0.0, 0.0, 100.0, 50.0), WindowQuadKind::Contents);
        let (left, right) = quad.split_at_x(30.0);
        assert_eq!(left.unwrap().rect(), Rect::new(0.0, 0.0, 30.0, 50.0));
        assert_eq!(right.unwrap().rect(), Rect::new(30.0, 0.0, 70.0, 50.0));

        let (left, right) = quad.split_at_x(-10.0);
        assert!(left.is_none());
        assert_eq!(right.unwrap(), quad);

        let (left, right) = quad.split_at_x(100.0);
        assert_eq!(left.unwrap(), quad);
        assert!(right.is_none());
    }

    #[test]
    fn test_split_quad_at_y_keeps_kind() {
        let quad = WindowQuad::new(Rect::new(0.0, 0.0, 100.0, 50.0), WindowQuadKind::Shadow);
        let (top, bottom) = quad.split_at_y(20.0);
        let top = top.unwrap();
        let bottom = bottom.unwrap();
        assert_eq!(top.bottom(), 20.0);
        assert_eq!(bottom.top(), 20.0);
        assert_eq!(bottom.kind(), WindowQuadKind::Shadow);
    }

    #[test]
    fn test_list_split_and_filter() {
        let mut list: WindowQuadList = vec![
            WindowQuad::new(Rect::new(0.0, 0.0, 50.0, 50.0), WindowQuadKind::Decoration),
            WindowQuad::new(Rect::new(50.0, 0.0, 50.0, 50.0), WindowQuadKind::Contents),
        ]
        .into();

        list = list.split_at_x(75.0);
        assert_eq!(list.len(), 3);

        list.retain(|quad| quad.left() >= 75.0);
        assert_eq!(list.len(), 1);
        assert_eq!(list.bounding_rect(), Some(Rect::new(75.0, 0.0, 25.0, 50.0)));
    }

    #[test]
    fn test_covering() {
        let list = WindowQuadList::covering(200.0, 100.0);
        assert_eq!(list.len(), 1);
        assert_eq!(list.bounding_rect(), Some(Rect::new(0.0, 0.0, 200.0, 100.0)));
        assert!(WindowQuadList::new().bounding_rect().is_none());
    }
}
