//! Paint regions.
//!
//! A [`Region`] is the set of screen pixels a window pass is allowed to
//! touch. It is kept as a list of rectangles; overlapping rectangles are
//! allowed and only matter for [`Region::area`], which is an upper bound.

use crate::types::Rect;

/// A set of screen rectangles.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Region {
    rects: Vec<Rect>,
}

impl Region {
    /// The empty region.
    pub fn new() -> Self {
        Self::default()
    }

    /// A region covering a single rectangle. Empty rectangles give an empty region.
    pub fn from_rect(rect: Rect) -> Self {
        let mut region = Self::new();
        region.add_rect(rect);
        region
    }

    /// Add a rectangle to the region.
    pub fn add_rect(&mut self, rect: Rect) {
        if rect.is_empty() {
            return;
        }
        self.rects.push(rect);
    }

    /// The rectangles making up the region.
    pub fn rects(&self) -> &[Rect] {
        &self.rects
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    /// Bounding box of the region.
    pub fn bounding_rect(&self) -> Option<Rect> {
        self.rects.iter().copied().reduce(|acc, rect| acc.union(&rect))
    }

    /// The part of the region inside `clip`.
    pub fn intersected(&self, clip: &Rect) -> Region {
        Region {
            rects: self
                .rects
                .iter()
                .filter_map(|rect| rect.intersect(clip))
                .collect(),
        }
    }

    /// Sum of the rectangle areas.
    pub fn area(&self) -> f32 {
        self.rects.iter().map(|r| r.width() * r.height()).sum()
    }
}

impl From<Rect> for Region {
    fn from(rect: Rect) -> Self {
        Self::from_rect(rect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rect_gives_empty_region() {
        let region = Region::from_rect(Rect::new(10.0, 10.0, 0.0, 20.0));
        assert!(region.is_empty());
        assert!(region.bounding_rect().is_none());
    }

    #[test]
    fn test_bounding_rect() {
        let mut region = Region::from_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        region.add_rect(Rect::new(20.0, 20.0, 10.0, 10.0));
        assert_eq!(region.rects().len(), 2);
        assert_eq!(region.bounding_rect(), Some(Rect::new(0.0, 0.0, 30.0, 30.0)));
        assert_eq!(region.area(), 200.0);
    }

    #[test]
    fn test_intersected() {
        let region = Region::from_rect(Rect::new(0.0, 0.0, 100.0, 100.0));
        let clipped = region.intersected(&Rect::new(50.0, 0.0, 100.0, 40.0));
        assert_eq!(clipped.rects(), &[Rect::new(50.0, 0.0, 50.0, 40.0)]);

        let outside = region.intersected(&Rect::new(200.0, 200.0, 10.0, 10.0));
        assert!(outside.is_empty());
    }
}
