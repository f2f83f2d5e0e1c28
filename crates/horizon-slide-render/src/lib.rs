//! Geometry and paint data for Horizon Slide.
//!
//! This crate holds the types that pass between a compositor's repaint cycle
//! and an effect: rectangles, the quads a window is drawn with, paint
//! regions, and the per-frame pre-paint and paint records.
//!
//! # Clipping a window
//!
//! ```
//! use horizon_slide_render::{WindowPrePaintData, WindowQuadList};
//!
//! let mut data = WindowPrePaintData::new(WindowQuadList::covering(200.0, 100.0));
//!
//! // Hide everything left of x = 50.
//! data.quads = data.quads.split_at_x(50.0);
//! data.quads.retain(|quad| quad.left() >= 50.0);
//! data.set_transformed();
//!
//! assert_eq!(data.quads.bounding_rect().unwrap().left(), 50.0);
//! ```

mod paint;
mod quad;
mod region;
mod types;

pub use paint::{PaintDisabled, WindowPaintData, WindowPrePaintData};
pub use quad::{WindowQuad, WindowQuadKind, WindowQuadList};
pub use region::Region;
pub use types::{Point, Rect, Size};

// Re-export glam since paint translations are expressed with it
pub use glam;
