//! Per-window slide requests.
//!
//! A client asks for a slide in one of two ways:
//!
//! - a legacy window property, a byte buffer of native-endian 32-bit fields
//!   `[start offset, edge, fade-in ms, fade-out ms, slide length]` where every
//!   field after the edge is optional, decoded by
//!   [`RawSlideFields::from_property_bytes`];
//! - a [`SlideAttribute`] on the window's native protocol surface, which only
//!   carries an offset and an edge.
//!
//! Both are turned into [`RawSlideFields`] and resolved into a
//! [`SlideRecord`] by the same [`resolve_record`] function.

use std::time::Duration;

use horizon_slide_core::logging::targets;
use horizon_slide_render::Rect;

/// Name under which the legacy slide property is announced.
pub const SLIDE_PROPERTY_NAME: &str = "_KDE_SLIDE";

const FIELD_SIZE: usize = std::mem::size_of::<u32>();

/// The screen edge a window slides in from and out to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SlideEdge {
    Left = 0,
    Top = 1,
    Right = 2,
    #[default]
    Bottom = 3,
}

impl SlideEdge {
    /// Decode the wire value. Unknown values fall back to [`SlideEdge::Bottom`].
    pub fn from_raw(raw: u32) -> Self {
        match raw {
            0 => SlideEdge::Left,
            1 => SlideEdge::Top,
            2 => SlideEdge::Right,
            3 => SlideEdge::Bottom,
            _ => SlideEdge::Bottom,
        }
    }

    #[inline]
    pub fn as_raw(self) -> u32 {
        self as u32
    }

    /// Whether the slide moves along the x axis.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, SlideEdge::Left | SlideEdge::Right)
    }

    /// Distance from the screen edge to the near side of `window`, never negative.
    pub fn distance_to_edge(self, window: &Rect, screen: &Rect) -> f32 {
        let distance = match self {
            SlideEdge::Left => window.left() - screen.left(),
            SlideEdge::Top => window.top() - screen.top(),
            SlideEdge::Right => screen.right() - window.right(),
            SlideEdge::Bottom => screen.bottom() - window.bottom(),
        };
        distance.max(0.0)
    }
}

/// Slide request attached to a native protocol surface.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SlideAttribute {
    pub edge: SlideEdge,
    /// Offset from the screen edge, negative when the client left it to the
    /// compositor.
    pub offset: i32,
}

impl SlideAttribute {
    pub fn new(edge: SlideEdge, offset: i32) -> Self {
        Self { edge, offset }
    }
}

/// Slide request fields as delivered, before defaults are applied.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RawSlideFields {
    /// Requested start offset, `None` to derive it from the geometry.
    pub start: Option<f32>,
    pub edge: SlideEdge,
    pub fade_in: Option<Duration>,
    pub fade_out: Option<Duration>,
    /// Custom slide length; `None` or zero picks the effect default.
    pub slide_length: Option<f32>,
}

impl RawSlideFields {
    /// Decode a legacy slide property.
    ///
    /// Returns `None` for an empty buffer, meaning the window opted out.
    /// Trailing bytes that do not make up a whole field are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use std::time::Duration;
    /// use horizon_slide::{RawSlideFields, SlideEdge};
    ///
    /// let bytes: Vec<u8> = [40u32, 1, 100].iter().flat_map(|f| f.to_ne_bytes()).collect();
    /// let fields = RawSlideFields::from_property_bytes(&bytes).unwrap();
    /// assert_eq!(fields.start, Some(40.0));
    /// assert_eq!(fields.edge, SlideEdge::Top);
    /// assert_eq!(fields.fade_out, Some(Duration::from_millis(100)));
    /// ```
    pub fn from_property_bytes(bytes: &[u8]) -> Option<Self> {
        if bytes.is_empty() {
            return None;
        }
        if bytes.len() % FIELD_SIZE != 0 {
            tracing::debug!(
                target: targets::PROPERTY,
                len = bytes.len(),
                "slide property length is not a multiple of the field size"
            );
        }

        let fields: Vec<u32> = bytes
            .chunks_exact(FIELD_SIZE)
            .map(bytemuck::pod_read_unaligned::<u32>)
            .collect();

        let mut raw = RawSlideFields::default();
        if let (Some(&start), Some(&edge)) = (fields.first(), fields.get(1)) {
            // The start offset travels as a signed value, -1 meaning unset.
            let start = start as i32;
            raw.start = (start >= 0).then_some(start as f32);
            raw.edge = SlideEdge::from_raw(edge);
        }
        if let Some(&fade_in) = fields.get(2) {
            let fade_out = fields.get(3).copied().unwrap_or(fade_in);
            raw.fade_in = Some(Duration::from_millis(u64::from(fade_in)));
            raw.fade_out = Some(Duration::from_millis(u64::from(fade_out)));
        }
        if let Some(&length) = fields.get(4) {
            raw.slide_length = Some(length as f32);
        }

        tracing::trace!(target: targets::PROPERTY, fields = fields.len(), ?raw, "decoded slide property");
        Some(raw)
    }
}

impl From<SlideAttribute> for RawSlideFields {
    fn from(attribute: SlideAttribute) -> Self {
        Self {
            start: (attribute.offset >= 0).then_some(attribute.offset as f32),
            edge: attribute.edge,
            fade_in: None,
            fade_out: None,
            slide_length: None,
        }
    }
}

/// A resolved slide request for one window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideRecord {
    pub edge: SlideEdge,
    /// Offset from the screen edge where the slide starts. Never negative and
    /// never less than the window's actual distance to that edge.
    pub start_offset: f32,
    /// Custom slide length, `None` for the effect default.
    pub slide_length: Option<f32>,
    pub fade_in: Duration,
    pub fade_out: Duration,
    /// Whether the client picked its own durations.
    pub custom_durations: bool,
}

impl SlideRecord {
    /// Slide length to use given the effect-wide default.
    #[inline]
    pub fn travel(&self, default_length: f32) -> f32 {
        self.slide_length.unwrap_or(default_length)
    }

    /// Replace the durations with new defaults unless the client chose its own.
    pub fn adopt_default_durations(&mut self, fade_in: Duration, fade_out: Duration) {
        if !self.custom_durations {
            self.fade_in = fade_in;
            self.fade_out = fade_out;
        }
    }
}

/// Build a [`SlideRecord`] from raw fields.
///
/// Missing durations come from `default_fade_in` / `default_fade_out`. The
/// start offset is derived from the window's distance to the chosen screen
/// edge when unset, and raised to at least that distance when set.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use horizon_slide::{resolve_record, RawSlideFields, SlideEdge};
/// use horizon_slide::render::Rect;
///
/// let screen = Rect::new(0.0, 0.0, 1000.0, 800.0);
/// let window = Rect::new(50.0, 100.0, 200.0, 100.0);
/// let raw = RawSlideFields { edge: SlideEdge::Left, ..Default::default() };
///
/// let record = resolve_record(raw, &window, &screen, Duration::from_millis(150), Duration::from_millis(250));
/// assert_eq!(record.start_offset, 50.0);
/// ```
pub fn resolve_record(
    raw: RawSlideFields,
    window: &Rect,
    screen: &Rect,
    default_fade_in: Duration,
    default_fade_out: Duration,
) -> SlideRecord {
    let distance = raw.edge.distance_to_edge(window, screen);
    let start_offset = match raw.start {
        Some(start) => start.max(distance),
        None => distance,
    };
    let custom_durations = raw.fade_in.is_some() || raw.fade_out.is_some();

    SlideRecord {
        edge: raw.edge,
        start_offset,
        slide_length: raw.slide_length.filter(|length| *length > 0.0),
        fade_in: raw.fade_in.unwrap_or(default_fade_in),
        fade_out: raw.fade_out.or(raw.fade_in).unwrap_or(default_fade_out),
        custom_durations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FADE_IN: Duration = Duration::from_millis(150);
    const FADE_OUT: Duration = Duration::from_millis(250);

    fn bytes(fields: &[u32]) -> Vec<u8> {
        fields.iter().flat_map(|f| f.to_ne_bytes()).collect()
    }

    fn screen() -> Rect {
        Rect::new(0.0, 0.0, 1000.0, 800.0)
    }

    #[test]
    fn test_edge_from_raw() {
        assert_eq!(SlideEdge::from_raw(0), SlideEdge::Left);
        assert_eq!(SlideEdge::from_raw(1), SlideEdge::Top);
        assert_eq!(SlideEdge::from_raw(2), SlideEdge::Right);
        assert_eq!(SlideEdge::from_raw(3), SlideEdge::Bottom);
        assert_eq!(SlideEdge::from_raw(17), SlideEdge::Bottom);
        assert_eq!(SlideEdge::Right.as_raw(), 2);
        assert!(SlideEdge::Left.is_horizontal());
        assert!(!SlideEdge::Bottom.is_horizontal());
    }

    #[test]
    fn test_empty_property_disables() {
        assert_eq!(RawSlideFields::from_property_bytes(&[]), None);
    }

    #[test]
    fn test_two_fields_use_defaults() {
        let raw = RawSlideFields::from_property_bytes(&bytes(&[10, 0])).unwrap();
        assert_eq!(raw.start, Some(10.0));
        assert_eq!(raw.edge, SlideEdge::Left);
        assert_eq!(raw.fade_in, None);
        assert_eq!(raw.fade_out, None);
        assert_eq!(raw.slide_length, None);
    }

    #[test]
    fn test_negative_start_is_unset() {
        let raw = RawSlideFields::from_property_bytes(&bytes(&[u32::MAX, 2])).unwrap();
        assert_eq!(raw.start, None);
        assert_eq!(raw.edge, SlideEdge::Right);
    }

    #[test]
    fn test_fade_out_defaults_to_fade_in() {
        let raw = RawSlideFields::from_property_bytes(&bytes(&[0, 3, 90])).unwrap();
        assert_eq!(raw.fade_in, Some(Duration::from_millis(90)));
        assert_eq!(raw.fade_out, Some(Duration::from_millis(90)));
    }

    #[test]
    fn test_full_property() {
        let raw = RawSlideFields::from_property_bytes(&bytes(&[5, 1, 90, 120, 40])).unwrap();
        assert_eq!(raw.fade_in, Some(Duration::from_millis(90)));
        assert_eq!(raw.fade_out, Some(Duration::from_millis(120)));
        assert_eq!(raw.slide_length, Some(40.0));
    }

    #[test]
    fn test_short_buffer_yields_unset_bottom() {
        let raw = RawSlideFields::from_property_bytes(&[1, 2, 3]).unwrap();
        assert_eq!(raw, RawSlideFields::default());
        assert_eq!(raw.edge, SlideEdge::Bottom);

        let raw = RawSlideFields::from_property_bytes(&bytes(&[7])).unwrap();
        assert_eq!(raw.start, None);
    }

    #[test]
    fn test_attribute_conversion() {
        let raw = RawSlideFields::from(SlideAttribute::new(SlideEdge::Top, 12));
        assert_eq!(raw.start, Some(12.0));
        assert_eq!(raw.edge, SlideEdge::Top);
        assert_eq!(raw.fade_in, None);

        let raw = RawSlideFields::from(SlideAttribute::new(SlideEdge::Top, -1));
        assert_eq!(raw.start, None);
    }

    #[test]
    fn test_resolve_derives_start_offset() {
        let window = Rect::new(50.0, 100.0, 200.0, 100.0);
        let cases = [
            (SlideEdge::Left, 50.0),
            (SlideEdge::Top, 100.0),
            (SlideEdge::Right, 750.0),
            (SlideEdge::Bottom, 600.0),
        ];
        for (edge, expected) in cases {
            let raw = RawSlideFields { edge, ..Default::default() };
            let record = resolve_record(raw, &window, &screen(), FADE_IN, FADE_OUT);
            assert_eq!(record.start_offset, expected, "edge {edge:?}");
        }
    }

    #[test]
    fn test_resolve_raises_short_start_offset() {
        let window = Rect::new(50.0, 100.0, 200.0, 100.0);
        let raw = RawSlideFields { start: Some(10.0), edge: SlideEdge::Left, ..Default::default() };
        let record = resolve_record(raw, &window, &screen(), FADE_IN, FADE_OUT);
        assert_eq!(record.start_offset, 50.0);

        let raw = RawSlideFields { start: Some(80.0), edge: SlideEdge::Left, ..Default::default() };
        let record = resolve_record(raw, &window, &screen(), FADE_IN, FADE_OUT);
        assert_eq!(record.start_offset, 80.0);
    }

    #[test]
    fn test_resolve_window_past_edge_clamps_to_zero() {
        let window = Rect::new(-30.0, 0.0, 200.0, 100.0);
        let raw = RawSlideFields { edge: SlideEdge::Left, ..Default::default() };
        let record = resolve_record(raw, &window, &screen(), FADE_IN, FADE_OUT);
        assert_eq!(record.start_offset, 0.0);
    }

    #[test]
    fn test_resolve_durations() {
        let window = Rect::new(0.0, 0.0, 10.0, 10.0);
        let record = resolve_record(RawSlideFields::default(), &window, &screen(), FADE_IN, FADE_OUT);
        assert_eq!(record.fade_in, FADE_IN);
        assert_eq!(record.fade_out, FADE_OUT);
        assert!(!record.custom_durations);

        let raw = RawSlideFields {
            fade_in: Some(Duration::from_millis(90)),
            slide_length: Some(0.0),
            ..Default::default()
        };
        let record = resolve_record(raw, &window, &screen(), FADE_IN, FADE_OUT);
        assert_eq!(record.fade_in, Duration::from_millis(90));
        assert_eq!(record.fade_out, Duration::from_millis(90));
        assert!(record.custom_durations);
        assert_eq!(record.slide_length, None);
        assert_eq!(record.travel(64.0), 64.0);
    }

    #[test]
    fn test_adopt_default_durations() {
        let window = Rect::new(0.0, 0.0, 10.0, 10.0);
        let mut record = resolve_record(RawSlideFields::default(), &window, &screen(), FADE_IN, FADE_OUT);
        record.adopt_default_durations(Duration::from_millis(300), Duration::from_millis(500));
        assert_eq!(record.fade_in, Duration::from_millis(300));

        let raw = RawSlideFields { fade_in: Some(Duration::from_millis(90)), ..Default::default() };
        let mut record = resolve_record(raw, &window, &screen(), FADE_IN, FADE_OUT);
        record.adopt_default_durations(Duration::from_millis(300), Duration::from_millis(500));
        assert_eq!(record.fade_in, Duration::from_millis(90));
    }
}
