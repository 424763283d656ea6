//! Scroll and interaction math shared by the page sections.
//!
//! Everything here is pure so it runs the same on the server, in the browser,
//! and under `cargo test`.

/// Header switches to its solid style once the page scrolls past this offset.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

const HERO_PARALLAX_FACTOR: f64 = 0.3;

/// Which face of a flip card is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CardFace {
    #[default]
    Front,
    Back,
}

impl CardFace {
    pub fn toggle(&mut self) {
        *self = self.toggled();
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Front => Self::Back,
            Self::Back => Self::Front,
        }
    }

    /// Face showing after `n` activations from the initial state.
    pub fn after_activations(n: usize) -> Self {
        if n % 2 == 0 {
            Self::Front
        } else {
            Self::Back
        }
    }

    pub fn is_back(self) -> bool {
        self == Self::Back
    }

    pub fn rotation_deg(self) -> u16 {
        match self {
            Self::Front => 0,
            Self::Back => 180,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Back => "back",
        }
    }
}

/// Bounding box of a section relative to the viewport, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionGeometry {
    /// Distance from the viewport's top edge to the section's top edge.
    pub top: f64,
    pub height: f64,
    pub viewport_height: f64,
}

/// Progress of a section through the viewport, always within `[0, 1]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct ScrollRatio(f64);

impl ScrollRatio {
    pub const START: Self = Self(0.0);
    pub const END: Self = Self(1.0);

    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            Self::START
        } else {
            Self(value.clamp(0.0, 1.0))
        }
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

/// Ratio is 0 while the section's top is at or below the viewport's bottom
/// edge and 1 once its bottom has passed the viewport's top edge.
pub fn section_scroll_ratio(geometry: SectionGeometry) -> ScrollRatio {
    let SectionGeometry {
        top,
        height,
        viewport_height,
    } = geometry;
    let span = viewport_height + height;
    if !top.is_finite() || !span.is_finite() || span <= 0.0 {
        return ScrollRatio::START;
    }
    ScrollRatio::new((viewport_height - top) / span)
}

/// Where the experience timeline's indicator sits and how much of the track is filled.
///
/// Both fields are fractions of the track length and are always equal.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TimelineProjection {
    pub indicator_position: f64,
    pub track_fill: f64,
}

impl TimelineProjection {
    pub fn from_ratio(ratio: ScrollRatio) -> Self {
        let r = ratio.get();
        Self {
            indicator_position: r,
            track_fill: r,
        }
    }

    pub fn indicator_style(&self) -> String {
        format!("top: {:.3}%", self.indicator_position * 100.0)
    }

    pub fn fill_style(&self) -> String {
        format!("height: {:.3}%", self.track_fill * 100.0)
    }
}

pub fn is_scrolled(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD_PX
}

/// Linear interpolation from one range onto another, clamped to the output range.
pub fn map_range(value: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_lo, in_hi) = input;
    let (out_lo, out_hi) = output;
    if in_hi == in_lo || value.is_nan() {
        return out_lo;
    }
    let t = ((value - in_lo) / (in_hi - in_lo)).clamp(0.0, 1.0);
    out_lo + (out_hi - out_lo) * t
}

/// Section headers slide up and fade in over the first 30% of their scroll range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderParallax {
    pub offset_px: f64,
    pub opacity: f64,
}

impl HeaderParallax {
    const RANGE: (f64, f64) = (0.0, 0.3);

    pub fn from_ratio(ratio: ScrollRatio, distance_px: f64) -> Self {
        Self {
            offset_px: map_range(ratio.get(), Self::RANGE, (distance_px, 0.0)),
            opacity: map_range(ratio.get(), Self::RANGE, (0.0, 1.0)),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "transform: translateY({:.1}px); opacity: {:.3}",
            self.offset_px, self.opacity
        )
    }
}

pub fn hero_parallax_px(scroll_y: f64) -> f64 {
    if scroll_y.is_finite() {
        scroll_y.max(0.0) * HERO_PARALLAX_FACTOR
    } else {
        0.0
    }
}

pub fn stagger_delay_ms(index: usize, base_ms: u32, step_ms: u32) -> u32 {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    base_ms.saturating_add(step_ms.saturating_mul(index))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_card_starts_on_front() {
        assert_eq!(CardFace::default(), CardFace::Front);
        assert!(!CardFace::default().is_back());
    }

    #[test]
    fn test_card_toggle_pairs() {
        let mut face = CardFace::default();
        face.toggle();
        assert_eq!(face, CardFace::Back);
        face.toggle();
        assert_eq!(face, CardFace::Front);
    }

    #[test]
    fn test_card_parity_law() {
        for n in 0..50 {
            let mut face = CardFace::default();
            for _ in 0..n {
                face.toggle();
            }
            assert_eq!(face, CardFace::after_activations(n), "n = {n}");
            let expected = if n % 2 == 0 {
                CardFace::Front
            } else {
                CardFace::Back
            };
            assert_eq!(face, expected);
        }
    }

    #[test]
    fn test_card_rotation() {
        assert_eq!(CardFace::Front.rotation_deg(), 0);
        assert_eq!(CardFace::Back.rotation_deg(), 180);
        assert_eq!(CardFace::Back.as_str(), "back");
    }

    fn geometry(top: f64, height: f64) -> SectionGeometry {
        SectionGeometry {
            top,
            height,
            viewport_height: 800.0,
        }
    }

    #[test]
    fn test_ratio_endpoints() {
        // section top at the viewport's bottom edge
        assert_eq!(section_scroll_ratio(geometry(800.0, 1200.0)), ScrollRatio::START);
        // section bottom at the viewport's top edge
        assert_eq!(section_scroll_ratio(geometry(-1200.0, 1200.0)), ScrollRatio::END);
        let mid = section_scroll_ratio(geometry(-200.0, 1200.0));
        assert!((mid.get() - 0.5).abs() < EPS);
    }

    #[test]
    fn test_ratio_clamps_outside_range() {
        assert_eq!(section_scroll_ratio(geometry(5000.0, 1200.0)).get(), 0.0);
        assert_eq!(section_scroll_ratio(geometry(-9000.0, 1200.0)).get(), 1.0);
        for top in (-5000..5000).step_by(137) {
            let r = section_scroll_ratio(geometry(top as f64, 900.0)).get();
            assert!((0.0..=1.0).contains(&r), "top = {top}, r = {r}");
        }
    }

    #[test]
    fn test_ratio_degenerate_inputs() {
        let unmeasured = SectionGeometry {
            top: 0.0,
            height: 0.0,
            viewport_height: f64::INFINITY,
        };
        assert_eq!(section_scroll_ratio(unmeasured), ScrollRatio::START);
        assert_eq!(section_scroll_ratio(geometry(f64::NAN, 100.0)), ScrollRatio::START);
        let empty = SectionGeometry {
            top: 0.0,
            height: 0.0,
            viewport_height: 0.0,
        };
        assert_eq!(section_scroll_ratio(empty), ScrollRatio::START);
        assert_eq!(ScrollRatio::new(f64::NAN), ScrollRatio::START);
    }

    #[test]
    fn test_timeline_indicator_matches_fill() {
        for i in 0..=1000 {
            let r = ScrollRatio::new(i as f64 / 1000.0);
            let p = TimelineProjection::from_ratio(r);
            assert!((p.indicator_position - p.track_fill).abs() < EPS);
            assert!((p.track_fill - r.get()).abs() < EPS);
        }
        let p = TimelineProjection::from_ratio(ScrollRatio::new(0.25));
        assert_eq!(p.indicator_style(), "top: 25.000%");
        assert_eq!(p.fill_style(), "height: 25.000%");
    }

    #[test]
    fn test_nav_threshold_is_exclusive() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(51.0));
        assert!(is_scrolled(50.5));
    }

    #[test]
    fn test_map_range() {
        assert!((map_range(0.15, (0.0, 0.3), (60.0, 0.0)) - 30.0).abs() < EPS);
        assert_eq!(map_range(-1.0, (0.0, 0.3), (60.0, 0.0)), 60.0);
        assert_eq!(map_range(0.9, (0.0, 0.3), (60.0, 0.0)), 0.0);
        assert_eq!(map_range(0.5, (1.0, 1.0), (2.0, 3.0)), 2.0);
    }

    #[test]
    fn test_header_parallax() {
        let hidden = HeaderParallax::from_ratio(ScrollRatio::START, 60.0);
        assert_eq!(hidden.offset_px, 60.0);
        assert_eq!(hidden.opacity, 0.0);
        let shown = HeaderParallax::from_ratio(ScrollRatio::new(0.5), 60.0);
        assert_eq!(shown.offset_px, 0.0);
        assert_eq!(shown.opacity, 1.0);
        assert_eq!(shown.style(), "transform: translateY(0.0px); opacity: 1.000");
    }

    #[test]
    fn test_hero_parallax() {
        assert_eq!(hero_parallax_px(0.0), 0.0);
        assert!((hero_parallax_px(100.0) - 30.0).abs() < EPS);
        assert_eq!(hero_parallax_px(-40.0), 0.0);
        assert_eq!(hero_parallax_px(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_stagger_delay() {
        assert_eq!(stagger_delay_ms(0, 300, 200), 300);
        assert_eq!(stagger_delay_ms(3, 300, 200), 900);
        assert_eq!(stagger_delay_ms(usize::MAX, 300, 200), u32::MAX);
    }
}
