use serde::{Deserialize, Serialize};

use crate::ElementHandle;

/// Axis-aligned vertical extent of an element within the page, in pixels.
/// Horizontal geometry never affects reveal decisions, so only the vertical
/// axis is modelled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Distance from the top of the document to the element's top edge.
    pub top: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(top: f32, height: f32) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }
}

/// The window the page is currently scrolled to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Document offset of the viewport's top edge.
    pub scroll_top: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(scroll_top: f32, height: f32) -> Self {
        Self { scroll_top, height }
    }

    pub fn bottom(&self) -> f32 {
        self.scroll_top + self.height
    }
}

/// Fraction of `rect`'s own area that overlaps the viewport, clamped to
/// `[0, 1]`. Degenerate rects report zero visibility.
pub fn intersection_ratio(rect: Rect, viewport: Viewport) -> f32 {
    if rect.height <= 0.0 || viewport.height <= 0.0 {
        return 0.0;
    }

    let overlap = rect.bottom().min(viewport.bottom()) - rect.top.max(viewport.scroll_top);
    (overlap.max(0.0) / rect.height).clamp(0.0, 1.0)
}

/// One element's visibility report, as handed to the intersection callback.
#[derive(Debug, Clone)]
pub struct IntersectionEntry {
    pub element: ElementHandle,
    pub ratio: f32,
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    /// Builds an entry, deriving the intersecting flag from the configured
    /// threshold. A ratio sitting exactly on the threshold counts as inside.
    pub fn new(element: ElementHandle, ratio: f32, threshold: f32) -> Self {
        Self {
            element,
            ratio,
            is_intersecting: ratio >= threshold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fully_visible_rect_reports_one() {
        let rect = Rect::new(100.0, 200.0);
        let viewport = Viewport::new(0.0, 800.0);
        assert!((intersection_ratio(rect, viewport) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn partially_visible_rect_reports_fraction() {
        // Bottom half of the element hangs below the fold.
        let rect = Rect::new(700.0, 200.0);
        let viewport = Viewport::new(0.0, 800.0);
        let ratio = intersection_ratio(rect, viewport);
        assert!((ratio - 0.5).abs() < 1e-6);
    }

    #[test]
    fn offscreen_rect_reports_zero() {
        let rect = Rect::new(2000.0, 300.0);
        let viewport = Viewport::new(0.0, 800.0);
        assert_eq!(intersection_ratio(rect, viewport), 0.0);
    }

    #[test]
    fn zero_height_rect_reports_zero() {
        let rect = Rect::new(100.0, 0.0);
        let viewport = Viewport::new(0.0, 800.0);
        assert_eq!(intersection_ratio(rect, viewport), 0.0);
    }

    #[test]
    fn ratio_at_exact_threshold_counts_as_intersecting() {
        let element = crate::ElementDescriptor::section("hero", 0.0, 100.0).instantiate();
        let entry = IntersectionEntry::new(element, 0.1, 0.1);
        assert!(entry.is_intersecting);
    }

    #[test]
    fn ratio_below_threshold_is_not_intersecting() {
        let element = crate::ElementDescriptor::section("hero", 0.0, 100.0).instantiate();
        let entry = IntersectionEntry::new(element, 0.09, 0.1);
        assert!(!entry.is_intersecting);
    }
}
