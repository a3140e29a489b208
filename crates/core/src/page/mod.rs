use serde::{Deserialize, Serialize};

use crate::{geometry::Viewport, CounterSpec, ElementDescriptor, ElementHandle, Result};

/// Serializable description of a page: the viewport size and every element
/// the animator should watch. Stands in for the markup the hosting page
/// would normally provide.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageDescriptor {
    pub viewport_height: f32,
    pub elements: Vec<ElementDescriptor>,
}

impl PageDescriptor {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Built-in landing page used by the command line demo: a hero section,
    /// an about section, and a stats section with three counting headings.
    pub fn demo() -> Self {
        Self {
            viewport_height: 800.0,
            elements: vec![
                ElementDescriptor::section("hero", 0.0, 700.0),
                ElementDescriptor::section("about", 700.0, 900.0),
                ElementDescriptor::section("stats", 1600.0, 600.0),
                ElementDescriptor::stat_heading(
                    "stat-projects",
                    1700.0,
                    40.0,
                    Some(CounterSpec {
                        start: 0,
                        end: 120,
                        duration_ms: 1000.0,
                    }),
                ),
                ElementDescriptor::stat_heading(
                    "stat-clients",
                    1700.0,
                    40.0,
                    Some(CounterSpec {
                        start: 0,
                        end: 45,
                        duration_ms: 1000.0,
                    }),
                ),
                ElementDescriptor::stat_heading(
                    "stat-awards",
                    1700.0,
                    40.0,
                    Some(CounterSpec {
                        start: 0,
                        end: 8,
                        duration_ms: 1000.0,
                    }),
                ),
            ],
        }
    }
}

/// Headless stand-in for the browser's layout pipeline: owns the element
/// handles and the scroll position, and hands the animator viewports to
/// sweep against.
#[derive(Debug)]
pub struct PageModel {
    elements: Vec<ElementHandle>,
    viewport: Viewport,
}

impl PageModel {
    pub fn new(descriptor: PageDescriptor) -> Self {
        let viewport = Viewport::new(0.0, descriptor.viewport_height);
        let elements = descriptor
            .elements
            .into_iter()
            .map(ElementDescriptor::instantiate)
            .collect();
        Self { elements, viewport }
    }

    pub fn elements(&self) -> &[ElementHandle] {
        &self.elements
    }

    pub fn element(&self, id: &str) -> Option<&ElementHandle> {
        self.elements.iter().find(|element| element.id() == id)
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Total document height, taken from the lowest element edge.
    pub fn content_height(&self) -> f32 {
        self.elements
            .iter()
            .map(|element| element.rect().bottom())
            .fold(self.viewport.height, f32::max)
    }

    /// Moves the viewport to a new scroll offset, clamped to the scrollable
    /// range, and returns it for the animator to sweep.
    pub fn scroll_to(&mut self, offset: f32) -> Viewport {
        let max_offset = (self.content_height() - self.viewport.height).max(0.0);
        self.viewport.scroll_top = offset.clamp(0.0, max_offset);
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_page_round_trips_through_json() {
        let demo = PageDescriptor::demo();
        let json = demo.to_json().unwrap();
        let parsed = PageDescriptor::from_json(&json).unwrap();
        assert_eq!(parsed.elements.len(), demo.elements.len());
        assert_eq!(parsed.elements[0].id, "hero");
    }

    #[test]
    fn counter_field_defaults_to_none() {
        let json = r#"{
            "viewport_height": 800.0,
            "elements": [
                { "id": "hero", "kind": "Section", "rect": { "top": 0.0, "height": 400.0 } }
            ]
        }"#;
        let page = PageDescriptor::from_json(json).unwrap();
        assert!(page.elements[0].counter.is_none());
    }

    #[test]
    fn scroll_offset_is_clamped_to_content() {
        let mut page = PageModel::new(PageDescriptor::demo());
        let viewport = page.scroll_to(1_000_000.0);
        assert!((viewport.scroll_top - (page.content_height() - 800.0)).abs() < f32::EPSILON);

        let viewport = page.scroll_to(-50.0);
        assert_eq!(viewport.scroll_top, 0.0);
    }

    #[test]
    fn elements_are_addressable_by_id() {
        let page = PageModel::new(PageDescriptor::demo());
        assert!(page.element("stat-projects").is_some());
        assert!(page.element("missing").is_none());
    }
}
