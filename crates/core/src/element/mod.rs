use std::sync::{Arc, Mutex, MutexGuard};

use serde::{Deserialize, Serialize};

use crate::{counter::CounterSpec, geometry::Rect, AnimatorError, Result};

/// Explicit tag describing an element's role in the page. Replaces structural
/// CSS-path matching ("is this heading inside a stat card?") with a membership
/// test that works without a layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementKind {
    /// A generic sectioning container that fades in when scrolled to.
    Section,
    /// A stat-card heading whose text can additionally run a count-up.
    StatHeading,
}

/// Static description of one element, as declared by the hosting page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementDescriptor {
    pub id: String,
    pub kind: ElementKind,
    pub rect: Rect,
    /// Counter bounds sourced from the page markup. Only meaningful for
    /// [`ElementKind::StatHeading`]; sections never animate a number.
    #[serde(default)]
    pub counter: Option<CounterSpec>,
}

impl ElementDescriptor {
    pub fn section(id: impl Into<String>, top: f32, height: f32) -> Self {
        Self {
            id: id.into(),
            kind: ElementKind::Section,
            rect: Rect::new(top, height),
            counter: None,
        }
    }

    pub fn stat_heading(
        id: impl Into<String>,
        top: f32,
        height: f32,
        counter: Option<CounterSpec>,
    ) -> Self {
        Self {
            id: id.into(),
            kind: ElementKind::StatHeading,
            rect: Rect::new(top, height),
            counter,
        }
    }

    /// Creates the runtime element this descriptor declares.
    pub fn instantiate(self) -> ElementHandle {
        ElementHandle::new(self)
    }
}

#[derive(Debug, Default)]
struct ElementState {
    classes: Vec<String>,
    text: String,
    detached: bool,
}

/// Shared, thread-safe handle to one element's mutable state. The watcher,
/// in-flight counter runs, and the hosting page all address the same state
/// through clones of the handle.
#[derive(Clone)]
pub struct ElementHandle {
    descriptor: ElementDescriptor,
    shared: Arc<Mutex<ElementState>>,
}

impl ElementHandle {
    pub fn new(descriptor: ElementDescriptor) -> Self {
        Self {
            descriptor,
            shared: Arc::new(Mutex::new(ElementState::default())),
        }
    }

    pub fn id(&self) -> &str {
        &self.descriptor.id
    }

    pub fn kind(&self) -> ElementKind {
        self.descriptor.kind
    }

    pub fn rect(&self) -> Rect {
        self.descriptor.rect
    }

    pub fn counter_spec(&self) -> Option<CounterSpec> {
        self.descriptor.counter
    }

    /// Adds a class to the element. Returns `true` when the class was newly
    /// applied and `false` when it was already present; re-adding never
    /// duplicates the entry.
    pub fn add_class(&self, class: &str) -> Result<bool> {
        let mut state = self.lock()?;
        if state.classes.iter().any(|existing| existing == class) {
            return Ok(false);
        }
        state.classes.push(class.to_string());
        Ok(true)
    }

    pub fn has_class(&self, class: &str) -> Result<bool> {
        let state = self.lock()?;
        Ok(state.classes.iter().any(|existing| existing == class))
    }

    pub fn classes(&self) -> Result<Vec<String>> {
        let state = self.lock()?;
        Ok(state.classes.clone())
    }

    /// Overwrites the element's displayed text. Writing to a detached element
    /// is a silent no-op, mirroring a write to a node no longer in the
    /// document.
    pub fn set_text(&self, text: impl Into<String>) -> Result<()> {
        let mut state = self.lock()?;
        if state.detached {
            return Ok(());
        }
        state.text = text.into();
        Ok(())
    }

    pub fn text(&self) -> Result<String> {
        let state = self.lock()?;
        Ok(state.text.clone())
    }

    /// Marks the element as removed from the document. Existing handles stay
    /// valid; subsequent text writes simply stop having a visible effect.
    pub fn detach(&self) -> Result<()> {
        let mut state = self.lock()?;
        state.detached = true;
        Ok(())
    }

    pub fn is_detached(&self) -> Result<bool> {
        let state = self.lock()?;
        Ok(state.detached)
    }

    fn lock(&self) -> Result<MutexGuard<'_, ElementState>> {
        self.shared
            .lock()
            .map_err(|_| AnimatorError::msg("element state has been poisoned"))
    }
}

impl std::fmt::Debug for ElementHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ElementHandle")
            .field("id", &self.descriptor.id)
            .field("kind", &self.descriptor.kind)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn heading() -> ElementHandle {
        ElementDescriptor::stat_heading("stat-users", 900.0, 40.0, None).instantiate()
    }

    #[test]
    fn class_addition_is_idempotent() {
        let element = heading();
        assert!(element.add_class("visible").unwrap());
        assert!(!element.add_class("visible").unwrap());
        assert_eq!(element.classes().unwrap(), vec!["visible".to_string()]);
    }

    #[test]
    fn text_writes_round_trip() {
        let element = heading();
        element.set_text("42").unwrap();
        assert_eq!(element.text().unwrap(), "42");
    }

    #[test]
    fn detached_element_ignores_text_writes() {
        let element = heading();
        element.set_text("1").unwrap();
        element.detach().unwrap();
        element.set_text("2").unwrap();
        assert_eq!(element.text().unwrap(), "1");
    }

    #[test]
    fn clones_share_state() {
        let element = heading();
        let alias = element.clone();
        alias.add_class("visible").unwrap();
        assert!(element.has_class("visible").unwrap());
    }
}
