use crate::{
    config::ObserverConfig,
    geometry::{intersection_ratio, IntersectionEntry, Viewport},
    ElementHandle, Result,
};

/// Watches a fixed set of elements for viewport entry and applies the
/// revealed marker on first intersection. Targets stay observed for the
/// lifetime of the watcher; the sets involved here are small and static, so
/// there is no unobserve-on-reveal step.
#[derive(Debug, Default)]
pub struct ViewportWatcher {
    config: ObserverConfig,
    targets: Vec<Target>,
}

#[derive(Debug)]
struct Target {
    element: ElementHandle,
    /// Which side of the threshold this element sat on at the last sweep.
    /// Entries are only emitted when the side changes, matching how the
    /// browser batches threshold crossings.
    above_threshold: bool,
}

impl ViewportWatcher {
    pub fn new(config: ObserverConfig) -> Self {
        Self {
            config,
            targets: Vec::new(),
        }
    }

    pub fn threshold(&self) -> f32 {
        self.config.threshold
    }

    pub fn revealed_class(&self) -> &str {
        &self.config.revealed_class
    }

    /// Registers elements with the watcher. Elements already observed (by
    /// id) are skipped, so overlapping selections do not double-report.
    pub fn observe(&mut self, elements: &[ElementHandle]) {
        for element in elements {
            if self
                .targets
                .iter()
                .any(|target| target.element.id() == element.id())
            {
                continue;
            }
            self.targets.push(Target {
                element: element.clone(),
                above_threshold: false,
            });
        }
    }

    pub fn observed_count(&self) -> usize {
        self.targets.len()
    }

    /// Recomputes every target's visibility against the viewport and returns
    /// entries for the targets whose threshold side changed since the last
    /// sweep, in either direction. An empty target set yields an empty batch.
    pub fn sweep(&mut self, viewport: Viewport) -> Vec<IntersectionEntry> {
        let mut entries = Vec::new();
        for target in &mut self.targets {
            let ratio = intersection_ratio(target.element.rect(), viewport);
            let above = ratio >= self.config.threshold;
            if above != target.above_threshold {
                target.above_threshold = above;
                entries.push(IntersectionEntry::new(
                    target.element.clone(),
                    ratio,
                    self.config.threshold,
                ));
            }
        }
        entries
    }

    /// The intersection callback: applies the revealed marker to every
    /// intersecting entry. Leaving entries are ignored; the reveal is a
    /// one-way transition. Returns the elements that were newly revealed.
    pub fn report(&self, entries: &[IntersectionEntry]) -> Result<Vec<ElementHandle>> {
        let mut revealed = Vec::new();
        for entry in entries {
            if !entry.is_intersecting {
                continue;
            }
            if entry.element.add_class(&self.config.revealed_class)? {
                revealed.push(entry.element.clone());
            }
        }
        Ok(revealed)
    }
}
