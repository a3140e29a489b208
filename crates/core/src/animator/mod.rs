use crate::{
    config::AnimatorConfig,
    counter::{CounterRun, CounterSpec},
    frame::FramePump,
    geometry::{IntersectionEntry, Viewport},
    observer::ViewportWatcher,
    ElementHandle, ElementKind, Result,
};

/// Top-level façade tying the watcher and the frame pump together. The host
/// constructs one explicitly once its content exists; nothing registers
/// itself at load time.
#[derive(Debug)]
pub struct ViewportAnimator {
    config: AnimatorConfig,
    watcher: ViewportWatcher,
    pump: FramePump,
}

impl ViewportAnimator {
    pub fn new(config: AnimatorConfig) -> Self {
        let watcher = ViewportWatcher::new(config.observer.clone());
        Self {
            config,
            watcher,
            pump: FramePump::new(),
        }
    }

    pub fn config(&self) -> &AnimatorConfig {
        &self.config
    }

    /// Registers the watched set (sections plus stat headings). Membership is
    /// meant to be fixed after initialization; overlapping registrations are
    /// deduplicated by the watcher.
    pub fn observe(&mut self, elements: &[ElementHandle]) {
        self.watcher.observe(elements);
    }

    /// Scroll-driven entry point: sweeps the watched set against the new
    /// viewport and feeds the resulting batch through the intersection
    /// callback. Returns the elements revealed by this scroll step.
    pub fn scroll_to(&mut self, viewport: Viewport) -> Result<Vec<ElementHandle>> {
        let entries = self.watcher.sweep(viewport);
        self.report_intersections(&entries)
    }

    /// The intersection callback. Applies the revealed marker to every
    /// intersecting entry and, for stat headings that declare counter bounds,
    /// starts their count-up on the first reveal. Because the marker is
    /// one-way, each element's counter can start at most once per page
    /// session.
    pub fn report_intersections(
        &mut self,
        entries: &[IntersectionEntry],
    ) -> Result<Vec<ElementHandle>> {
        let revealed = self.watcher.report(entries)?;
        for element in &revealed {
            if element.kind() != ElementKind::StatHeading {
                continue;
            }
            if let Some(spec) = element.counter_spec() {
                spec.validate()?;
                self.pump.schedule(CounterRun::new(element.clone(), spec));
            }
        }
        Ok(revealed)
    }

    /// Starts a counter run directly, outside the reveal wiring.
    pub fn animate_value(
        &mut self,
        target: &ElementHandle,
        start: i64,
        end: i64,
        duration_ms: f64,
    ) -> Result<()> {
        let spec = CounterSpec::new(start, end, duration_ms)?;
        self.pump.schedule(CounterRun::new(target.clone(), spec));
        Ok(())
    }

    /// Advances every in-flight counter run one frame. Returns the number of
    /// runs still active.
    pub fn tick(&mut self, now_ms: f64) -> Result<usize> {
        self.pump.tick(now_ms)
    }

    pub fn is_idle(&self) -> bool {
        self.pump.is_idle()
    }

    pub fn observed_count(&self) -> usize {
        self.watcher.observed_count()
    }
}

impl Default for ViewportAnimator {
    fn default() -> Self {
        Self::new(AnimatorConfig::default())
    }
}
