use serde::{Deserialize, Serialize};

use crate::{AnimatorError, ElementHandle, Result};

/// Integer bounds and time budget for one count-up (or count-down) run. The
/// end value may sit below, at, or above the start value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CounterSpec {
    pub start: i64,
    pub end: i64,
    pub duration_ms: f64,
}

impl CounterSpec {
    pub fn new(start: i64, end: i64, duration_ms: f64) -> Result<Self> {
        let spec = Self {
            start,
            end,
            duration_ms,
        };
        spec.validate()?;
        Ok(spec)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.duration_ms.is_finite() || self.duration_ms <= 0.0 {
            return Err(AnimatorError::InvalidInput(
                "counter duration must be a positive number of milliseconds",
            ));
        }
        Ok(())
    }

    /// Interpolated display value for a progress fraction in `[0, 1]`. With
    /// integer bounds the value at full progress is exactly `end`.
    pub fn value_at(&self, progress: f64) -> i64 {
        let span = (self.end - self.start) as f64;
        (progress * span + self.start as f64).floor() as i64
    }
}

/// One in-flight counter animation. Each run closes over its own target and
/// reference timestamp, so concurrent runs on distinct elements never share
/// state.
#[derive(Debug)]
pub struct CounterRun {
    target: ElementHandle,
    spec: CounterSpec,
    started_at: Option<f64>,
    finished: bool,
}

impl CounterRun {
    pub fn new(target: ElementHandle, spec: CounterSpec) -> Self {
        Self {
            target,
            spec,
            started_at: None,
            finished: false,
        }
    }

    pub fn target(&self) -> &ElementHandle {
        &self.target
    }

    pub fn spec(&self) -> CounterSpec {
        self.spec
    }

    /// Advances the run by one frame at the given timestamp and renders the
    /// interpolated value into the target's text. The first step captures the
    /// timestamp as the run's reference point. Returns `true` once the run
    /// has reached full progress.
    ///
    /// Steps against a detached target still count towards completion; the
    /// write just has no visible effect.
    pub fn step(&mut self, now_ms: f64) -> Result<bool> {
        if self.finished {
            return Ok(true);
        }

        let reference = *self.started_at.get_or_insert(now_ms);
        let progress = ((now_ms - reference) / self.spec.duration_ms).clamp(0.0, 1.0);
        self.target.set_text(self.spec.value_at(progress).to_string())?;

        if progress >= 1.0 {
            self.finished = true;
        }
        Ok(self.finished)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
