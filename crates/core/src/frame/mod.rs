use crate::{counter::CounterRun, Result};

/// Monotonic clock in milliseconds, advanced by whoever drives the frame
/// loop. Tests and the command line simulation step it deterministically;
/// the browser's animation-frame timestamps play this role in a real page.
#[derive(Debug, Default, Clone)]
pub struct FrameClock {
    now_ms: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now_ms(&self) -> f64 {
        self.now_ms
    }

    /// Moves the clock forward. Negative deltas are ignored so the clock
    /// stays monotonic.
    pub fn advance(&mut self, delta_ms: f64) {
        if delta_ms > 0.0 {
            self.now_ms += delta_ms;
        }
    }

    pub fn reset(&mut self) {
        self.now_ms = 0.0;
    }
}

/// Cooperative scheduler for in-flight counter runs. Every tick steps each
/// active run exactly once and retires the finished ones, so steps never
/// overlap and are never re-entrant for the same run.
#[derive(Debug, Default)]
pub struct FramePump {
    runs: Vec<CounterRun>,
}

impl FramePump {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, run: CounterRun) {
        self.runs.push(run);
    }

    /// Steps every active run at the given timestamp and drops the runs that
    /// completed. Returns the number of runs still active afterwards.
    pub fn tick(&mut self, now_ms: f64) -> Result<usize> {
        for run in &mut self.runs {
            run.step(now_ms)?;
        }
        self.runs.retain(|run| !run.is_finished());
        Ok(self.runs.len())
    }

    pub fn active_runs(&self) -> usize {
        self.runs.len()
    }

    pub fn is_idle(&self) -> bool {
        self.runs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CounterSpec, ElementDescriptor, ElementHandle};

    fn heading(id: &str) -> ElementHandle {
        ElementDescriptor::stat_heading(id, 0.0, 40.0, None).instantiate()
    }

    #[test]
    fn clock_ignores_negative_deltas() {
        let mut clock = FrameClock::new();
        clock.advance(16.0);
        clock.advance(-100.0);
        assert!((clock.now_ms() - 16.0).abs() < f64::EPSILON);
    }

    #[test]
    fn pump_retires_finished_runs() {
        let mut pump = FramePump::new();
        let element = heading("stat-users");
        let spec = CounterSpec::new(0, 10, 100.0).unwrap();
        pump.schedule(CounterRun::new(element, spec));

        assert_eq!(pump.tick(0.0).unwrap(), 1);
        assert_eq!(pump.tick(200.0).unwrap(), 0);
        assert!(pump.is_idle());
    }

    #[test]
    fn overlapping_runs_do_not_cross_contaminate() {
        let mut pump = FramePump::new();
        let users = heading("stat-users");
        let repos = heading("stat-repos");
        pump.schedule(CounterRun::new(
            users.clone(),
            CounterSpec::new(0, 100, 1000.0).unwrap(),
        ));
        pump.schedule(CounterRun::new(
            repos.clone(),
            CounterSpec::new(0, 10, 1000.0).unwrap(),
        ));

        let mut now = 0.0;
        while now <= 1000.0 {
            pump.tick(now).unwrap();
            now += 16.0;
        }
        pump.tick(1016.0).unwrap();

        assert_eq!(users.text().unwrap(), "100");
        assert_eq!(repos.text().unwrap(), "10");
    }
}
