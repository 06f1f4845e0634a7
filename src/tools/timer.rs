use std::time::{Duration, Instant};

use log::debug;

/// Accumulates wall-clock time into named stages. Each `mark` charges the
/// time since the previous mark (or since construction) to the named
/// stage, so wrapping a pipeline is just a `mark` after every step.
#[derive(Debug)]
pub struct Timer {
    /// Per-stage totals, in the order the stages were first seen.
    pub stages: Vec<(&'static str, Duration)>,
    last: Instant,
}

impl Timer {
    pub fn new() -> Self {
        Self {
            stages: Vec::new(),
            last: Instant::now(),
        }
    }

    /// Charges the time since the previous mark to `stage`. A stage marked
    /// more than once accumulates.
    pub fn mark(&mut self, stage: &'static str) {
        let now = Instant::now();
        let elapsed = now - self.last;
        self.last = now;
        match self.stages.iter_mut().find(|(name, _)| *name == stage) {
            Some((_, total)) => *total += elapsed,
            None => self.stages.push((stage, elapsed)),
        }
    }

    /// Logs the per-stage totals, one line per stage.
    pub fn report(&self) {
        for (name, total) in &self.stages {
            debug!("Time in {}: {:?}", name, total);
        }
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
