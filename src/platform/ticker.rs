//! Fixed-rate step scheduling
//!
//! The simulation moves a fixed distance per step, so the host must call
//! `step` at a steady rate. `FixedTicker` turns the wall-clock time between
//! host frames into a whole number of steps.

use crate::consts::{MAX_SUBSTEPS, TICK_DT};

#[derive(Debug, Clone)]
pub struct FixedTicker {
    /// Seconds per step
    tick_dt: f64,
    /// Cap on steps per frame to prevent spiral of death
    max_substeps: u32,
    accumulator: f64,
}

impl Default for FixedTicker {
    fn default() -> Self {
        Self::new(TICK_DT, MAX_SUBSTEPS)
    }
}

impl FixedTicker {
    pub fn new(tick_dt: f64, max_substeps: u32) -> Self {
        Self {
            tick_dt,
            max_substeps,
            accumulator: 0.0,
        }
    }

    pub fn tick_dt(&self) -> f64 {
        self.tick_dt
    }

    /// Add `elapsed` seconds and return how many steps are due. Time beyond
    /// `max_substeps` steps is dropped.
    pub fn advance(&mut self, elapsed: f64) -> u32 {
        self.accumulator += elapsed.clamp(0.0, 0.1);

        let mut steps = 0;
        while self.accumulator >= self.tick_dt && steps < self.max_substeps {
            self.accumulator -= self.tick_dt;
            steps += 1;
        }
        if steps == self.max_substeps && self.accumulator >= self.tick_dt {
            log::debug!("dropping {:.3}s of backlog", self.accumulator);
            self.accumulator = 0.0;
        }
        steps
    }

    /// Fraction of a step left over, for interpolated rendering
    pub fn alpha(&self) -> f64 {
        self.accumulator / self.tick_dt
    }
}
