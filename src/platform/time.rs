//! Fixed timestep accumulator
//!
//! Turns measured frame deltas into whole simulation ticks.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS};

#[derive(Debug, Clone)]
pub struct FixedStepClock {
    step: f32,
    accumulator: f32,
    max_substeps: u32,
}

impl FixedStepClock {
    pub fn new(step: f32) -> Self {
        Self {
            step,
            accumulator: 0.0,
            max_substeps: MAX_SUBSTEPS,
        }
    }

    /// Seconds per tick
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Feed one frame's elapsed time; returns how many ticks to run
    ///
    /// Long frames are clamped and at most `MAX_SUBSTEPS` ticks run per
    /// frame. Time beyond that is dropped rather than carried over.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < self.max_substeps {
            self.accumulator -= self.step;
            substeps += 1;
        }

        if self.accumulator >= self.step {
            log::warn!(
                "Dropping {:.3}s of simulation time (substep cap {})",
                self.accumulator,
                self.max_substeps
            );
            self.accumulator %= self.step;
        }

        substeps
    }

    /// Fraction of a tick left over, for render interpolation
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_partial_frames() {
        let mut clock = FixedStepClock::new(0.25);
        assert_eq!(clock.advance(0.1), 0);
        assert_eq!(clock.advance(0.1), 0);
        assert_eq!(clock.advance(0.1), 1);
        assert!(clock.alpha() > 0.0 && clock.alpha() < 1.0);
    }

    #[test]
    fn test_caps_substeps() {
        let mut clock = FixedStepClock::new(0.001);
        assert_eq!(clock.advance(0.05), MAX_SUBSTEPS);
        assert!(clock.alpha() < 1.0);
    }

    #[test]
    fn test_ignores_negative_deltas() {
        let mut clock = FixedStepClock::new(0.5);
        assert_eq!(clock.advance(-3.0), 0);
        assert_eq!(clock.alpha(), 0.0);
    }
}
