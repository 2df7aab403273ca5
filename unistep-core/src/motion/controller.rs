//! Direction-alternating motion controller
//!
//! Runs a burst of half-step cycles clockwise, then the same number
//! counter-clockwise, and repeats without end. There is no stop condition;
//! the loop ends only with a reset or power loss.

use embedded_hal::delay::DelayNs;
use unistep_hal::OutputPort;

use crate::config::MotionConfig;
use crate::phase::{Direction, PhaseTable};
use crate::sequencer::PhaseSequencer;

/// Oscillating stepper controller
pub struct MotionController<P, D> {
    sequencer: PhaseSequencer<P, D>,
    table: PhaseTable,
    config: MotionConfig,
}

impl<P: OutputPort, D: DelayNs> MotionController<P, D> {
    /// Create a controller
    ///
    /// `port` must already be initialized: all coil lines configured as
    /// outputs and driven low.
    pub fn new(port: P, delay: D, table: PhaseTable, config: MotionConfig) -> Self {
        Self {
            sequencer: PhaseSequencer::new(port, delay),
            table,
            config,
        }
    }

    /// Active configuration
    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    /// Active phase table
    pub fn table(&self) -> &PhaseTable {
        &self.table
    }

    /// Run `burst_cycles` sequencer cycles in one direction
    pub fn run_burst(&mut self, direction: Direction) {
        #[cfg(feature = "defmt")]
        defmt::trace!(
            "Burst: {} x{} cycles, {}ms hold",
            direction,
            self.config.burst_cycles,
            self.config.step_delay_ms
        );

        let sequence = self.table.sequence(direction);
        for _ in 0..self.config.burst_cycles {
            self.sequencer.run(sequence, self.config.step_delay_ms);
        }
    }

    /// One clockwise burst followed by one counter-clockwise burst
    pub fn run_oscillation(&mut self) {
        let mut direction = Direction::Clockwise;
        for _ in 0..2 {
            self.run_burst(direction);
            direction = direction.opposite();
        }
    }

    /// Oscillate forever
    pub fn run(&mut self) -> ! {
        loop {
            self.run_oscillation();
        }
    }

    /// Release the port and delay
    pub fn release(self) -> (P, D) {
        self.sequencer.release()
    }
}
