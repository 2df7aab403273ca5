//! Half-step phase sequencer
//!
//! One call walks a direction sequence through its four pure phases,
//! inserting the two-coil induced state after each one:
//!
//! ```text
//! step 0:  d[0]        d[0] | d[1]
//! step 1:  d[1]        d[1] | d[2]
//! step 2:  d[2]        d[2] | d[3]
//! step 3:  d[3]        d[3] | d[4]
//! ```
//!
//! Each mask is written to the port and held for the step delay, so a
//! cycle is 8 writes that walk the four phases of the sequence once.

use core::iter::FusedIterator;

use embedded_hal::delay::DelayNs;
use unistep_hal::OutputPort;

use crate::phase::{DirectionSequence, PhaseMask, DISTINCT_PHASES};

/// Port writes per sequencer cycle
pub const WRITES_PER_CYCLE: usize = DISTINCT_PHASES * 2;

/// Masks of one half-step cycle, in write order
///
/// Alternates pure phase and induced state, starting with the pure phase.
#[derive(Debug, Clone)]
pub struct HalfStepCycle<'a> {
    sequence: &'a DirectionSequence,
    next: usize,
}

impl<'a> HalfStepCycle<'a> {
    pub fn new(sequence: &'a DirectionSequence) -> Self {
        Self { sequence, next: 0 }
    }
}

impl Iterator for HalfStepCycle<'_> {
    type Item = PhaseMask;

    fn next(&mut self) -> Option<PhaseMask> {
        if self.next >= WRITES_PER_CYCLE {
            return None;
        }

        let step = self.next / 2;
        let mask = if self.next % 2 == 0 {
            self.sequence.get(step)
        } else {
            self.sequence.get(step) | self.sequence.get(step + 1)
        };
        self.next += 1;
        Some(mask)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = WRITES_PER_CYCLE.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for HalfStepCycle<'_> {}

impl FusedIterator for HalfStepCycle<'_> {}

/// Drives half-step cycles onto an output port
///
/// The sequencer is the port's only writer. The delay blocks for the full
/// hold time; nothing else runs while a mask is held.
pub struct PhaseSequencer<P, D> {
    port: P,
    delay: D,
}

impl<P: OutputPort, D: DelayNs> PhaseSequencer<P, D> {
    /// Create a sequencer over an initialized port
    pub fn new(port: P, delay: D) -> Self {
        Self { port, delay }
    }

    /// Run one half-step cycle of `sequence`, holding each mask `hold_ms`
    ///
    /// The sequence is not validated; a malformed one simply moves the
    /// motor incorrectly.
    pub fn run(&mut self, sequence: &DirectionSequence, hold_ms: u32) {
        for mask in HalfStepCycle::new(sequence) {
            self.port.write(mask.bits());
            self.delay.delay_ms(hold_ms);
        }
    }

    /// Release the port and delay
    pub fn release(self) -> (P, D) {
        (self.port, self.delay)
    }
}
