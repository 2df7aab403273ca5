//! Test doubles for the port and delay
//!
//! Both doubles append to one shared log so tests can check that every
//! write is followed by its hold.

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use unistep_hal::OutputPort;

use crate::phase::PhaseMask;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Write(u8),
    Hold(u32),
}

pub type Log = Rc<RefCell<Vec<Event>>>;

pub fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

/// Port that records every written value
pub struct RecordingPort {
    log: Log,
}

impl RecordingPort {
    pub fn new(log: &Log) -> Self {
        Self { log: log.clone() }
    }
}

impl OutputPort for RecordingPort {
    const WIDTH: u8 = 4;

    fn write(&mut self, bits: u8) {
        self.log.borrow_mut().push(Event::Write(Self::usable_bits(bits)));
    }
}

/// Delay that records requested holds instead of waiting
pub struct RecordingDelay {
    log: Log,
}

impl RecordingDelay {
    pub fn new(log: &Log) -> Self {
        Self { log: log.clone() }
    }
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, _ns: u32) {
        panic!("sequencing only waits in whole milliseconds");
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::Hold(ms));
    }
}

/// Written masks, in order
pub fn writes(log: &Log) -> Vec<PhaseMask> {
    log.borrow()
        .iter()
        .filter_map(|event| match event {
            Event::Write(bits) => Some(PhaseMask::from_bits(*bits)),
            Event::Hold(_) => None,
        })
        .collect()
}

/// Sum of all holds (ms)
pub fn elapsed_ms(log: &Log) -> u64 {
    log.borrow()
        .iter()
        .map(|event| match event {
            Event::Hold(ms) => u64::from(*ms),
            Event::Write(_) => 0,
        })
        .sum()
}

/// Check the log strictly alternates write, hold, write, hold...
pub fn holds_follow_writes(log: &Log, hold_ms: u32) -> bool {
    let log = log.borrow();
    log.len() % 2 == 0
        && log.chunks(2).all(|pair| {
            matches!(pair, [Event::Write(_), Event::Hold(ms)] if *ms == hold_ms)
        })
}

/// Half-step position (0..8) of a mask in the standard clockwise walk
///
/// Blue is 0, blue+black is 1, ... yellow+blue is 7.
pub fn half_step_position(mask: PhaseMask) -> Option<i32> {
    const WALK: [u8; 8] = [0b0001, 0b0011, 0b0010, 0b0110, 0b0100, 0b1100, 0b1000, 0b1001];
    WALK.iter()
        .position(|&bits| bits == mask.bits())
        .map(|pos| pos as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_port_drops_unmapped_bits() {
        let log = new_log();
        let mut port = RecordingPort::new(&log);

        port.write(0xF9);
        port.clear();

        assert_eq!(*log.borrow(), [Event::Write(0b1001), Event::Write(0)]);
    }
}
