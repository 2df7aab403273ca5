//! Canonical phase table
//!
//! Clockwise walks blue, black, red, yellow. Counter-clockwise walks the
//! same coils backwards, starting from yellow, so a counter-clockwise
//! burst picks up exactly where a clockwise burst stopped.

use static_assertions::const_assert;

use super::direction::Direction;
use super::mask::Coil;
use super::sequence::DirectionSequence;

/// Clockwise sequence: `[B, K, R, Y, B]`
pub const CLOCKWISE: DirectionSequence = DirectionSequence::closed([
    Coil::Blue.mask(),
    Coil::Black.mask(),
    Coil::Red.mask(),
    Coil::Yellow.mask(),
]);

/// Counter-clockwise sequence: `[Y, R, K, B, Y]`
pub const COUNTER_CLOCKWISE: DirectionSequence = CLOCKWISE.reversed();

const_assert!(CLOCKWISE.is_well_formed());
const_assert!(COUNTER_CLOCKWISE.is_well_formed());

/// Pair of direction sequences handed to the motion controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhaseTable {
    clockwise: DirectionSequence,
    counter_clockwise: DirectionSequence,
}

impl Default for PhaseTable {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl PhaseTable {
    /// Blue, black, red, yellow wiring
    pub const STANDARD: Self = Self::from_clockwise(CLOCKWISE);

    /// Build a table whose counter-clockwise sequence reverses `clockwise`
    pub const fn from_clockwise(clockwise: DirectionSequence) -> Self {
        Self {
            clockwise,
            counter_clockwise: clockwise.reversed(),
        }
    }

    /// Clockwise sequence
    pub const fn clockwise(&self) -> &DirectionSequence {
        &self.clockwise
    }

    /// Counter-clockwise sequence
    pub const fn counter_clockwise(&self) -> &DirectionSequence {
        &self.counter_clockwise
    }

    /// Sequence for `direction`
    pub const fn sequence(&self, direction: Direction) -> &DirectionSequence {
        match direction {
            Direction::Clockwise => &self.clockwise,
            Direction::CounterClockwise => &self.counter_clockwise,
        }
    }
}
