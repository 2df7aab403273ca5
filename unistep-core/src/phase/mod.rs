//! Coil activation patterns
//!
//! Masks for the four coil lines and the two closed-loop sequences that
//! rotate the motor in each direction.

pub mod direction;
pub mod mask;
pub mod sequence;
pub mod table;

pub use direction::Direction;
pub use mask::{Coil, PhaseMask};
pub use sequence::{DirectionSequence, DISTINCT_PHASES, LOOP_LEN};
pub use table::{PhaseTable, CLOCKWISE, COUNTER_CLOCKWISE};
