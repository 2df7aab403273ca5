//! Four-line port over individual output pins
//!
//! Maps port bit `n` to pin `n`, so a ULN2003 board wired IN1..IN4 to four
//! arbitrary GPIOs behaves like a single 4-bit register.
//!
//! # Usage
//!
//! ```ignore
//! let mut port = CoilPins::new(in1, in2, in3, in4); // all lines driven low
//! port.write(0b0011); // IN1 and IN2 high
//! ```
//!
//! Only pins whose error type is [`Infallible`] are accepted: the stepping
//! path has no way to report a failed write, so the type system has to
//! prove there is none.

use core::convert::Infallible;

use embedded_hal::digital::{OutputPin, PinState};
use unistep_hal::OutputPort;

/// Four coil driver lines acting as one port
pub struct CoilPins<A, B, C, D> {
    in1: A,
    in2: B,
    in3: C,
    in4: D,
}

impl<A, B, C, D> CoilPins<A, B, C, D>
where
    A: OutputPin<Error = Infallible>,
    B: OutputPin<Error = Infallible>,
    C: OutputPin<Error = Infallible>,
    D: OutputPin<Error = Infallible>,
{
    /// Take ownership of the four lines and drive them all low
    pub fn new(in1: A, in2: B, in3: C, in4: D) -> Self {
        let mut port = Self { in1, in2, in3, in4 };
        port.clear();
        port
    }

    /// Release the pins
    pub fn into_pins(self) -> (A, B, C, D) {
        (self.in1, self.in2, self.in3, self.in4)
    }
}

fn drive<P: OutputPin<Error = Infallible>>(pin: &mut P, bits: u8, line: u8) {
    let state = PinState::from(bits & (1 << line) != 0);
    match pin.set_state(state) {
        Ok(()) => {}
        Err(never) => match never {},
    }
}

impl<A, B, C, D> OutputPort for CoilPins<A, B, C, D>
where
    A: OutputPin<Error = Infallible>,
    B: OutputPin<Error = Infallible>,
    C: OutputPin<Error = Infallible>,
    D: OutputPin<Error = Infallible>,
{
    const WIDTH: u8 = 4;

    fn write(&mut self, bits: u8) {
        let bits = Self::usable_bits(bits);
        drive(&mut self.in1, bits, 0);
        drive(&mut self.in2, bits, 1);
        drive(&mut self.in3, bits, 2);
        drive(&mut self.in4, bits, 3);
    }
}
