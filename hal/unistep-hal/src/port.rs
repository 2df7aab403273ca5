//! Output port abstraction
//!
//! A port is a small register whose bits each drive one output line.
//! Writing replaces every line at once; there is no read-back.

/// Bits covered by a port `width` lines wide, counted from bit 0
pub const fn line_mask(width: u8) -> u8 {
    if width >= u8::BITS as u8 {
        u8::MAX
    } else {
        (1 << width) - 1
    }
}

/// Multi-line output port
///
/// Bit `n` of a written value maps one-to-one to output line `n`.
/// Implementations must make the new pattern visible on all lines
/// before returning.
pub trait OutputPort {
    /// Number of usable lines, counted from bit 0
    const WIDTH: u8;

    /// Set the port to `bits`
    ///
    /// Bits at or above [`Self::WIDTH`] must be ignored; implementations
    /// apply [`Self::usable_bits`] before driving the lines.
    fn write(&mut self, bits: u8);

    /// Part of `bits` that maps to a line on this port
    fn usable_bits(bits: u8) -> u8 {
        bits & line_mask(Self::WIDTH)
    }

    /// Drive every line low
    fn clear(&mut self) {
        self.write(0);
    }
}

impl<P: OutputPort + ?Sized> OutputPort for &mut P {
    const WIDTH: u8 = P::WIDTH;

    fn write(&mut self, bits: u8) {
        (**self).write(bits);
    }
}
