//! Coil lines and phase masks
//!
//! Each coil driver line owns one bit of the output port. A phase mask is
//! the OR of the coils energized at one instant: one coil for a pure phase,
//! two neighbouring coils for the induced state between phases.

use core::ops::BitOr;

/// Bits that map to a coil line
pub const LINE_MASK: u8 = 0b1111;

/// Number of coil lines
pub const COIL_COUNT: usize = 4;

/// Coil driver line, named by wire colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Coil {
    Blue = 0,
    Black = 1,
    Red = 2,
    Yellow = 3,
}

impl Coil {
    /// All coils in line order
    pub const ALL: [Coil; COIL_COUNT] = [Coil::Blue, Coil::Black, Coil::Red, Coil::Yellow];

    /// Port line (bit index) driving this coil
    pub const fn line(self) -> u8 {
        self as u8
    }

    /// Mask energizing only this coil
    pub const fn mask(self) -> PhaseMask {
        PhaseMask(1 << self.line())
    }
}

/// Set of energized coils
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PhaseMask(u8);

impl PhaseMask {
    /// No coil energized
    pub const NONE: Self = Self(0);

    /// Build a mask from raw port bits
    ///
    /// Bits outside [`LINE_MASK`] do not correspond to a coil and are dropped.
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & LINE_MASK)
    }

    /// Raw port bits
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Coils energized in either mask
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Check whether `coil` is energized
    pub const fn contains(self, coil: Coil) -> bool {
        self.0 & coil.mask().0 != 0
    }

    /// Number of energized coils
    pub const fn energized_count(self) -> u32 {
        self.0.count_ones()
    }

    /// True when exactly one coil is energized
    pub const fn is_single_coil(self) -> bool {
        self.energized_count() == 1
    }

    /// Number of coils whose state differs between the two masks
    pub const fn hamming_distance(self, other: Self) -> u32 {
        (self.0 ^ other.0).count_ones()
    }
}

impl From<Coil> for PhaseMask {
    fn from(coil: Coil) -> Self {
        coil.mask()
    }
}

impl BitOr for PhaseMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coil_masks_are_distinct_single_bits() {
        let mut seen = PhaseMask::NONE;
        for coil in Coil::ALL {
            let mask = coil.mask();
            assert!(mask.is_single_coil());
            assert!(!seen.contains(coil));
            seen = seen | mask;
        }
        assert_eq!(seen.bits(), LINE_MASK);
    }

    #[test]
    fn test_coil_lines() {
        assert_eq!(Coil::Blue.mask().bits(), 0b0001);
        assert_eq!(Coil::Black.mask().bits(), 0b0010);
        assert_eq!(Coil::Red.mask().bits(), 0b0100);
        assert_eq!(Coil::Yellow.mask().bits(), 0b1000);
    }

    #[test]
    fn test_from_bits_drops_unmapped_lines() {
        assert_eq!(PhaseMask::from_bits(0xF3).bits(), 0b0011);
        assert_eq!(PhaseMask::from_bits(0xF0), PhaseMask::NONE);
    }

    #[test]
    fn test_union_and_hamming() {
        let blue = PhaseMask::from(Coil::Blue);
        let black = PhaseMask::from(Coil::Black);
        let induced = blue | black;

        assert_eq!(induced.energized_count(), 2);
        assert!(induced.contains(Coil::Blue));
        assert!(induced.contains(Coil::Black));
        assert!(!induced.contains(Coil::Red));

        assert_eq!(blue.hamming_distance(induced), 1);
        assert_eq!(induced.hamming_distance(black), 1);
        assert_eq!(blue.hamming_distance(black), 2);
        assert_eq!(blue.hamming_distance(blue), 0);
    }
}
