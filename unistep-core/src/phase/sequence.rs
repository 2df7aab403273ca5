//! Closed-loop direction sequences
//!
//! A direction sequence lists the four pure phases in rotation order and
//! repeats the first one at the end, so position `i + 1` is always
//! readable for every distinct phase `i`. The sequencer relies on that
//! extra slot to form the last induced state without wrapping the index.

use super::mask::PhaseMask;

/// Distinct pure phases in one electrical revolution
pub const DISTINCT_PHASES: usize = 4;

/// Stored length of a sequence (distinct phases plus the closing repeat)
pub const LOOP_LEN: usize = DISTINCT_PHASES + 1;

/// Ordered, closed loop of phase masks for one rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DirectionSequence([PhaseMask; LOOP_LEN]);

impl DirectionSequence {
    /// Wrap five masks as they are
    ///
    /// No check is made that the masks form a valid loop. A malformed
    /// sequence drives the motor erratically; see [`Self::is_well_formed`].
    pub const fn new(masks: [PhaseMask; LOOP_LEN]) -> Self {
        Self(masks)
    }

    /// Close four pure phases into a loop
    pub const fn closed(phases: [PhaseMask; DISTINCT_PHASES]) -> Self {
        Self([phases[0], phases[1], phases[2], phases[3], phases[0]])
    }

    /// Mask at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index >= LOOP_LEN`.
    pub const fn get(&self, index: usize) -> PhaseMask {
        self.0[index]
    }

    /// All five stored masks
    pub const fn as_array(&self) -> &[PhaseMask; LOOP_LEN] {
        &self.0
    }

    /// The four pure phases, without the closing repeat
    pub fn distinct(&self) -> &[PhaseMask] {
        &self.0[..DISTINCT_PHASES]
    }

    /// Same phases walked in the opposite order, closed on the last phase
    ///
    /// `[B, K, R, Y, B]` becomes `[Y, R, K, B, Y]`.
    pub const fn reversed(&self) -> Self {
        let m = &self.0;
        Self::closed([m[3], m[2], m[1], m[0]])
    }

    /// Check the loop invariants
    ///
    /// - the last mask repeats the first
    /// - every distinct phase energizes exactly one coil
    /// - the four phases together cover all four coils
    /// - each half-step transition (`m[i]` to `m[i] | m[i + 1]` to
    ///   `m[i + 1]`) changes exactly one coil
    pub const fn is_well_formed(&self) -> bool {
        let m = &self.0;
        if m[0].bits() != m[DISTINCT_PHASES].bits() {
            return false;
        }

        let mut covered = PhaseMask::NONE;
        let mut i = 0;
        while i < DISTINCT_PHASES {
            let here = m[i];
            let next = m[i + 1];
            if !here.is_single_coil() {
                return false;
            }
            let induced = here.union(next);
            if here.hamming_distance(induced) != 1 || induced.hamming_distance(next) != 1 {
                return false;
            }
            covered = covered.union(here);
            i += 1;
        }

        covered.energized_count() == DISTINCT_PHASES as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::phase::mask::Coil;

    const B: PhaseMask = Coil::Blue.mask();
    const K: PhaseMask = Coil::Black.mask();
    const R: PhaseMask = Coil::Red.mask();
    const Y: PhaseMask = Coil::Yellow.mask();

    #[test]
    fn test_closed_repeats_first_phase() {
        let seq = DirectionSequence::closed([B, K, R, Y]);
        assert_eq!(seq.as_array(), &[B, K, R, Y, B]);
        assert_eq!(seq.get(LOOP_LEN - 1), seq.get(0));
        assert_eq!(seq.distinct(), &[B, K, R, Y]);
    }

    #[test]
    fn test_reversed() {
        let seq = DirectionSequence::closed([B, K, R, Y]);
        let rev = seq.reversed();
        assert_eq!(rev.as_array(), &[Y, R, K, B, Y]);
        assert_eq!(rev.reversed(), seq);
    }

    #[test]
    fn test_well_formed() {
        assert!(DirectionSequence::closed([B, K, R, Y]).is_well_formed());
        assert!(DirectionSequence::closed([Y, R, K, B]).is_well_formed());
    }

    #[test]
    fn test_open_loop_rejected() {
        let seq = DirectionSequence::new([B, K, R, Y, Y]);
        assert!(!seq.is_well_formed());
    }

    #[test]
    fn test_repeated_phase_rejected() {
        // B -> B yields an induced state identical to the pure phase
        let seq = DirectionSequence::closed([B, B, R, Y]);
        assert!(!seq.is_well_formed());

        // Closed and single-coil, but never reaches red or yellow
        let seq = DirectionSequence::closed([B, K, B, K]);
        assert!(!seq.is_well_formed());
    }

    #[test]
    fn test_multi_coil_phase_rejected() {
        let seq = DirectionSequence::closed([B | K, R, Y, B]);
        assert!(!seq.is_well_formed());
    }
}
