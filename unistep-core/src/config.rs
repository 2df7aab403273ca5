//! Motion configuration
//!
//! Burst length and step hold time are fixed at build time. The firmware
//! always runs [`MotionConfig::STANDARD`]; other values exist for host
//! tests and alternative boards.

use crate::sequencer::WRITES_PER_CYCLE;

/// Sequencer cycles per direction burst
pub const BURST_CYCLES: u16 = 21;

/// Time each mask is held on the port, in milliseconds
pub const STEP_DELAY_MS: u32 = 20;

/// Direction burst parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MotionConfig {
    /// Half-step cycles run before reversing
    pub burst_cycles: u16,
    /// Hold time after every port write (ms), shared by both directions
    pub step_delay_ms: u32,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl MotionConfig {
    /// 21 cycles per burst, 20 ms per mask
    pub const STANDARD: Self = Self {
        burst_cycles: BURST_CYCLES,
        step_delay_ms: STEP_DELAY_MS,
    };

    /// Port writes issued by one direction burst
    pub const fn writes_per_burst(&self) -> u32 {
        self.burst_cycles as u32 * WRITES_PER_CYCLE as u32
    }

    /// Time spent in one direction burst (ms)
    pub const fn burst_duration_ms(&self) -> u32 {
        self.writes_per_burst() * self.step_delay_ms
    }
}
