//! Board-agnostic core logic for the stepper oscillator firmware
//!
//! This crate contains all stepping logic that does not depend on
//! specific hardware implementations:
//!
//! - Phase table (coil masks and direction sequences)
//! - Phase sequencer (one half-step cycle per call)
//! - Motion controller (alternating direction bursts, forever)
//! - Motion configuration constants
//!
//! Hardware is reached only through [`unistep_hal::OutputPort`] and
//! [`embedded_hal::delay::DelayNs`].

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod motion;
pub mod phase;
pub mod sequencer;

#[cfg(test)]
mod testing;
