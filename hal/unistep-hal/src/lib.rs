//! Unistep Hardware Abstraction Layer
//!
//! This crate defines the hardware-facing traits that the stepping logic
//! consumes. Chip-specific code implements them; the core never touches a
//! register directly, so it can be exercised on the host with a test double.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (unistep-firmware)         │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  unistep-core (phase sequencing)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  unistep-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  unistep-drivers (pin-backed port)      │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`port::OutputPort`] - Multi-line output register
//!
//! The blocking delay primitive is `embedded_hal::delay::DelayNs`, so it is
//! not redefined here.

#![no_std]
#![deny(unsafe_code)]

pub mod port;

pub use port::{line_mask, OutputPort};
