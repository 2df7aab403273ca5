//! Motion control
//!
//! Alternating clockwise and counter-clockwise bursts, run forever.

pub mod controller;

pub use controller::MotionController;
