//! Output port implementations

pub mod coil_pins;

pub use coil_pins::CoilPins;
