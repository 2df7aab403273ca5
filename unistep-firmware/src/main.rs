//! Unistep - Half-Step Stepper Oscillator Firmware
//!
//! Main firmware binary for RP2040-based boards. Drives a 4-phase unipolar
//! stepper back and forth: 21 half-step cycles clockwise, 21 cycles
//! counter-clockwise, forever.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_time::Delay;
use {defmt_rtt as _, panic_probe as _};

use unistep_core::config::MotionConfig;
use unistep_core::motion::MotionController;
use unistep_core::phase::PhaseTable;

mod board;

/// Main entry point
#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("Unistep firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());

    // Coil lines as outputs, port cleared
    let port = board::init_coil_port(p);
    info!("Coil port initialized");

    let config = MotionConfig::STANDARD;
    info!(
        "Oscillating: {} cycles per burst, {}ms per half-step",
        config.burst_cycles, config.step_delay_ms
    );

    // Blocking delay: the controller owns the CPU, no other tasks run
    let mut controller = MotionController::new(port, Delay, PhaseTable::STANDARD, config);
    controller.run()
}
