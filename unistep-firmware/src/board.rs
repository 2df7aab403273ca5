//! Board wiring
//!
//! ULN2003 driver board on a Raspberry Pi Pico:
//!
//! | Port bit | Coil   | Driver input | GPIO |
//! |----------|--------|--------------|------|
//! | 0        | Blue   | IN1          | 2    |
//! | 1        | Black  | IN2          | 3    |
//! | 2        | Red    | IN3          | 4    |
//! | 3        | Yellow | IN4          | 5    |

use embassy_rp::gpio::{Level, Output};
use embassy_rp::Peripherals;
use unistep_drivers::port::CoilPins;

/// Coil port type for this board
pub type CoilPort = CoilPins<Output<'static>, Output<'static>, Output<'static>, Output<'static>>;

/// Configure the coil lines as outputs, all low
pub fn init_coil_port(p: Peripherals) -> CoilPort {
    CoilPins::new(
        Output::new(p.PIN_2, Level::Low),
        Output::new(p.PIN_3, Level::Low),
        Output::new(p.PIN_4, Level::Low),
        Output::new(p.PIN_5, Level::Low),
    )
}
