//! Board constants: serial line, clock and pin assignment.
//!
//! Pin numbers here are documentation for the wiring; `main` claims the
//! matching `embassy_rp` peripherals by name.

use report_core::config::DEFAULT_TICK_HZ;
use report_core::ReporterConfig;

/// Serial line rate (8N1).
pub const BAUD_RATE: u32 = 115_200;

/// Rate of the reporter tick.
///
/// One 8N1 frame at [`BAUD_RATE`] takes about 87 µs, so at 10 kHz every byte
/// is done before the dispatcher next samples `ready`.
pub const TICK_HZ: u32 = DEFAULT_TICK_HZ;

/// Timing for the on-board reporter.
pub const REPORTER: ReporterConfig = ReporterConfig::from_tick_rate(TICK_HZ);

/// How long the status LED stays lit per accepted press (ms).
pub const LED_FLASH_MS: u64 = 60;

/// UART0 TX.
pub const PIN_UART_TX: u8 = 0;

/// Direction buttons in `Buttons` bit order (left, right, up, down), then
/// the centre button which acts as reset.
pub const PIN_BUTTONS: [u8; 5] = [2, 3, 4, 5, 22];

/// Switch bits 0 to 15.
pub const PIN_SWITCHES: [u8; 16] = [6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21];

/// On-board LED of the Pico.
pub const PIN_LED: u8 = 25;
