//! Serial button and switch reporter for RP2040.
//!
//! This crate provides the board side of the reporter: it samples the
//! buttons and switches, runs the platform-agnostic [`report_core`] pipeline
//! once per tick, and streams the resulting messages out of UART0.
//!
//! # Overview
//!
//! The firmware runs on a Raspberry Pi Pico (RP2040) and:
//! 1. Prints a banner at power-up and whenever the centre button is pressed
//! 2. Waits for a direction button press
//! 3. Prints which button it was and the 16 switches in binary and hex
//!
//! # Hardware Configuration
//!
//! | Function     | GPIO   | Description |
//! |--------------|--------|-------------|
//! | UART0 TX     | 0      | Serial output (115200 baud, 8N1) |
//! | Left         | 2      | Direction button, active low |
//! | Right        | 3      | Direction button, active low |
//! | Up           | 4      | Direction button, active low |
//! | Down         | 5      | Direction button, active low |
//! | Switches     | 6..=21 | Switch bits 0 to 15, active low |
//! | Centre       | 22     | Reset button, active low |
//! | LED          | 25     | On-board LED (press indicator) |
//!
//! # Architecture
//!
//! Two Embassy tasks:
//!
//! - **Reporter Task**: Ticks the [`Reporter`](report_core::Reporter) from an
//!   `embassy_time::Ticker` at [`config::TICK_HZ`]
//! - **LED Task**: Flashes the LED for every accepted press
//!
//! Accepted presses reach the LED task through an Embassy
//! [`Signal`](embassy_sync::signal::Signal), so a slow LED never holds up
//! the serial output.
//!
//! # Modules
//!
//! - [`board`]: GPIO sampling ([`BoardInputs`])
//! - [`uart_output`]: UART byte transmitter ([`UartTransmitter`])
//! - [`config`]: Baud rate, tick rate and pin map
//!
//! # Features
//!
//! - **`dev-panic`** (default): Use `panic-probe` for development (prints panic info via RTT)
//! - **`prod-panic`**: Use `panic-reset` for production (silent reset)
//! - **`log-presses`**: Log every accepted press over RTT

#![no_std]

#[cfg(all(feature = "dev-panic", feature = "prod-panic"))]
compile_error!("Cannot enable both `dev-panic` and `prod-panic` features - they install conflicting panic handlers");

// Re-export core types for convenience
pub use report_core::{
    Button, Buttons, ByteTransmitter, Debouncer, DispatchState, InputSample, Reporter,
    ReporterConfig, TickReport,
};

pub mod board;
pub mod config;
pub mod uart_output;

pub use board::BoardInputs;
pub use uart_output::UartTransmitter;
