//! UART-backed byte transmitter.

use defmt::error;
use embassy_rp::uart::{Blocking, UartTx};
use report_core::ByteTransmitter;

/// Drives the serial output line from the dispatcher's send pulses.
///
/// Framing is done by the UART peripheral. `ready` is the inverse of the
/// peripheral's busy flag, which stays set until the TX FIFO has drained
/// and the stop bit of the last byte is on the line.
pub struct UartTransmitter<'d> {
    tx: UartTx<'d, Blocking>,
}

impl<'d> UartTransmitter<'d> {
    pub fn new(tx: UartTx<'d, Blocking>) -> Self {
        Self { tx }
    }

    /// Release the underlying UART transmitter.
    pub fn into_inner(self) -> UartTx<'d, Blocking> {
        self.tx
    }
}

impl ByteTransmitter for UartTransmitter<'_> {
    fn is_ready(&self) -> bool {
        !self.tx.busy()
    }

    fn start(&mut self, byte: u8) {
        // Only called when idle, so the FIFO has room and this returns at once.
        if let Err(e) = self.tx.blocking_write(&[byte]) {
            error!("UART write failed, byte {=u8:#x} dropped: {:?}", byte, e);
        }
    }
}
