//! GPIO sampling of the button and switch lines.

use embedded_hal::digital::InputPin;
use report_core::{Buttons, InputSample};

/// The 21 input lines of the board.
///
/// All lines are wired active-low against the internal pull-ups: a closed
/// button or switch reads as a set bit.
pub struct BoardInputs<P> {
    buttons: [P; 5],
    switches: [P; 16],
}

impl<P: InputPin> BoardInputs<P> {
    /// `buttons` in `Buttons` bit order, `switches` from bit 0 upward.
    pub fn new(buttons: [P; 5], switches: [P; 16]) -> Self {
        Self { buttons, switches }
    }

    /// Read every line once.
    ///
    /// A pin that fails to read counts as open.
    pub fn sample(&mut self) -> InputSample {
        let mut sample = InputSample::default();
        for (bit, pin) in self.buttons.iter_mut().enumerate() {
            if pin.is_low().unwrap_or(false) {
                sample.buttons |= Buttons(1 << bit);
            }
        }
        for (bit, pin) in self.switches.iter_mut().enumerate() {
            if pin.is_low().unwrap_or(false) {
                sample.switches |= 1 << bit;
            }
        }
        sample
    }
}
