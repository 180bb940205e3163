//! GPIO pin wrappers
//!
//! Adapts embassy-rp's `Output` and `Input` drivers to the `lumen-hal`
//! pin traits so the board-agnostic drivers can use them.

use embassy_rp::gpio::{Input, Output};

/// Push-pull output pin
pub struct RpOutputPin<'d> {
    pin: Output<'d>,
}

impl<'d> RpOutputPin<'d> {
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }
}

impl lumen_hal::OutputPin for RpOutputPin<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}

/// Digital input pin
pub struct RpInputPin<'d> {
    pin: Input<'d>,
}

impl<'d> RpInputPin<'d> {
    pub fn new(pin: Input<'d>) -> Self {
        Self { pin }
    }
}

impl lumen_hal::InputPin for RpInputPin<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}
