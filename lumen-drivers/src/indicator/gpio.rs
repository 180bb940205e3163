//! GPIO indicator output
//!
//! Status LED or relay driven directly from a GPIO pin.

use lumen_core::traits::IndicatorOutput;
use lumen_hal::OutputPin;

/// GPIO indicator output
///
/// The pin can be configured as active-high (default) or active-low.
pub struct GpioIndicator<P> {
    pin: P,
    /// If true, indicator ON = pin LOW
    inverted: bool,
    on: bool,
}

impl<P: OutputPin> GpioIndicator<P> {
    /// Create a new GPIO indicator, initially off
    ///
    /// # Arguments
    /// - `pin`: The GPIO pin to control
    /// - `inverted`: If true, the indicator is ON when the pin is LOW
    pub fn new(pin: P, inverted: bool) -> Self {
        let mut indicator = Self {
            pin,
            inverted,
            on: false,
        };
        indicator.set_on(false);
        indicator
    }

    pub fn new_active_high(pin: P) -> Self {
        Self::new(pin, false)
    }

    pub fn new_active_low(pin: P) -> Self {
        Self::new(pin, true)
    }
}

impl<P: OutputPin> IndicatorOutput for GpioIndicator<P> {
    fn set_on(&mut self, on: bool) {
        self.on = on;
        self.pin.set_state(on != self.inverted);
    }

    fn is_on(&self) -> bool {
        self.on
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MockPin {
        high: bool,
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            self.high = true;
        }

        fn set_low(&mut self) {
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_active_high_indicator() {
        let mut led = GpioIndicator::new_active_high(MockPin { high: true });
        assert!(!led.is_on());
        assert!(!led.pin.is_set_high());

        led.set_on(true);
        assert!(led.is_on());
        assert!(led.pin.is_set_high());
    }

    #[test]
    fn test_active_low_indicator() {
        let mut relay = GpioIndicator::new_active_low(MockPin { high: false });
        // Off means pin high for active-low
        assert!(!relay.is_on());
        assert!(relay.pin.is_set_high());

        relay.set_on(true);
        assert!(relay.is_on());
        assert!(!relay.pin.is_set_high());
    }
}
