//! GPIO pin abstractions
//!
//! Provides traits for the digital pins the sensor and indicator use:
//! the trigger and indicator outputs, and the echo input.

/// Digital output pin
///
/// Implementations drive the physical pin. Writes are infallible on every
/// supported chip, so the trait does not return `Result`.
pub trait OutputPin {
    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently driven high
    fn is_set_high(&self) -> bool;
}

/// Digital input pin
///
/// Takes `&self`: reading a level has no side effects on the pin.
pub trait InputPin {
    /// Check if the pin reads high (logic 1)
    fn is_high(&self) -> bool;

    /// Check if the pin reads low (logic 0)
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct LatchPin {
        high: bool,
    }

    impl OutputPin for LatchPin {
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

    impl InputPin for LatchPin {
        fn is_high(&self) -> bool {
            self.high
        }
    }

    #[test]
    fn test_set_state_drives_level() {
        let mut pin = LatchPin { high: false };

        pin.set_state(true);
        assert!(pin.is_set_high());
        assert!(pin.is_high());

        pin.set_state(false);
        assert!(!pin.is_set_high());
        assert!(pin.is_low());
    }
}
