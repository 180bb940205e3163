//! Ultrasonic echo pulse timer
//!
//! Drives an HC-SR04 style sensor: a short trigger pulse makes the sensor
//! emit a burst, then hold its echo line high for as long as the sound
//! took to come back. Every wait is a bounded poll loop, so a missing or
//! stuck echo can never hang the caller.
//!
//! ```text
//! TRIG  ──┐10µs┌─15µs─┐
//!         └────┘      └──────────────────────────
//! ECHO  ─────────────────────┐  width  ┌─────────
//!                            └─────────┘
//!                 wait-for-rise  wait-for-fall
//! ```

use embedded_hal::delay::DelayNs;
use lumen_core::traits::DistanceSensor;
use lumen_hal::{InputPin, OutputPin, TickCounter, TICKS_PER_US};
use lumen_protocol::reading::{Reading, NO_OBJECT_PULSE_US, NO_OBSTACLE, US_PER_CM};

/// Trigger line held low before the pulse (µs)
const TRIGGER_LEAD_US: u32 = 10;

/// Trigger pulse width (µs); the sensor needs at least 10
const TRIGGER_PULSE_US: u32 = 15;

/// Settle time after the trigger falls (µs)
const TRIGGER_SETTLE_US: u32 = 20;

/// Largest distance that can't be confused with a sentinel code
const MAX_REPORTABLE_CM: u32 = NO_OBSTACLE as u32 - 1;

/// Pulse timer tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PulseTimerConfig {
    /// Maximum pin polls while waiting for each echo edge
    pub poll_limit: u32,
    /// Echo width in ticks beyond which no object is considered present
    pub no_object_ticks: u32,
    /// Pause before each trigger so echoes of the previous ping die out (ms)
    pub quiet_period_ms: u32,
}

impl Default for PulseTimerConfig {
    fn default() -> Self {
        Self {
            poll_limit: 600_000,
            no_object_ticks: NO_OBJECT_PULSE_US * TICKS_PER_US,
            quiet_period_ms: 50,
        }
    }
}

/// Echo sensor driven by bit-banged trigger and polled echo
pub struct PulseTimer<T, E, C, D> {
    trigger: T,
    echo: E,
    counter: C,
    delay: D,
    config: PulseTimerConfig,
}

impl<T, E, C, D> PulseTimer<T, E, C, D>
where
    T: OutputPin,
    E: InputPin,
    C: TickCounter,
    D: DelayNs,
{
    /// Create a pulse timer with the trigger line idle low
    pub fn new(mut trigger: T, echo: E, counter: C, delay: D, config: PulseTimerConfig) -> Self {
        trigger.set_low();
        Self {
            trigger,
            echo,
            counter,
            delay,
            config,
        }
    }

    /// Current configuration
    pub fn config(&self) -> &PulseTimerConfig {
        &self.config
    }

    fn fire_trigger(&mut self) {
        self.trigger.set_low();
        self.delay.delay_us(TRIGGER_LEAD_US);
        self.trigger.set_high();
        self.delay.delay_us(TRIGGER_PULSE_US);
        self.trigger.set_low();
        self.delay.delay_us(TRIGGER_SETTLE_US);
    }

    /// Poll until the echo goes high; false if the poll bound ran out
    fn wait_for_rise(&mut self) -> bool {
        (0..self.config.poll_limit).any(|_| self.echo.is_high())
    }

    /// Poll until the echo falls or the pulse is too long to be an object
    ///
    /// Returns false only if the poll bound ran out with the echo still high
    /// and the pulse still short of the no-object threshold.
    fn wait_for_fall(&mut self) -> bool {
        for _ in 0..self.config.poll_limit {
            if self.echo.is_low() {
                return true;
            }
            if self.counter.elapsed() > self.config.no_object_ticks {
                return true;
            }
        }
        false
    }

    fn ticks_to_reading(&self, ticks: u32) -> Reading {
        if ticks > self.config.no_object_ticks {
            return Reading::NoObstacle;
        }
        let cm = (ticks / TICKS_PER_US) / US_PER_CM;
        Reading::Distance(cm.min(MAX_REPORTABLE_CM) as u16)
    }
}

impl<T, E, C, D> DistanceSensor for PulseTimer<T, E, C, D>
where
    T: OutputPin,
    E: InputPin,
    C: TickCounter,
    D: DelayNs,
{
    fn measure(&mut self) -> Reading {
        self.delay.delay_ms(self.config.quiet_period_ms);
        self.fire_trigger();

        if !self.wait_for_rise() {
            return Reading::Timeout;
        }

        self.counter.start();
        let fell = self.wait_for_fall();
        let ticks = self.counter.stop();

        if !fell {
            return Reading::Timeout;
        }
        self.ticks_to_reading(ticks)
    }
}
