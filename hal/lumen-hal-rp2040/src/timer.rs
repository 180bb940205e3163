//! Pulse tick counter
//!
//! Uses the embassy time driver (RP2040 TIMER peripheral, 1 MHz) as the
//! time base and scales it to the `lumen-hal` tick rate.

use embassy_time::Instant;
use lumen_hal::TICKS_PER_US;

/// Tick counter backed by `embassy_time::Instant`
pub struct RpTickCounter {
    started: Option<Instant>,
    stopped_ticks: u32,
}

impl Default for RpTickCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl RpTickCounter {
    pub const fn new() -> Self {
        Self {
            started: None,
            stopped_ticks: 0,
        }
    }

    fn ticks_since(start: Instant) -> u32 {
        let us = Instant::now().saturating_duration_since(start).as_micros();
        let ticks = us.saturating_mul(TICKS_PER_US as u64);
        u32::try_from(ticks).unwrap_or(u32::MAX)
    }
}

impl lumen_hal::TickCounter for RpTickCounter {
    fn start(&mut self) {
        self.started = Some(Instant::now());
        self.stopped_ticks = 0;
    }

    fn elapsed(&self) -> u32 {
        match self.started {
            Some(start) => Self::ticks_since(start),
            None => self.stopped_ticks,
        }
    }

    fn stop(&mut self) -> u32 {
        if let Some(start) = self.started.take() {
            self.stopped_ticks = Self::ticks_since(start);
        }
        self.stopped_ticks
    }
}
