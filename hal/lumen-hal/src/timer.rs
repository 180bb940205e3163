//! Pulse timing abstraction
//!
//! The echo pulse is measured with a free-running counter that is reset on
//! the rising edge and read on the falling edge. The counter ticks at
//! [`TICKS_PER_US`] ticks per microsecond, so a tick count halved gives the
//! pulse width in microseconds.

/// Counter resolution: two ticks per microsecond (0.5 µs per tick)
pub const TICKS_PER_US: u32 = 2;

/// Free-running tick counter used to time one pulse
///
/// A counter is started, sampled any number of times while the pulse is in
/// progress, and stopped once. Implementations must saturate instead of
/// wrapping: a pulse longer than `u32::MAX` ticks reads as `u32::MAX`.
pub trait TickCounter {
    /// Reset the count to zero and start counting
    fn start(&mut self);

    /// Ticks elapsed since the last `start`
    fn elapsed(&self) -> u32;

    /// Stop counting and return the final tick count
    fn stop(&mut self) -> u32;
}
