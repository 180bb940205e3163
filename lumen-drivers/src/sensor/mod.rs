//! Distance sensor implementations

pub mod pulse_timer;

pub use pulse_timer::{PulseTimer, PulseTimerConfig};
