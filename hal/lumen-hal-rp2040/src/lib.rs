//! RP2040-specific HAL for the sensor firmware
//!
//! This crate provides RP2040 implementations of the shared `lumen-hal`
//! traits on top of embassy-rp:
//!
//! - GPIO output and input pins
//! - Pulse tick counter backed by the embassy time driver

#![no_std]

pub mod gpio;
pub mod timer;

pub use gpio::{RpInputPin, RpOutputPin};
pub use timer::RpTickCounter;

// Re-export shared traits from lumen-hal for convenience
pub use lumen_hal::{InputPin, OutputPin, TickCounter};
