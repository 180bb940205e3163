//! Lumen Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the sensor drivers are written
//! against. Chip-specific crates (currently only RP2040) implement them,
//! and host tests implement them with simulated pins and clocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  lumen-drivers (pulse timer, indicator) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  lumen-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  lumen-hal-   │       │  test doubles │
//! │    rp2040     │       │  (host only)  │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`timer::TickCounter`] - Free-running pulse timer
//!
//! Delays are taken from `embedded_hal::delay::DelayNs` rather than
//! redefined here.

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod timer;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, OutputPin};
pub use timer::{TickCounter, TICKS_PER_US};
