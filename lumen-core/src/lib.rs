//! Board-agnostic core logic for the viewer-distance sensor
//!
//! This crate contains all logic that does not depend on specific
//! hardware or on the host operating system:
//!
//! - Hardware abstraction traits (distance sensor, indicator output)
//! - The firmware control endpoint that services link requests
//! - The sample window used to smooth readings
//! - The three-zone viewing-distance policy

#![no_std]
#![deny(unsafe_code)]

pub mod endpoint;
pub mod filter;
pub mod traits;
pub mod zone;

pub use endpoint::ControlEndpoint;
pub use filter::DistanceAverager;
pub use zone::{Brightness, BrightnessChange, IndicatorState, Zone, ZoneController, ZoneDecision};
