//! Hardware abstraction traits
//!
//! These traits define the interface between the control logic
//! and hardware-specific implementations.

pub mod indicator;
pub mod sensor;

pub use indicator::IndicatorOutput;
pub use sensor::DistanceSensor;
