//! Distance sensor trait

use lumen_protocol::Reading;

/// Trait for distance sensors
///
/// A measurement always produces a [`Reading`]: failures to see an echo
/// are reported through its sentinel variants rather than as errors.
pub trait DistanceSensor {
    /// Take one measurement
    ///
    /// Must return within a bounded time even if the echo never arrives.
    fn measure(&mut self) -> Reading;
}
