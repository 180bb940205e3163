//! Distance readings and their sentinel encodings
//!
//! A measurement either yields a distance in whole centimetres or one of
//! two sentinels. The sentinels keep the raw 16-bit codes the sensor has
//! always used, so they can never be mistaken for a distance.

/// Raw code: the echo edge was never observed within the poll bound
pub const TIMEOUT_HIGH: u16 = 0xFFFF;

/// Raw code: the echo stayed high past the no-object threshold
pub const NO_OBSTACLE: u16 = 0xFFFE;

/// Echo round-trip microseconds per centimetre of distance
///
/// Sound travels ~343 m/s; the pulse covers the distance twice, giving
/// ~58 µs per centimetre.
pub const US_PER_CM: u32 = 58;

/// Echo width beyond which no object is considered present (µs)
pub const NO_OBJECT_PULSE_US: u32 = 30_000;

/// Largest distance a valid reading can report (cm)
pub const MAX_DISTANCE_CM: u16 = (NO_OBJECT_PULSE_US / US_PER_CM) as u16;

/// Distance substituted for a sentinel when a number is required (cm)
///
/// One past [`MAX_DISTANCE_CM`]: further than anything measurable, so the
/// zone policy files it under "far".
pub const FAR_DISTANCE_CM: u16 = MAX_DISTANCE_CM + 1;

/// Outcome of one distance measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Reading {
    /// Measured distance in centimetres
    Distance(u16),
    /// No echo edge within the poll bound
    Timeout,
    /// Echo longer than the no-object threshold
    NoObstacle,
}

impl Reading {
    /// Decode a raw 16-bit code (sentinel or centimetres)
    pub fn from_raw(raw: u16) -> Self {
        match raw {
            TIMEOUT_HIGH => Reading::Timeout,
            NO_OBSTACLE => Reading::NoObstacle,
            cm => Reading::Distance(cm),
        }
    }

    /// Encode as a raw 16-bit code
    pub fn raw(self) -> u16 {
        match self {
            Reading::Distance(cm) => cm,
            Reading::Timeout => TIMEOUT_HIGH,
            Reading::NoObstacle => NO_OBSTACLE,
        }
    }

    /// Distance in centimetres, or `None` for a sentinel
    pub fn centimeters(self) -> Option<u16> {
        match self {
            Reading::Distance(cm) => Some(cm),
            _ => None,
        }
    }

    /// Distance in centimetres with sentinels mapped to [`FAR_DISTANCE_CM`]
    pub fn centimeters_or_far(self) -> u16 {
        self.centimeters().unwrap_or(FAR_DISTANCE_CM)
    }

    /// Check whether this is a real measurement
    pub fn is_valid(self) -> bool {
        matches!(self, Reading::Distance(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_codes() {
        assert_eq!(Reading::from_raw(0xFFFF), Reading::Timeout);
        assert_eq!(Reading::from_raw(0xFFFE), Reading::NoObstacle);
        assert_eq!(Reading::from_raw(45), Reading::Distance(45));
        assert_eq!(Reading::Timeout.raw(), TIMEOUT_HIGH);
        assert_eq!(Reading::NoObstacle.raw(), NO_OBSTACLE);
    }

    #[test]
    fn test_sentinels_read_as_far() {
        assert_eq!(MAX_DISTANCE_CM, 517);
        assert_eq!(Reading::Timeout.centimeters(), None);
        assert_eq!(Reading::Timeout.centimeters_or_far(), FAR_DISTANCE_CM);
        assert_eq!(Reading::NoObstacle.centimeters_or_far(), FAR_DISTANCE_CM);
        assert_eq!(Reading::Distance(42).centimeters_or_far(), 42);
        assert!(!Reading::NoObstacle.is_valid());
    }
}
