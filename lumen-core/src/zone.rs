//! Viewing-distance zone policy
//!
//! Maps a smoothed distance to an indicator state and a brightness change:
//!
//! ```text
//!   0 ──── 20 ─────────────── 100 ──────────▶ cm
//!    Near  │     Viewing       │    Far
//!   OFF    │  OFF, ramp 20-100%│  ON, 0%
//!   keep   │                   │
//! ```
//!
//! The thresholds themselves (exactly 20 and exactly 100) belong to no
//! zone and produce no decision.

/// Closest distance that still counts as viewing (exclusive, cm)
pub const MIN_VIEW_DIST_CM: u16 = 20;

/// Furthest distance that still counts as viewing (exclusive, cm)
pub const MAX_VIEW_DIST_CM: u16 = 100;

/// Ramp floor in percent
pub const MIN_BRIGHTNESS_PCT: u8 = 20;

/// Ramp ceiling in percent
pub const MAX_BRIGHTNESS_PCT: u8 = 100;

/// Ramp slope in percent per centimetre beyond [`MIN_VIEW_DIST_CM`]
pub const BRIGHTNESS_STEP_PCT: u8 = 1;

/// Display brightness level in hundredths
///
/// Held as an integer percentage so ramp values are exact; converted to
/// a `0.0..=1.0` float only when handed to an actuator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Brightness(u8);

impl Brightness {
    /// Fully dark
    pub const OFF: Self = Self(0);

    /// Full brightness
    pub const FULL: Self = Self(100);

    /// Create a brightness from a percentage, clamped to 0..=100
    pub const fn from_percent(pct: u8) -> Self {
        if pct > 100 {
            Self(100)
        } else {
            Self(pct)
        }
    }

    /// Level in percent
    pub const fn percent(self) -> u8 {
        self.0
    }

    /// Level as a fraction in `0.0..=1.0`
    pub fn as_f32(self) -> f32 {
        self.0 as f32 / 100.0
    }
}

/// Indicator output state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum IndicatorState {
    Off,
    On,
}

impl IndicatorState {
    pub fn is_on(self) -> bool {
        self == IndicatorState::On
    }
}

/// What to do with the display brightness
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BrightnessChange {
    /// Leave brightness as it is
    Keep,
    /// Set brightness to the given level
    Set(Brightness),
}

/// Distance band a smoothed reading falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Zone {
    /// Closer than [`MIN_VIEW_DIST_CM`]
    Near,
    /// Strictly between the two thresholds
    Viewing,
    /// Further than [`MAX_VIEW_DIST_CM`]
    Far,
}

impl Zone {
    /// Classify a distance, or `None` if it sits exactly on a threshold
    pub fn classify(distance_cm: u16) -> Option<Self> {
        if distance_cm < MIN_VIEW_DIST_CM {
            Some(Zone::Near)
        } else if distance_cm > MIN_VIEW_DIST_CM && distance_cm < MAX_VIEW_DIST_CM {
            Some(Zone::Viewing)
        } else if distance_cm > MAX_VIEW_DIST_CM {
            Some(Zone::Far)
        } else {
            None
        }
    }
}

/// Actuator state for one control cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ZoneDecision {
    pub zone: Zone,
    pub indicator: IndicatorState,
    pub brightness: BrightnessChange,
}

/// Three-zone policy with fixed thresholds
#[derive(Debug, Clone, Copy, Default)]
pub struct ZoneController;

impl ZoneController {
    pub const fn new() -> Self {
        Self
    }

    /// Decide actuator state for a smoothed distance
    ///
    /// Returns `None` at exactly [`MIN_VIEW_DIST_CM`] or
    /// [`MAX_VIEW_DIST_CM`]; nothing should be actuated in that case.
    pub fn decide(&self, distance_cm: u16) -> Option<ZoneDecision> {
        let zone = Zone::classify(distance_cm)?;

        let decision = match zone {
            Zone::Near => ZoneDecision {
                zone,
                indicator: IndicatorState::Off,
                brightness: BrightnessChange::Keep,
            },
            Zone::Viewing => ZoneDecision {
                zone,
                indicator: IndicatorState::Off,
                brightness: BrightnessChange::Set(Self::ramp(distance_cm)),
            },
            Zone::Far => ZoneDecision {
                zone,
                indicator: IndicatorState::On,
                brightness: BrightnessChange::Set(Brightness::OFF),
            },
        };
        Some(decision)
    }

    /// Linear ramp from the floor at [`MIN_VIEW_DIST_CM`], clamped to the ceiling
    fn ramp(distance_cm: u16) -> Brightness {
        let above = distance_cm.saturating_sub(MIN_VIEW_DIST_CM) as u32;
        let pct = MIN_BRIGHTNESS_PCT as u32 + above * BRIGHTNESS_STEP_PCT as u32;
        let pct = pct.clamp(MIN_BRIGHTNESS_PCT as u32, MAX_BRIGHTNESS_PCT as u32);
        Brightness::from_percent(pct as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decide(d: u16) -> Option<ZoneDecision> {
        ZoneController::new().decide(d)
    }

    #[test]
    fn test_near_keeps_brightness() {
        let decision = decide(10).unwrap();
        assert_eq!(decision.zone, Zone::Near);
        assert_eq!(decision.indicator, IndicatorState::Off);
        assert_eq!(decision.brightness, BrightnessChange::Keep);
    }

    #[test]
    fn test_viewing_ramp() {
        let decision = decide(25).unwrap();
        assert_eq!(decision.indicator, IndicatorState::Off);
        assert_eq!(
            decision.brightness,
            BrightnessChange::Set(Brightness::from_percent(25))
        );

        match decide(60).unwrap().brightness {
            BrightnessChange::Set(b) => assert_eq!(b.as_f32(), 0.60f32),
            other => panic!("unexpected {:?}", other),
        }
        match decide(99).unwrap().brightness {
            BrightnessChange::Set(b) => assert_eq!(b.as_f32(), 0.99f32),
            other => panic!("unexpected {:?}", other),
        }
        match decide(21).unwrap().brightness {
            BrightnessChange::Set(b) => assert_eq!(b.percent(), 21),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_far_turns_indicator_on_and_darkens() {
        let decision = decide(150).unwrap();
        assert_eq!(decision.zone, Zone::Far);
        assert!(decision.indicator.is_on());
        assert_eq!(decision.brightness, BrightnessChange::Set(Brightness::OFF));
        assert_eq!(Brightness::OFF.as_f32(), 0.0);
    }

    #[test]
    fn test_thresholds_produce_no_decision() {
        assert_eq!(decide(MIN_VIEW_DIST_CM), None);
        assert_eq!(decide(MAX_VIEW_DIST_CM), None);
    }

    #[test]
    fn test_brightness_clamps() {
        assert_eq!(Brightness::from_percent(250), Brightness::FULL);
        assert_eq!(Brightness::FULL.as_f32(), 1.0);
    }
}
