//! Indicator output trait

/// Trait for the binary status indicator (LED or relay)
pub trait IndicatorOutput {
    /// Turn the indicator on or off
    fn set_on(&mut self, on: bool);

    /// Check if the indicator is currently on
    fn is_on(&self) -> bool;
}
