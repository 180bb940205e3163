//! Board wiring
//!
//! Raspberry Pi Pico: sensor on GPIO2/3, onboard LED as the indicator,
//! host link on UART0 (GPIO0 TX, GPIO1 RX).

use embassy_rp::gpio::{Input, Level, Output, Pull};
use embassy_rp::peripherals::{PIN_2, PIN_25, PIN_3};
use embassy_rp::Peri;
use embassy_time::Delay;

use lumen_core::ControlEndpoint;
use lumen_drivers::indicator::GpioIndicator;
use lumen_drivers::sensor::{PulseTimer, PulseTimerConfig};
use lumen_hal_rp2040::{RpInputPin, RpOutputPin, RpTickCounter};

/// Link baud rate
pub const LINK_BAUD: u32 = 115_200;

/// Indicator LED is wired active-high
const INDICATOR_INVERTED: bool = false;

pub type Sensor = PulseTimer<RpOutputPin<'static>, RpInputPin<'static>, RpTickCounter, Delay>;
pub type Indicator = GpioIndicator<RpOutputPin<'static>>;
pub type Endpoint = ControlEndpoint<Sensor, Indicator>;

/// Build the control endpoint from the sensor and indicator pins
pub fn endpoint(
    trigger: Peri<'static, PIN_2>,
    echo: Peri<'static, PIN_3>,
    led: Peri<'static, PIN_25>,
) -> Endpoint {
    let trigger = RpOutputPin::new(Output::new(trigger, Level::Low));
    // Sensor drives echo push-pull; pull-down keeps it low if unplugged
    let echo = RpInputPin::new(Input::new(echo, Pull::Down));
    let sensor = PulseTimer::new(
        trigger,
        echo,
        RpTickCounter::new(),
        Delay,
        PulseTimerConfig::default(),
    );

    let led = RpOutputPin::new(Output::new(led, Level::Low));
    let indicator = GpioIndicator::new(led, INDICATOR_INVERTED);

    ControlEndpoint::new(sensor, indicator)
}
