//! Host-side control loop for the viewer-distance sensor
//!
//! Polls the sensor over a serial link, smooths the readings over a fixed
//! window, and applies the three-zone policy to the indicator and the
//! display brightness.
//!
//! ```text
//! ┌────────────┐  frames  ┌────────────┐  cm  ┌───────────┐  mean  ┌────────────┐
//! │ FramedLink │ ◀──────▶ │ HostPoller │ ───▶ │ Averager  │ ─────▶ │ ZoneCtrl   │
//! └────────────┘          └────────────┘      └───────────┘        └─────┬──────┘
//!       ▲                                                                 │
//!       └─────────────── indicator on/off ◀── scoped worker ──▶ xrandr ◀──┘
//! ```

pub mod actuator;
pub mod config;
pub mod controller;
pub mod discovery;
pub mod error;
pub mod link;
pub mod poller;

pub use actuator::{BrightnessActuator, XrandrBrightness};
pub use config::HostConfig;
pub use controller::{ControlLoop, CycleOutcome, LoopStats};
pub use discovery::{DeviceFinder, DeviceIdentity, SerialPortFinder};
pub use error::{ActuatorError, ConfigError, DiscoveryError, LinkError};
pub use link::{ClearInput, FramedLink, Link};
pub use poller::HostPoller;
