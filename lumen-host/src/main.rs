//! Lumen host daemon
//!
//! Usage: `lumen-host [CONFIG.toml]`

use std::path::PathBuf;

use anyhow::{Context, Result};
use log::info;

use lumen_host::discovery::open_port;
use lumen_host::{
    ControlLoop, DeviceFinder, FramedLink, HostConfig, HostPoller, SerialPortFinder,
    XrandrBrightness,
};

fn main() -> Result<()> {
    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => HostConfig::load(&path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => HostConfig::default(),
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    info!("Lumen host v{}", env!("CARGO_PKG_VERSION"));

    let device = &config.device;
    let path = match &device.port {
        Some(port) => port.clone(),
        None => SerialPortFinder
            .find(&device.identity())
            .context("locating the sensor")?,
    };
    let port = open_port(&path, device).context("opening the sensor port")?;
    info!("Sensor link open on {} at {} baud", path, device.baud_rate);

    let poller = HostPoller::new(FramedLink::new(port));
    let actuator = XrandrBrightness::new(&config.display);
    let mut control = ControlLoop::new(poller, actuator);

    control.run(config.poll.interval())
}
