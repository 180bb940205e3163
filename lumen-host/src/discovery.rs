//! Sensor discovery
//!
//! Finds the sensor's serial port by USB identity: vendor/product ids
//! plus the manufacturer and product strings, all four of which must
//! match.

use log::{debug, info};
use serialport::{SerialPort, SerialPortInfo, SerialPortType};

use crate::config::DeviceConfig;
use crate::error::DiscoveryError;

/// USB identity of the sensor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceIdentity {
    pub vendor_id: u16,
    pub product_id: u16,
    pub vendor_name: String,
    pub product_name: String,
}

impl DeviceIdentity {
    fn not_found(&self) -> DiscoveryError {
        DiscoveryError::NotFound {
            vendor_id: self.vendor_id,
            product_id: self.product_id,
            vendor_name: self.vendor_name.clone(),
            product_name: self.product_name.clone(),
        }
    }
}

/// Locates the port a device with a given identity is attached to
pub trait DeviceFinder {
    /// Return the port path of the first matching device
    fn find(&self, identity: &DeviceIdentity) -> Result<String, DiscoveryError>;
}

/// Finder backed by the OS serial port enumeration
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialPortFinder;

impl DeviceFinder for SerialPortFinder {
    fn find(&self, identity: &DeviceIdentity) -> Result<String, DiscoveryError> {
        let ports = serialport::available_ports().map_err(DiscoveryError::Enumerate)?;
        debug!("{} serial ports present", ports.len());
        find_in(&ports, identity)
    }
}

/// Pick the first port in `ports` whose USB identity matches
pub fn find_in(ports: &[SerialPortInfo], identity: &DeviceIdentity) -> Result<String, DiscoveryError> {
    for port in ports {
        let SerialPortType::UsbPort(usb) = &port.port_type else {
            continue;
        };
        if usb.vid != identity.vendor_id || usb.pid != identity.product_id {
            continue;
        }

        let manufacturer = usb.manufacturer.as_deref().unwrap_or("");
        let product = usb.product.as_deref().unwrap_or("");
        if manufacturer == identity.vendor_name && product == identity.product_name {
            info!(
                "Found {} / {} on {}",
                manufacturer, product, port.port_name
            );
            return Ok(port.port_name.clone());
        }
        debug!(
            "{}: id matches but strings are {:?} / {:?}",
            port.port_name, usb.manufacturer, usb.product
        );
    }
    Err(identity.not_found())
}

/// Open the sensor port with the configured baud rate and timeout
pub fn open_port(path: &str, device: &DeviceConfig) -> Result<Box<dyn SerialPort>, DiscoveryError> {
    serialport::new(path, device.baud_rate)
        .timeout(device.timeout())
        .open()
        .map_err(|source| DiscoveryError::Open {
            path: path.to_string(),
            source,
        })
}
