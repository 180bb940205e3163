//! Host configuration
//!
//! Loaded from a TOML file; every field has a default, so an empty file
//! (or no file at all) yields a working configuration.
//!
//! ```toml
//! log_level = "debug"
//!
//! [device]
//! vendor_id = 0x16C0
//! product_id = 0x05DC
//! port = "/dev/ttyACM0"   # skip discovery
//!
//! [display]
//! output = "eDP-1"
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::discovery::DeviceIdentity;
use crate::error::ConfigError;

/// Top-level host configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HostConfig {
    /// Default log filter; `RUST_LOG` overrides it
    pub log_level: String,
    pub device: DeviceConfig,
    pub display: DisplayConfig,
    pub poll: PollConfig,
}

/// Sensor identity and serial settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeviceConfig {
    pub vendor_id: u16,
    pub product_id: u16,
    pub vendor_name: String,
    pub product_name: String,
    /// Explicit port path; bypasses discovery when set
    pub port: Option<String>,
    pub baud_rate: u32,
    /// Per-request response timeout
    pub timeout_ms: u64,
}

/// Brightness command settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    /// Output name passed to `--output`
    pub output: String,
    /// Program to run
    pub command: String,
}

/// Poll loop settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PollConfig {
    /// Pause between cycles; 0 polls back to back
    pub interval_ms: u64,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
            device: DeviceConfig::default(),
            display: DisplayConfig::default(),
            poll: PollConfig::default(),
        }
    }
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            vendor_id: 0x16C0,
            product_id: 0x05DC,
            vendor_name: "ProiectPM".into(),
            product_name: "BrightnessAdjuster".into(),
            port: None,
            baud_rate: 115_200,
            timeout_ms: 5_000,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            output: "LVDS".into(),
            command: "xrandr".into(),
        }
    }
}

impl HostConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Read and parse a configuration file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

impl DeviceConfig {
    /// USB identity used for discovery
    pub fn identity(&self) -> DeviceIdentity {
        DeviceIdentity {
            vendor_id: self.vendor_id,
            product_id: self.product_id,
            vendor_name: self.vendor_name.clone(),
            product_name: self.product_name.clone(),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl PollConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = HostConfig::from_toml_str("").unwrap();
        assert_eq!(config, HostConfig::default());
        assert_eq!(config.device.vendor_id, 0x16C0);
        assert_eq!(config.display.output, "LVDS");
        assert_eq!(config.device.timeout(), Duration::from_secs(5));
    }

    #[test]
    fn test_partial_sections() {
        let config = HostConfig::from_toml_str(
            r#"
            log_level = "debug"

            [device]
            port = "/dev/ttyACM0"
            timeout_ms = 250

            [display]
            output = "eDP-1"
            "#,
        )
        .unwrap();

        assert_eq!(config.log_level, "debug");
        assert_eq!(config.device.port.as_deref(), Some("/dev/ttyACM0"));
        assert_eq!(config.device.timeout_ms, 250);
        assert_eq!(config.device.baud_rate, 115_200);
        assert_eq!(config.display.output, "eDP-1");
        assert_eq!(config.display.command, "xrandr");
        assert_eq!(config.poll.interval_ms, 0);
    }

    #[test]
    fn test_identity_from_config() {
        let identity = DeviceConfig::default().identity();
        assert_eq!(identity.product_id, 0x05DC);
        assert_eq!(identity.product_name, "BrightnessAdjuster");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = HostConfig::from_toml_str("[poll]\nperiod = 5\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = HostConfig::load(Path::new("/nonexistent/lumen.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
