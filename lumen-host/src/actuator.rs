//! Display brightness actuator

use std::process::Command;

use log::debug;

use crate::config::DisplayConfig;
use crate::error::ActuatorError;

/// Sets the display brightness
pub trait BrightnessActuator {
    /// Apply a brightness level in `0.0..=1.0`
    fn set_brightness(&mut self, level: f32) -> Result<(), ActuatorError>;
}

impl<A: BrightnessActuator + ?Sized> BrightnessActuator for &mut A {
    fn set_brightness(&mut self, level: f32) -> Result<(), ActuatorError> {
        (**self).set_brightness(level)
    }
}

/// Brightness via `xrandr --output <name> --brightness <level>`
#[derive(Debug, Clone)]
pub struct XrandrBrightness {
    command: String,
    output: String,
}

impl XrandrBrightness {
    pub fn new(config: &DisplayConfig) -> Self {
        Self {
            command: config.command.clone(),
            output: config.output.clone(),
        }
    }

    /// Render a level as the command argument (two decimals)
    pub fn format_level(level: f32) -> Result<String, ActuatorError> {
        if level.is_nan() {
            return Err(ActuatorError::InvalidLevel(level));
        }
        Ok(format!("{:.2}", level.clamp(0.0, 1.0)))
    }

    fn args<'a>(&'a self, level: &'a str) -> [&'a str; 4] {
        ["--output", &self.output, "--brightness", level]
    }
}

impl BrightnessActuator for XrandrBrightness {
    fn set_brightness(&mut self, level: f32) -> Result<(), ActuatorError> {
        let level = Self::format_level(level)?;
        let args = self.args(&level);
        debug!("Running {} {}", self.command, args.join(" "));

        let status = Command::new(&self.command)
            .args(args)
            .status()
            .map_err(|source| ActuatorError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        if !status.success() {
            return Err(ActuatorError::CommandFailed {
                command: self.command.clone(),
                status,
            });
        }
        Ok(())
    }
}
