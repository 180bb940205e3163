//! Host error types

use std::io;
use std::path::PathBuf;

use lumen_protocol::{FrameError, PayloadError, Request, Response};
use thiserror::Error;

/// Failures talking to the sensor over the link
#[derive(Debug, Error)]
pub enum LinkError {
    #[error("link I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("no response within the link timeout")]
    Timeout,

    #[error("link closed by device")]
    Closed,

    #[error("bad frame: {0}")]
    Frame(#[from] FrameError),

    #[error("malformed distance reply: {0}")]
    Payload(#[from] PayloadError),

    #[error("device rejected {0:?}")]
    Rejected(Request),

    #[error("unexpected {response:?} in reply to {request:?}")]
    UnexpectedResponse { request: Request, response: Response },
}

/// Failures applying a zone decision
#[derive(Debug, Error)]
pub enum ActuatorError {
    #[error("brightness level {0} is not a number in 0.0..=1.0")]
    InvalidLevel(f32),

    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` exited with {status}")]
    CommandFailed {
        command: String,
        status: std::process::ExitStatus,
    },

    #[error("indicator request failed: {0}")]
    Link(#[from] LinkError),
}

/// Failures locating or opening the sensor
#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("failed to enumerate serial ports: {0}")]
    Enumerate(#[source] serialport::Error),

    #[error("no device {vendor_id:04x}:{product_id:04x} ({vendor_name} / {product_name}) found")]
    NotFound {
        vendor_id: u16,
        product_id: u16,
        vendor_name: String,
        product_name: String,
    },

    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: serialport::Error,
    },
}

/// Failures loading the host configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}
