//! Lumen Sensor Link Protocol
//!
//! This crate defines the request/response protocol spoken between the
//! sensor board (RP2040) and the host that drives the display. The sensor is
//! a pure server: it never speaks unless asked.
//!
//! # Protocol Overview
//!
//! All messages use a simple binary frame format:
//! ```text
//! ┌───────┬────────┬──────┬─────────────┬──────────┐
//! │ START │ LENGTH │ TYPE │ PAYLOAD     │ CHECKSUM │
//! │ 1B    │ 1B     │ 1B   │ 0–16B       │ 1B       │
//! └───────┴────────┴──────┴─────────────┴──────────┘
//! ```
//!
//! Three requests exist: indicator off, indicator on, measure distance.
//! A distance reply carries a 4-digit zero-padded ASCII decimal plus NUL,
//! with two reserved codes for the timeout and no-obstacle sentinels.

#![no_std]
#![deny(unsafe_code)]

#[cfg(feature = "std")]
extern crate std;

pub mod frame;
pub mod messages;
pub mod payload;
pub mod reading;

pub use frame::{Frame, FrameError, FrameParser, FRAME_START, MAX_FRAME_SIZE, MAX_PAYLOAD_SIZE};
pub use messages::{Request, Response};
pub use payload::{PayloadError, ReplyPayload, REPLY_LEN};
pub use reading::{Reading, FAR_DISTANCE_CM, MAX_DISTANCE_CM, NO_OBSTACLE, TIMEOUT_HIGH};
