//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the traits defined
//! in lumen-core, written against the lumen-hal pin and timer traits:
//!
//! - Ultrasonic echo sensor (pulse timer)
//! - GPIO indicator output (LED or relay)

#![no_std]
#![deny(unsafe_code)]

pub mod indicator;
pub mod sensor;
