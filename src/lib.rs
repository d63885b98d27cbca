//! Platform-agnostic driver for the Tris10 FindBall infrared ball
//! finder, an NXT-style digital sensor.
//!
//! The device carries five IR photodiodes in a fan. Its firmware keeps a
//! running average of the signal on each eye and exposes three things over
//! the sensor port: the number of the eye with the best reading, the
//! overall signal strength, and the per-eye strength above that average.

#![cfg_attr(not(test), no_std)]

pub mod findball;
pub mod port;

pub use crate::findball::{Direction, Error, FindBall, StrengthReadings};
pub use crate::port::{I2cPort, Transact};
