//! Board-agnostic core logic for the StationInfo departure board
//!
//! This crate contains everything that does not depend on the display
//! hardware or the MCU:
//!
//! - Timetable model, message catalog and the compiled-in station data
//! - Fast clock shared between the tick source and the main loop
//! - Departure window selection (which row is at the top of the board)
//! - Board configuration and configuration errors

#![no_std]
#![deny(unsafe_code)]

pub mod clock;
pub mod config;
pub mod error;
pub mod timetable;

pub use error::ConfigError;
