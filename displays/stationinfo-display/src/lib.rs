//! Display abstraction and departure board rendering for StationInfo
//!
//! This crate provides:
//! - `DisplayBackend` trait for text-grid displays
//! - `Screen` character buffer with a colour tone per row
//! - `BoardRenderer` that lays out the departure board
//! - `TftBackend` drawing the grid on any `embedded-graphics` RGB565 target
//!
//! # Architecture
//!
//! The firmware renders into a `Screen`, then pushes it to a backend. The
//! renderer never touches hardware, so the layout is testable on the host.

#![no_std]

pub mod backend;
pub mod board;
pub mod screen;
pub mod tft;

// Re-export key types
pub use backend::{DisplayBackend, DisplayError, Tone};
pub use board::{format_clock, format_departure, BoardRenderer, STATUS_ROW};
pub use screen::{Screen, SCREEN_COLS, SCREEN_ROWS};
pub use tft::{Palette, TftBackend};
