//! Configuration types
//!
//! The board has no external configuration: everything here is compiled in
//! and validated once at startup.

pub mod board;

pub use board::*;
