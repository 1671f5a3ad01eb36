//! Fast clock and departure window
//!
//! The fast clock is the only state shared between the tick source and the
//! main loop. The window is owned by the main loop and recomputed each time
//! it consumes a pending minute.

pub mod fast_clock;
pub mod window;

pub use fast_clock::{next_minute, FastClock};
pub use window::{first_departure_after, select, DepartureWindow, EndOfDayPolicy, Selection};
