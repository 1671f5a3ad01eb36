//! Embassy async tasks

pub mod tick;

pub use tick::{tick_task, FAST_CLOCK};
