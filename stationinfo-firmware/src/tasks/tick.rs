//! Fast clock tick task
//!
//! Drives the fast clock from a fixed real-time cadence. This task only
//! advances the clock; the main loop recomputes the window and redraws.

use defmt::*;
use embassy_time::{Duration, Ticker};
use stationinfo_core::clock::FastClock;

use crate::board::BOARD_CONFIG;

/// Fast clock shared with the main loop
pub static FAST_CLOCK: FastClock =
    FastClock::new(BOARD_CONFIG.start_minute, BOARD_CONFIG.ticks_per_minute);

/// Tick task - one clock tick per interval
#[embassy_executor::task]
pub async fn tick_task(interval_ms: u32) {
    info!("Tick task started ({} ms per tick)", interval_ms);

    let mut ticker = Ticker::every(Duration::from_millis(interval_ms as u64));

    loop {
        ticker.next().await;

        if FAST_CLOCK.on_tick() {
            trace!("Fast clock minute {}", FAST_CLOCK.current_minute());
        }
    }
}
