//! Simulated fast clock
//!
//! Single-producer / single-consumer handshake between the tick source
//! (timer task or interrupt) and the main loop:
//!
//! - The producer calls [`FastClock::on_tick`]. Every `ticks_per_minute`
//!   ticks it advances the minute, then sets the pending flag.
//! - The consumer calls [`FastClock::take_pending`], which clears the flag
//!   and returns the minute to display.
//!
//! Every field is a single-word atomic, so both sides are interrupt safe
//! without locks. The flag is not a queue: minutes that pass while it is
//! still set are coalesced and the consumer only sees the latest one.

use portable_atomic::{AtomicBool, AtomicU16, AtomicU8, Ordering};

use crate::timetable::MINUTES_PER_DAY;

/// Minute following `minute`, wrapping at midnight
pub const fn next_minute(minute: u16) -> u16 {
    (minute % MINUTES_PER_DAY + 1) % MINUTES_PER_DAY
}

/// Fast clock shared between tick source and main loop
#[derive(Debug)]
pub struct FastClock {
    /// Simulated minute of day, written only by the tick source
    minute: AtomicU16,
    /// Ticks since the last minute change, tick source only
    ticks: AtomicU8,
    /// Ticks per simulated minute
    ticks_per_minute: u8,
    /// Set by the tick source, cleared by the main loop
    pending: AtomicBool,
}

impl FastClock {
    /// Create a clock starting at `start_minute`
    ///
    /// `start_minute` is wrapped into the day and a zero tick rate is
    /// treated as one tick per minute.
    pub const fn new(start_minute: u16, ticks_per_minute: u8) -> Self {
        Self {
            minute: AtomicU16::new(start_minute % MINUTES_PER_DAY),
            ticks: AtomicU8::new(0),
            ticks_per_minute: if ticks_per_minute == 0 { 1 } else { ticks_per_minute },
            pending: AtomicBool::new(false),
        }
    }

    /// Register one real-time tick
    ///
    /// Returns true if the simulated minute advanced.
    pub fn on_tick(&self) -> bool {
        let ticks = self.ticks.load(Ordering::Relaxed).saturating_add(1);
        if ticks < self.ticks_per_minute {
            self.ticks.store(ticks, Ordering::Relaxed);
            return false;
        }
        self.ticks.store(0, Ordering::Relaxed);
        self.advance_minute();
        true
    }

    /// Advance one simulated minute and flag it for the main loop
    ///
    /// Returns the new minute.
    pub fn advance_minute(&self) -> u16 {
        let next = next_minute(self.minute.load(Ordering::Relaxed));
        self.minute.store(next, Ordering::Release);
        self.pending.store(true, Ordering::Release);
        next
    }

    /// Consume the pending flag
    ///
    /// Returns the current minute if it changed since the last call.
    pub fn take_pending(&self) -> Option<u16> {
        if self.pending.swap(false, Ordering::AcqRel) {
            Some(self.minute.load(Ordering::Acquire))
        } else {
            None
        }
    }

    /// Whether a minute change is waiting for the main loop
    pub fn is_pending(&self) -> bool {
        self.pending.load(Ordering::Acquire)
    }

    /// Current simulated minute of day
    pub fn current_minute(&self) -> u16 {
        self.minute.load(Ordering::Acquire)
    }

    pub fn ticks_per_minute(&self) -> u8 {
        self.ticks_per_minute
    }
}
