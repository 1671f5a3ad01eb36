//! Board configuration

use crate::clock::EndOfDayPolicy;
use crate::error::ConfigError;
use crate::timetable::MINUTES_PER_DAY;

/// Simulated time at power-on (09:30)
pub const DEFAULT_START_MINUTE: u16 = 570;

/// Real-time ticks per simulated minute
pub const DEFAULT_TICKS_PER_MINUTE: u8 = 5;

/// Real-time tick interval in milliseconds
pub const DEFAULT_TICK_INTERVAL_MS: u32 = 1000;

/// Departures shown below the header
pub const DEFAULT_VISIBLE_ROWS: u8 = 5;

/// Most departure rows that fit between header and status line
pub const MAX_VISIBLE_ROWS: u8 = 6;

/// Departure board configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BoardConfig {
    /// Fast clock minute of day at power-on
    pub start_minute: u16,
    /// Ticks per simulated minute (5 ticks of 1 s = one minute every 5 s)
    pub ticks_per_minute: u8,
    /// Tick interval (ms)
    pub tick_interval_ms: u32,
    /// Behaviour after the last departure of the day
    pub end_of_day: EndOfDayPolicy,
    /// Number of departure rows on screen
    pub visible_rows: u8,
}

impl BoardConfig {
    /// Default configuration, usable in `const` context
    pub const fn new() -> Self {
        Self {
            start_minute: DEFAULT_START_MINUTE,
            ticks_per_minute: DEFAULT_TICKS_PER_MINUTE,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            end_of_day: EndOfDayPolicy::ClampToLast,
            visible_rows: DEFAULT_VISIBLE_ROWS,
        }
    }

    /// Check all values are in range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.start_minute >= MINUTES_PER_DAY {
            return Err(ConfigError::InvalidConfig {
                field: "start_minute",
            });
        }
        if self.ticks_per_minute == 0 {
            return Err(ConfigError::InvalidConfig {
                field: "ticks_per_minute",
            });
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::InvalidConfig {
                field: "tick_interval_ms",
            });
        }
        if self.visible_rows == 0 || self.visible_rows > MAX_VISIBLE_ROWS {
            return Err(ConfigError::InvalidConfig {
                field: "visible_rows",
            });
        }
        Ok(())
    }

    /// Real time for one simulated minute (ms)
    pub fn real_ms_per_minute(&self) -> u32 {
        self.tick_interval_ms
            .saturating_mul(self.ticks_per_minute as u32)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new()
    }
}
