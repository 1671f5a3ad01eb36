//! Configuration errors
//!
//! Everything the board runs on is compiled in, so the only errors are
//! configuration mistakes. They are detected at startup and are fatal.

/// Errors detected while validating the compiled-in configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Timetable not sorted: row `index` departs before the row above it
    Unsorted { index: usize },
    /// More rows than the timetable can hold
    CapacityExceeded,
    /// Timetable has no rows
    Empty,
    /// Row `index` has an hour >= 24 or a minute >= 60
    InvalidTime { index: usize },
    /// A board configuration value is out of range
    InvalidConfig { field: &'static str },
}

impl ConfigError {
    /// Short human-readable description for logs and the error screen
    pub const fn description(&self) -> &'static str {
        match self {
            ConfigError::Unsorted { .. } => "table not sorted",
            ConfigError::CapacityExceeded => "table too large",
            ConfigError::Empty => "table empty",
            ConfigError::InvalidTime { .. } => "invalid time",
            ConfigError::InvalidConfig { .. } => "invalid config",
        }
    }
}
