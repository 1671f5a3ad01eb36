//! Departure records

use super::messages::MessageId;
use crate::error::ConfigError;

/// Minutes in a day; the fast clock wraps here
pub const MINUTES_PER_DAY: u16 = 1440;

/// Convert hours and minutes to minutes since midnight
pub const fn minutes_from_hr_min(hours: u8, minutes: u8) -> u16 {
    hours as u16 * 60 + minutes as u16
}

/// Split minutes since midnight into (hours, minutes)
pub const fn split_minute_of_day(minute_of_day: u16) -> (u8, u8) {
    let minute_of_day = minute_of_day % MINUTES_PER_DAY;
    ((minute_of_day / 60) as u8, (minute_of_day % 60) as u8)
}

/// One scheduled departure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DepartureRecord {
    minute_of_day: u16,
    platform: u8,
    message: MessageId,
}

impl DepartureRecord {
    /// Create a record from hours and minutes
    ///
    /// Returns `None` if the time is not a valid time of day.
    pub const fn new(hours: u8, minutes: u8, platform: u8, message: MessageId) -> Option<Self> {
        if hours >= 24 || minutes >= 60 {
            return None;
        }
        Some(Self {
            minute_of_day: minutes_from_hr_min(hours, minutes),
            platform,
            message,
        })
    }

    /// Departure time in minutes since midnight, in [0, 1440)
    pub const fn minute_of_day(&self) -> u16 {
        self.minute_of_day
    }

    /// Departure time as (hours, minutes)
    pub const fn time(&self) -> (u8, u8) {
        split_minute_of_day(self.minute_of_day)
    }

    /// Platform number
    pub const fn platform(&self) -> u8 {
        self.platform
    }

    /// Train name / status message shown for this departure
    pub const fn message(&self) -> MessageId {
        self.message
    }
}

/// A literal timetable row as written in the station data
///
/// Rows are plain tuples of numbers so the table reads like a printed
/// timetable. They become [`DepartureRecord`]s when the store is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TimetableRow {
    pub hours: u8,
    pub minutes: u8,
    pub platform: u8,
    pub message: MessageId,
}

impl TimetableRow {
    pub const fn new(hours: u8, minutes: u8, platform: u8, message: MessageId) -> Self {
        Self {
            hours,
            minutes,
            platform,
            message,
        }
    }

    /// Minutes since midnight (not range checked)
    pub const fn minute_of_day(&self) -> u16 {
        minutes_from_hr_min(self.hours, self.minutes)
    }

    /// Convert to a record; `index` is only used for the error
    pub const fn to_record(&self, index: usize) -> Result<DepartureRecord, ConfigError> {
        match DepartureRecord::new(self.hours, self.minutes, self.platform, self.message) {
            Some(record) => Ok(record),
            None => Err(ConfigError::InvalidTime { index }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_from_hr_min() {
        assert_eq!(minutes_from_hr_min(0, 0), 0);
        assert_eq!(minutes_from_hr_min(6, 0), 360);
        assert_eq!(minutes_from_hr_min(7, 45), 465);
        assert_eq!(minutes_from_hr_min(23, 59), 1439);
    }

    #[test]
    fn test_split_minute_of_day() {
        assert_eq!(split_minute_of_day(479), (7, 59));
        assert_eq!(split_minute_of_day(1439), (23, 59));
        // Out of range values wrap into the day
        assert_eq!(split_minute_of_day(1440), (0, 0));
    }

    #[test]
    fn test_record_rejects_invalid_time() {
        assert!(DepartureRecord::new(24, 0, 1, MessageId::RE22).is_none());
        assert!(DepartureRecord::new(12, 60, 1, MessageId::RE22).is_none());

        let record = DepartureRecord::new(18, 3, 1, MessageId::RB89).unwrap();
        assert_eq!(record.minute_of_day(), 1083);
        assert_eq!(record.time(), (18, 3));
        assert_eq!(record.platform(), 1);
        assert_eq!(record.message(), MessageId::RB89);
    }

    #[test]
    fn test_row_to_record() {
        let row = TimetableRow::new(25, 0, 2, MessageId::IC34);
        assert_eq!(row.to_record(7), Err(ConfigError::InvalidTime { index: 7 }));

        let row = TimetableRow::new(8, 10, 2, MessageId::NO_BOARD);
        assert_eq!(row.to_record(0).unwrap().minute_of_day(), 490);
    }
}
